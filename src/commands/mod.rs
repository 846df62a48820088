pub mod browse;
pub mod misc;
pub mod search;

pub use misc::generate_completions;
pub use search::search;
