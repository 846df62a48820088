use thiserror::Error;

/// Everything that can go wrong while browsing repositories.
///
/// None of these are fatal to the process; each maps to exactly one
/// user-visible message, so reporting an error is printing it.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// HTTP 403 from the API. `reset` is the already-formatted local time
    /// at which the rate limit window opens again.
    #[error("Rate limit exceeded. Try again after {reset}.")]
    RateLimited { reset: String },

    /// Valid response, zero repositories on the first page.
    #[error("No repositories found")]
    EmptyResult,

    /// Any transport or deserialization failure.
    #[error("Error fetching repositories")]
    Fetch(#[source] reqwest::Error),

    /// A language filter matched nothing in the loaded collection.
    #[error("No repository found with the selected language.")]
    NoFilterMatch,
}
