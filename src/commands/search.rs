use anyhow::Result;

use crate::api::GitHub;
use crate::commands::browse;
use crate::error::BrowseError;
use crate::listing::Listing;

/// Look up a user's public repositories and drop into the interactive
/// listing on a non-empty first page.
///
/// Requests run one at a time on the blocking client, so a second search
/// cannot start while this one is in flight. Every failure path exits
/// with its one-line message; nothing is retried.
pub fn search(username: &str) -> Result<()> {
    let github = GitHub::new()?;

    println!("Searching repositories of {}...", username);
    let first_page = match github.user_repos(username, 1) {
        Ok(repos) => repos,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if first_page.is_empty() {
        eprintln!("{}", BrowseError::EmptyResult);
        eprintln!("Note: username might be incorrect or the user has no repositories");
        std::process::exit(1);
    }

    browse::run(&github, Listing::new(username, first_page))
}
