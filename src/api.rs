use chrono::{Local, TimeZone};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

use crate::error::BrowseError;
use crate::types::Repo;

/// Page size used for every listing request.
pub const PER_PAGE: u32 = 10;

const API_BASE: &str = "https://api.github.com";

/// Thin wrapper over the GitHub REST API. Read-only, unauthenticated.
pub struct GitHub {
    http: Client,
}

impl GitHub {
    pub fn new() -> Result<Self, BrowseError> {
        let http = Client::builder()
            .user_agent("reposcope/0.1")
            .build()
            .map_err(BrowseError::Fetch)?;
        Ok(GitHub { http })
    }

    /// Fetch one page of a user's public repositories.
    ///
    /// A 403 is the API's rate-limit signal; the `X-RateLimit-Reset`
    /// header (epoch seconds) is turned into a local clock time for the
    /// error message. Every other failure collapses into `Fetch`.
    pub fn user_repos(&self, username: &str, page: u32) -> Result<Vec<Repo>, BrowseError> {
        let url = repos_url(username, page);
        let resp = self.http.get(&url).send().map_err(BrowseError::Fetch)?;

        if resp.status() == StatusCode::FORBIDDEN {
            return Err(BrowseError::RateLimited {
                reset: reset_time(&resp),
            });
        }

        let resp = resp.error_for_status().map_err(BrowseError::Fetch)?;
        resp.json::<Vec<Repo>>().map_err(BrowseError::Fetch)
    }
}

fn repos_url(username: &str, page: u32) -> String {
    format!(
        "{}/users/{}/repos?per_page={}&page={}",
        API_BASE,
        urlencoding::encode(username),
        PER_PAGE,
        page
    )
}

fn reset_time(resp: &Response) -> String {
    resp.headers()
        .get("X-RateLimit-Reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<i64>().ok())
        .map(format_reset_epoch)
        .unwrap_or_else(|| "later".to_string())
}

/// Format a rate-limit reset epoch as a local clock time.
pub fn format_reset_epoch(epoch: i64) -> String {
    match Local.timestamp_opt(epoch, 0).single() {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => "later".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repos_url_encodes_username() {
        let url = repos_url("octo cat", 3);
        assert_eq!(
            url,
            "https://api.github.com/users/octo%20cat/repos?per_page=10&page=3"
        );
    }

    #[test]
    fn rate_limit_message_carries_local_reset_time() {
        let reset = format_reset_epoch(1_700_000_000);
        let err = BrowseError::RateLimited {
            reset: reset.clone(),
        };

        let msg = err.to_string();
        assert_eq!(msg, format!("Rate limit exceeded. Try again after {reset}."));
        // A clock time, not a fallback phrase or a raw epoch.
        assert_eq!(reset.matches(':').count(), 2);
        assert!(!msg.contains("1700000000"));
    }

    #[test]
    fn out_of_range_epoch_falls_back() {
        assert_eq!(format_reset_epoch(i64::MAX), "later");
    }
}
