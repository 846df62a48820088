//! Growing, filterable view of one user's repositories.
//!
//! A page load is split into two transitions: `begin_load` claims the
//! in-flight slot and names the page to fetch, then `apply_page` or
//! `abort_load` commits or discards the outcome. The caller owns the
//! actual network call, so every transition here is synchronous and
//! deterministic.

use crate::error::BrowseError;
use crate::types::Repo;

pub struct Listing {
    username: String,
    repos: Vec<Repo>,
    languages: Vec<String>,
    filter: Option<String>,
    filtered: Vec<Repo>,
    // Page cursor; page 1 is consumed by the initial search, loads request
    // cursor + 1.
    page: u32,
    loading: bool,
    all_loaded: bool,
}

impl Listing {
    /// Seed the listing with the already-fetched first page.
    pub fn new(username: impl Into<String>, first_page: Vec<Repo>) -> Self {
        let languages = distinct_languages(&first_page);
        Listing {
            username: username.into(),
            filtered: first_page.clone(),
            repos: first_page,
            languages,
            filter: None,
            page: 2,
            loading: false,
            all_loaded: false,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Full collection, arrival order, never re-sorted or de-duplicated.
    pub fn repos(&self) -> &[Repo] {
        &self.repos
    }

    /// Current filtered view; equals `repos()` when no filter is set.
    pub fn visible(&self) -> &[Repo] {
        &self.filtered
    }

    /// Distinct languages observed so far, first-seen order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn all_loaded(&self) -> bool {
        self.all_loaded
    }

    /// Claim the in-flight slot and return the page index to fetch.
    ///
    /// Returns `None` while a load is already pending or once an empty
    /// page has marked the listing complete.
    pub fn begin_load(&mut self) -> Option<u32> {
        if self.loading || self.all_loaded {
            return None;
        }
        self.loading = true;
        Some(self.page + 1)
    }

    /// Commit a successfully fetched page.
    ///
    /// An empty page means there is nothing left and is terminal. A
    /// non-empty page is appended as-is, the language facets are
    /// recomputed, the current filter re-applied and the cursor advanced.
    pub fn apply_page(&mut self, new: Vec<Repo>) {
        self.loading = false;
        if new.is_empty() {
            self.all_loaded = true;
            return;
        }
        self.repos.extend(new);
        self.languages = distinct_languages(&self.repos);
        self.page += 1;
        self.refilter();
    }

    /// Release the in-flight slot after a failed fetch. Nothing else
    /// changes, so the next load retries the same page.
    pub fn abort_load(&mut self) {
        self.loading = false;
    }

    /// Select a language filter; the empty string clears it.
    ///
    /// The filtered view is recomputed from scratch as a function of the
    /// collection and the filter, so repeating the same call gives the
    /// same view and the same outcome. A non-empty filter that matches
    /// nothing reports `NoFilterMatch`.
    pub fn set_language_filter(&mut self, language: &str) -> Result<(), BrowseError> {
        self.filter = if language.is_empty() {
            None
        } else {
            Some(language.to_string())
        };
        self.refilter();
        if self.filter.is_some() && self.filtered.is_empty() {
            return Err(BrowseError::NoFilterMatch);
        }
        Ok(())
    }

    /// Hand out the record at `index` of the visible list, by value.
    /// The detail view works from this copy; nothing is re-fetched.
    pub fn select(&self, index: usize) -> Option<Repo> {
        self.filtered.get(index).cloned()
    }

    fn refilter(&mut self) {
        self.filtered = match &self.filter {
            None => self.repos.clone(),
            Some(lang) => self
                .repos
                .iter()
                .filter(|r| r.language.as_deref() == Some(lang.as_str()))
                .cloned()
                .collect(),
        };
    }
}

/// Distinct languages in first-seen order; repos without one are skipped.
fn distinct_languages(repos: &[Repo]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for repo in repos {
        if let Some(lang) = repo.language.as_deref() {
            if !lang.is_empty() && !seen.iter().any(|s| s == lang) {
                seen.push(lang.to_string());
            }
        }
    }
    seen
}
