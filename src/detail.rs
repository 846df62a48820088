use chrono::{DateTime, Local};

use crate::types::Repo;

/// Render one repository read-only, from the already-fetched record.
/// No network access and no failure modes.
pub fn render(repo: &Repo) -> String {
    let description = repo
        .description
        .as_deref()
        .unwrap_or("No description available");
    let language = repo.language.as_deref().unwrap_or("N/A");

    format!(
        "{name}\n\
         {description}\n\
         \n  Language:    {language}\
         \n  Forks:       {forks}\
         \n  Stars:       {stars}\
         \n  Watchers:    {watchers}\
         \n  Open issues: {issues}\
         \n  Created:     {created}",
        name = repo.name,
        forks = repo.forks_count,
        stars = repo.stargazers_count,
        watchers = repo.watchers_count,
        issues = repo.open_issues_count,
        created = created_date(&repo.created_at),
    )
}

/// Reformat the API's RFC 3339 timestamp as a plain local date. An
/// unparseable value is shown unchanged.
fn created_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
