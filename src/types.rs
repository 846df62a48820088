use serde::{Deserialize, Serialize};

/// A single repository as returned by `GET /users/{username}/repos`.
///
/// Fields come verbatim from the API; anything the response carries beyond
/// these is ignored on deserialization. `description` and `language` are
/// null for plenty of real repositories, hence `Option`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub forks_count: u64,
    pub stargazers_count: u64,
    pub watchers_count: u64,
    pub open_issues_count: u64,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hand-offs between the search, listing and detail layers pass these
    // records around; serializing must not lose or mangle any field.
    #[test]
    fn repo_round_trips_through_json() {
        let repo = Repo {
            id: 1296269,
            name: "Hello-World".to_string(),
            description: Some("My first repository on GitHub!".to_string()),
            language: None,
            forks_count: 9,
            stargazers_count: 80,
            watchers_count: 80,
            open_issues_count: 0,
            created_at: "2011-01-26T19:01:12Z".to_string(),
        };

        let json = serde_json::to_string(&repo).unwrap();
        let back: Repo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, repo);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{
            "id": 42,
            "name": "demo",
            "description": null,
            "language": "Rust",
            "forks_count": 0,
            "stargazers_count": 1,
            "watchers_count": 1,
            "open_issues_count": 2,
            "created_at": "2020-05-01T00:00:00Z",
            "html_url": "https://github.com/someone/demo",
            "fork": false
        }"#;

        let repo: Repo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "demo");
        assert_eq!(repo.language.as_deref(), Some("Rust"));
    }
}
