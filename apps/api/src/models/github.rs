use serde::{Deserialize, Serialize};

/// The subset of GitHub repository metadata the extension surfaces as a
/// resume project. Repository listings are passed through as raw JSON;
/// this typed shape is only used by the description-enhancement endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// `owner/repo`, as returned by the GitHub API.
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_deserializes_from_repo_listing_entry() {
        let json = r#"{
            "name": "fastcache",
            "full_name": "octocat/fastcache",
            "description": null,
            "html_url": "https://github.com/octocat/fastcache",
            "language": "Rust",
            "stargazers_count": 42
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.full_name, "octocat/fastcache");
        assert_eq!(project.description, None);
        assert_eq!(project.language.as_deref(), Some("Rust"));
    }
}
