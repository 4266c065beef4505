use serde::{Deserialize, Serialize};

/// Contact fields collected from the PERSONAL block of a CV.
/// Every field is optional; absent fields are omitted from JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Normalized to an absolute URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Normalized to the bare username, no host or scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

/// One bullet entry within a resume section. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// `item_<n>`, n = 1-based position in the pending buffer at creation.
    pub id: String,
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub description: String,
}

/// A titled, ordered group of items. The parser only ever appends sections
/// that collected at least one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// `sec_<n>`, n assigned at append time; contiguous from 1.
    pub id: String,
    pub title: String,
    pub items: Vec<Item>,
}

/// Root output of the CV parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub user_details: PersonalDetails,
    pub sections: Vec<Section>,
}

/// Body of the render endpoint: a parsed resume plus a template name.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    pub user_details: PersonalDetails,
    pub sections: Vec<Section>,
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_template() -> String {
    "resume_modern".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_personal_fields_are_omitted_from_json() {
        let details = PersonalDetails {
            name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&details).unwrap();
        assert_eq!(json, r#"{"name":"Jane Doe"}"#);
    }

    #[test]
    fn test_empty_parse_result_serializes_to_empty_record() {
        let result = ParseResult::default();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "user_details": {}, "sections": [] })
        );
    }

    #[test]
    fn test_render_request_template_defaults_to_modern() {
        let json = r#"{ "user_details": {}, "sections": [] }"#;
        let req: RenderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.template, "resume_modern");
    }

    #[test]
    fn test_item_optional_fields_default_to_empty() {
        let json = r#"{ "id": "item_1", "primary": "Rust" }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.primary, "Rust");
        assert!(item.secondary.is_empty());
        assert!(item.timeline.is_empty());
        assert!(item.description.is_empty());
    }
}
