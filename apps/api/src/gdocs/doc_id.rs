use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

// Share links come in two shapes: the canonical `/document/d/<id>` path form
// and the legacy `open?id=<id>` query form. The path form is tried first.
static DOC_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/document/d/([a-zA-Z0-9_-]+)").expect("valid regex"));
static DOC_QUERY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"id=([a-zA-Z0-9_-]+)").expect("valid regex"));

/// Extracts the opaque document id from a Google Docs sharing URL.
/// No network access; the URL is never validated beyond the two patterns.
pub fn extract_doc_id(doc_url: &str) -> Result<String, AppError> {
    for re in [&*DOC_PATH_RE, &*DOC_QUERY_RE] {
        if let Some(caps) = re.captures(doc_url) {
            return Ok(caps[1].to_string());
        }
    }
    Err(AppError::InvalidInput(
        "Invalid Google Docs URL".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_id_from_path_form() {
        let url = "https://docs.google.com/document/d/1aB_c-D3/edit?usp=sharing";
        assert_eq!(extract_doc_id(url).unwrap(), "1aB_c-D3");
    }

    #[test]
    fn test_extracts_id_from_query_form() {
        let url = "https://docs.google.com/open?id=xYz-123_abc";
        assert_eq!(extract_doc_id(url).unwrap(), "xYz-123_abc");
    }

    #[test]
    fn test_path_form_wins_over_query_form() {
        let url = "https://docs.google.com/document/d/path_id/edit?id=query_id";
        assert_eq!(extract_doc_id(url).unwrap(), "path_id");
    }

    #[test]
    fn test_id_stops_at_non_identifier_characters() {
        let url = "https://docs.google.com/document/d/abc123/export?format=txt";
        assert_eq!(extract_doc_id(url).unwrap(), "abc123");
    }

    #[test]
    fn test_unrecognized_url_is_invalid_input() {
        let err = extract_doc_id("https://example.com/not-a-doc").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_string_is_invalid_input() {
        assert!(matches!(
            extract_doc_id("").unwrap_err(),
            AppError::InvalidInput(_)
        ));
    }
}
