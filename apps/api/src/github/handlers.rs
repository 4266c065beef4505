use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::github::enhance::enhance_descriptions;
use crate::models::github::Project;
use crate::state::AppState;

/// Pulls the raw `Authorization` header the extension forwards. GitHub
/// accepts `token <PAT>` or `Bearer <PAT>`; the value is passed through
/// untouched.
fn authorization_header(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)
}

/// GET /api/v1/github/user
pub async fn handle_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let authorization = authorization_header(&headers)?;
    Ok(Json(state.github.authenticated_user(authorization).await?))
}

/// GET /api/v1/github/repos
pub async fn handle_repos(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let authorization = authorization_header(&headers)?;
    Ok(Json(state.github.list_repos(authorization).await?))
}

/// POST /api/v1/github/projects/enhance
/// Fills missing project descriptions from READMEs via the LLM.
pub async fn handle_enhance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(projects): Json<Vec<Project>>,
) -> Result<Json<Vec<Project>>, AppError> {
    let authorization = authorization_header(&headers)?;
    let enhanced =
        enhance_descriptions(projects, &state.github, &state.llm, authorization).await;
    Ok(Json(enhanced))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_missing_authorization_header_is_unauthorized() {
        let headers = HeaderMap::new();
        assert!(matches!(
            authorization_header(&headers),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_authorization_header_passes_through_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("token ghp_abc"));
        assert_eq!(authorization_header(&headers).unwrap(), "token ghp_abc");
    }
}
