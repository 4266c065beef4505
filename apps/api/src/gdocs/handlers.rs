use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::gdocs::doc_id::extract_doc_id;
use crate::gdocs::parser::parse_cv_content;
use crate::models::resume::ParseResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub doc_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub raw_text: String,
}

/// POST /api/v1/resume/import
/// Full pipeline: share URL → document id → plain-text export → ParseResult.
pub async fn handle_import(
    State(state): State<AppState>,
    Json(req): Json<ImportRequest>,
) -> Result<Json<ParseResult>, AppError> {
    let doc_id = extract_doc_id(&req.doc_url)?;
    let text = state.fetcher.fetch_plain_text(&doc_id).await?;
    let parsed = parse_cv_content(&text);
    info!(
        "Imported document {doc_id}: {} sections parsed",
        parsed.sections.len()
    );
    Ok(Json(parsed))
}

/// POST /api/v1/resume/parse
/// Parses caller-supplied text directly. The parser is total, so this
/// handler cannot fail.
pub async fn handle_parse(Json(req): Json<ParseRequest>) -> Json<ParseResult> {
    Json(parse_cv_content(&req.raw_text))
}
