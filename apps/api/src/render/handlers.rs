use axum::{response::Html, Json};

use crate::errors::AppError;
use crate::models::resume::RenderRequest;
use crate::render::render_resume;

/// POST /api/v1/resume/render
/// Returns the rendered resume as an HTML document.
pub async fn handle_render(Json(req): Json<RenderRequest>) -> Result<Html<String>, AppError> {
    Ok(Html(render_resume(&req)?))
}
