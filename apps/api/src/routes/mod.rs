pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::gdocs;
use crate::github;
use crate::render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // GitHub integration
        .route("/api/v1/github/user", get(github::handlers::handle_user))
        .route("/api/v1/github/repos", get(github::handlers::handle_repos))
        .route(
            "/api/v1/github/projects/enhance",
            post(github::handlers::handle_enhance),
        )
        // Resume pipeline
        .route(
            "/api/v1/resume/import",
            post(gdocs::handlers::handle_import),
        )
        .route("/api/v1/resume/parse", post(gdocs::handlers::handle_parse))
        .route(
            "/api/v1/resume/render",
            post(render::handlers::handle_render),
        )
        .with_state(state)
}
