use axum::routing::{get, post};
use axum::Router;

use crate::handlers::prompts;
use crate::state::AppState;

/// Prompt routes, mounted under `/api`.
///
/// ```text
/// POST   /generate                  -> generate
/// POST   /refine                    -> refine
/// POST   /build                     -> build
/// GET    /options                   -> options
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(prompts::generate))
        .route("/refine", post(prompts::refine))
        .route("/build", post(prompts::build))
        .route("/options", get(prompts::options))
}
