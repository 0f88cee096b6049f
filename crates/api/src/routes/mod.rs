pub mod health;
pub mod prompts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate                                        improve a raw prompt (POST)
/// /refine                                          refine a prompt (POST)
/// /build                                           raw prompt from form data (POST)
/// /options                                         form option catalogue (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(prompts::router())
}
