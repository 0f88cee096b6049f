use std::sync::Arc;

use promptsmith_core::relay::PromptImprover;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Upstream prompt improver (Gemini in production, a fake in tests).
    pub improver: Arc<dyn PromptImprover>,
    /// Model name reported by the health check.
    pub model: Arc<str>,
}
