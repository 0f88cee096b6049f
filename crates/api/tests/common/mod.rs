#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use promptsmith_api::config::ServerConfig;
use promptsmith_api::router::build_app_router;
use promptsmith_api::state::AppState;
use promptsmith_core::error::RelayError;
use promptsmith_core::relay::PromptImprover;
use promptsmith_core::types::{AlternativePrompts, ImprovedPrompts};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// What a [`FakeImprover`] was asked, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Improve { raw: String, alternatives: bool },
    Refine { prompt: String, instruction: String },
}

/// In-memory improver with a fixed outcome.
///
/// On success it always returns alternatives (even when not asked for) so
/// tests can check the server drops them.
pub struct FakeImprover {
    pub failure: Option<RelayError>,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeImprover {
    pub fn ok() -> Self {
        Self {
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: RelayError) -> Self {
        Self {
            failure: Some(err),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PromptImprover for FakeImprover {
    async fn improve(
        &self,
        raw_prompt: &str,
        want_alternatives: bool,
    ) -> Result<ImprovedPrompts, RelayError> {
        self.calls.lock().unwrap().push(Call::Improve {
            raw: raw_prompt.to_string(),
            alternatives: want_alternatives,
        });
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(ImprovedPrompts {
            main_prompt: format!("Mejorado: {raw_prompt}"),
            alternative_prompts: Some(AlternativePrompts {
                claridad: "claro".into(),
                creatividad: "creativo".into(),
                precision: "preciso".into(),
            }),
        })
    }

    async fn refine(&self, prompt: &str, instruction: &str) -> Result<String, RelayError> {
        self.calls.lock().unwrap().push(Call::Refine {
            prompt: prompt.to_string(),
            instruction: instruction.to_string(),
        });
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(format!("  {prompt} ({instruction})\n"))
    }
}

/// Build the full application router around `improver`.
///
/// Goes through `build_app_router`, so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) as production.
pub fn build_test_app(improver: Arc<FakeImprover>) -> Router {
    build_test_app_with_config(improver, test_config())
}

pub fn build_test_app_with_config(improver: Arc<FakeImprover>, config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        improver,
        model: Arc::from("fake-model"),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
