//! `RelayClient` against stub servers and against the real relay router.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use common::{text_form, EchoImprover};
use promptsmith_api::config::ServerConfig;
use promptsmith_api::router::build_app_router;
use promptsmith_api::state::AppState;
use promptsmith_client::{Assistant, RelayClient};
use promptsmith_core::error::{RelayError, AUTH_ERROR_MESSAGE};
use promptsmith_core::relay::{
    PromptImprover, GENERATE_FAILED_MESSAGE, REFINE_FAILED_MESSAGE, RESPONSE_FORMAT_MESSAGE,
};
use promptsmith_core::types::PromptSlot;
use promptsmith_store::PromptLibrary;

/// Serve `app` on an ephemeral local port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A stub answering both relay endpoints with a fixed status and body.
async fn stub(status: StatusCode, body: &'static str, content_type: &'static str) -> RelayClient {
    let handler = move || async move { (status, [("content-type", content_type)], body).into_response() };
    let app = Router::new()
        .route("/api/generate", post(handler))
        .route("/api/refine", post(handler));
    RelayClient::new(serve(app).await)
}

// ---------------------------------------------------------------------------
// Test: success paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn improve_parses_generate_response() {
    let app = Router::new().route(
        "/api/generate",
        post(|Json(body): Json<serde_json::Value>| async move {
            assert_eq!(body["generateAlternatives"], true);
            Json(json!({
                "mainPrompt": format!("Mejorado: {}", body["rawPrompt"].as_str().unwrap()),
                "alternativePrompts": { "claridad": "a", "creatividad": "b", "precision": "c" }
            }))
        }),
    );
    let client = RelayClient::new(serve(app).await);

    let improved = client.improve("un gato", true).await.unwrap();

    assert_eq!(improved.main_prompt, "Mejorado: un gato");
    assert_eq!(improved.alternative_prompts.unwrap().precision, "c");
}

#[tokio::test]
async fn refine_trims_plain_text_body() {
    let client = stub(StatusCode::OK, "\n  Un gato azul.  \n", "text/plain").await;

    assert_eq!(client.refine("Un gato", "azul").await.unwrap(), "Un gato azul.");
}

// ---------------------------------------------------------------------------
// Test: failure mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn server_message_is_used_when_present() {
    let client = stub(
        StatusCode::BAD_GATEWAY,
        r#"{"error":"Failed to refine prompt.","code":"UPSTREAM_ERROR","details":"overloaded"}"#,
        "application/json",
    )
    .await;

    let err = client.refine("x", "y").await.unwrap_err();
    assert_eq!(err, RelayError::Request("Failed to refine prompt.".into()));
}

#[tokio::test]
async fn generic_message_is_used_without_envelope() {
    let client = stub(StatusCode::INTERNAL_SERVER_ERROR, "boom", "text/plain").await;

    assert_eq!(
        client.improve("x", false).await.unwrap_err(),
        RelayError::Request(GENERATE_FAILED_MESSAGE.into())
    );
    assert_eq!(
        client.refine("x", "y").await.unwrap_err(),
        RelayError::Request(REFINE_FAILED_MESSAGE.into())
    );
}

#[tokio::test]
async fn credential_failure_becomes_auth_error() {
    let client = stub(
        StatusCode::BAD_GATEWAY,
        r#"{"error":"Failed to generate improved prompts.","details":"API key not valid. Please pass a valid API key."}"#,
        "application/json",
    )
    .await;

    let err = client.improve("x", true).await.unwrap_err();
    assert_matches!(err, RelayError::Auth(_));
    assert_eq!(err.to_string(), AUTH_ERROR_MESSAGE);
}

#[tokio::test]
async fn malformed_success_body_is_a_format_error() {
    let client = stub(StatusCode::OK, r#"{"unexpected":true}"#, "application/json").await;

    assert_eq!(
        client.improve("x", false).await.unwrap_err(),
        RelayError::ResponseFormat(RESPONSE_FORMAT_MESSAGE.into())
    );
}

#[tokio::test]
async fn empty_refine_body_is_a_format_error() {
    let client = stub(StatusCode::OK, "   ", "text/plain").await;

    assert_matches!(
        client.refine("x", "y").await,
        Err(RelayError::ResponseFormat(_))
    );
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = RelayClient::new(format!("http://{addr}"));

    assert_eq!(
        client.improve("x", false).await.unwrap_err(),
        RelayError::Request(GENERATE_FAILED_MESSAGE.into())
    );
}

// ---------------------------------------------------------------------------
// Test: end to end through the relay router
// ---------------------------------------------------------------------------

async fn relay_server(improver: EchoImprover) -> String {
    let config = ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".into()],
        request_timeout_secs: 30,
    };
    let state = AppState {
        config: Arc::new(config.clone()),
        improver: Arc::new(improver),
        model: Arc::from("echo"),
    };
    serve(build_app_router(state, &config)).await
}

#[tokio::test]
async fn assistant_generates_and_refines_through_relay() {
    let base_url = relay_server(EchoImprover::default()).await;
    let assistant = Assistant::new(RelayClient::new(base_url), PromptLibrary::in_memory());

    let improved = assistant
        .generate(text_form("tema").into(), false, None)
        .await
        .unwrap();
    assert!(improved.main_prompt.starts_with("Mejorado: Actúa como un travel blogger."));
    assert!(improved.alternative_prompts.is_none());

    let refined = assistant.refine(PromptSlot::Main, "más corto").await.unwrap();
    assert!(refined.ends_with("[más corto]"));
    assert_eq!(assistant.session().main_prompt(), Some(refined.as_str()));
    assert_eq!(assistant.history().await.unwrap().len(), 1);
}

#[tokio::test]
async fn relay_upstream_failure_reaches_the_session_error() {
    let base_url = relay_server(EchoImprover::failing()).await;
    let assistant = Assistant::new(RelayClient::new(base_url), PromptLibrary::in_memory());

    assistant
        .generate(text_form("tema").into(), true, None)
        .await
        .unwrap_err();

    assert_eq!(
        assistant.session().error(),
        Some("Failed to generate improved prompts.")
    );
}
