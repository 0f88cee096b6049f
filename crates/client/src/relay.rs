//! HTTP client for the relay server's prompt endpoints.
//!
//! Implements [`PromptImprover`] over `POST /api/generate` and
//! `POST /api/refine`. The credential for the generative service lives on
//! the server; nothing secret passes through here.

use async_trait::async_trait;

use promptsmith_core::error::{is_credential_error, RelayError};
use promptsmith_core::relay::{
    PromptImprover, GENERATE_FAILED_MESSAGE, REFINE_FAILED_MESSAGE, RESPONSE_FORMAT_MESSAGE,
};
use promptsmith_core::types::ImprovedPrompts;
use promptsmith_core::wire::{ErrorBody, GenerateRequest, GenerateResponse, RefineRequest};

pub struct RelayClient {
    client: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into a [`RelayError`].
    ///
    /// Uses the envelope's `error` message when there is one, `fallback`
    /// otherwise. Credential failures become [`RelayError::Auth`].
    async fn failure(response: reqwest::Response, fallback: &str) -> RelayError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let envelope = serde_json::from_str::<ErrorBody>(&body).ok();

        tracing::warn!(%status, body = %body, "Relay request failed");

        let Some(envelope) = envelope else {
            return RelayError::Request(fallback.to_string());
        };

        let details = envelope.details.unwrap_or_default();
        if is_credential_error(&envelope.error) || is_credential_error(&details) {
            let raw = if details.is_empty() { envelope.error } else { details };
            return RelayError::Auth(raw);
        }

        if envelope.error.trim().is_empty() {
            RelayError::Request(fallback.to_string())
        } else {
            RelayError::Request(envelope.error)
        }
    }
}

#[async_trait]
impl PromptImprover for RelayClient {
    async fn improve(
        &self,
        raw_prompt: &str,
        want_alternatives: bool,
    ) -> Result<ImprovedPrompts, RelayError> {
        let body = GenerateRequest {
            raw_prompt: raw_prompt.to_string(),
            generate_alternatives: want_alternatives,
        };

        let response = self
            .client
            .post(self.url("/api/generate"))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Could not reach relay for generation");
                RelayError::Request(GENERATE_FAILED_MESSAGE.to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::failure(response, GENERATE_FAILED_MESSAGE).await);
        }

        let improved = response.json::<GenerateResponse>().await.map_err(|e| {
            tracing::warn!(error = %e, "Relay returned an unreadable generation body");
            RelayError::ResponseFormat(RESPONSE_FORMAT_MESSAGE.to_string())
        })?;

        if improved.main_prompt.trim().is_empty() {
            return Err(RelayError::ResponseFormat(RESPONSE_FORMAT_MESSAGE.to_string()));
        }

        Ok(ImprovedPrompts {
            main_prompt: improved.main_prompt,
            alternative_prompts: improved.alternative_prompts.filter(|_| want_alternatives),
        })
    }

    async fn refine(&self, prompt: &str, instruction: &str) -> Result<String, RelayError> {
        let body = RefineRequest {
            prompt_to_refine: prompt.to_string(),
            instruction: instruction.to_string(),
        };

        let response = self
            .client
            .post(self.url("/api/refine"))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Could not reach relay for refinement");
                RelayError::Request(REFINE_FAILED_MESSAGE.to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::failure(response, REFINE_FAILED_MESSAGE).await);
        }

        let text = response
            .text()
            .await
            .map_err(|_| RelayError::ResponseFormat(RESPONSE_FORMAT_MESSAGE.to_string()))?;
        let refined = text.trim();
        if refined.is_empty() {
            return Err(RelayError::ResponseFormat(RESPONSE_FORMAT_MESSAGE.to_string()));
        }
        Ok(refined.to_string())
    }
}
