//! Gemini-backed [`PromptImprover`].

use async_trait::async_trait;
use serde::Deserialize;

use promptsmith_core::error::RelayError;
use promptsmith_core::relay::PromptImprover;
use promptsmith_core::types::{AlternativePrompts, ImprovedPrompts};

use crate::api::{GeminiApi, GeminiApiError, GenerateContentRequest};
use crate::instructions::{
    improve_response_schema, improve_user_prompt, refine_user_prompt,
    IMPROVE_SYSTEM_INSTRUCTION, REFINE_SYSTEM_INSTRUCTION,
};

/// JSON object the model is asked to return for an improvement.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImprovementOutput {
    main_prompt: String,
    #[serde(default)]
    alternatives: Option<AlternativePrompts>,
}

pub struct GeminiImprover {
    api: GeminiApi,
}

impl GeminiImprover {
    pub fn new(api: GeminiApi) -> Self {
        Self { api }
    }

    pub fn model(&self) -> &str {
        self.api.model()
    }
}

/// Map a Gemini client error onto the relay taxonomy.
fn to_relay_error(err: GeminiApiError) -> RelayError {
    match err {
        GeminiApiError::ApiError { message, .. } => RelayError::from_remote_message(message),
        GeminiApiError::Request(e) => RelayError::Request(e.to_string()),
        empty @ GeminiApiError::EmptyResponse { .. } => {
            RelayError::ResponseFormat(empty.to_string())
        }
    }
}

/// Parse the model's JSON text into improved prompts.
///
/// Alternatives are dropped unless they were requested.
fn parse_improvement(text: &str, want_alternatives: bool) -> Result<ImprovedPrompts, RelayError> {
    let output: ImprovementOutput = serde_json::from_str(text)
        .map_err(|e| RelayError::ResponseFormat(format!("Invalid JSON from Gemini: {e}")))?;

    let main_prompt = output.main_prompt.trim().to_string();
    if main_prompt.is_empty() {
        return Err(RelayError::ResponseFormat(
            "Gemini returned an empty mainPrompt".to_string(),
        ));
    }

    Ok(ImprovedPrompts {
        main_prompt,
        alternative_prompts: output.alternatives.filter(|_| want_alternatives),
    })
}

#[async_trait]
impl PromptImprover for GeminiImprover {
    async fn improve(
        &self,
        raw_prompt: &str,
        want_alternatives: bool,
    ) -> Result<ImprovedPrompts, RelayError> {
        let request = GenerateContentRequest::new(
            IMPROVE_SYSTEM_INSTRUCTION,
            improve_user_prompt(raw_prompt, want_alternatives),
        )
        .with_json_schema(improve_response_schema(want_alternatives));

        let text = self.api.generate_text(&request).await.map_err(|e| {
            tracing::error!(error = %e, model = self.model(), "Gemini improvement failed");
            to_relay_error(e)
        })?;

        let improved = parse_improvement(&text, want_alternatives)?;
        tracing::debug!(
            model = self.model(),
            alternatives = improved.alternative_prompts.is_some(),
            "Gemini improvement succeeded"
        );
        Ok(improved)
    }

    async fn refine(&self, prompt: &str, instruction: &str) -> Result<String, RelayError> {
        let request = GenerateContentRequest::new(
            REFINE_SYSTEM_INSTRUCTION,
            refine_user_prompt(prompt, instruction),
        );

        let refined = self.api.generate_text(&request).await.map_err(|e| {
            tracing::error!(error = %e, model = self.model(), "Gemini refinement failed");
            to_relay_error(e)
        })?;

        tracing::debug!(model = self.model(), chars = refined.len(), "Gemini refinement succeeded");
        Ok(refined)
    }
}
