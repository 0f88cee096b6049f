//! Handlers for the prompt relay and template endpoints.
//!
//! `generate` and `refine` forward to the upstream improver held in
//! [`AppState`]; `build` and `options` are answered locally.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use promptsmith_core::options::FormOptions;
use promptsmith_core::template::build_prompt;
use promptsmith_core::types::PromptData;
use promptsmith_core::validation::validate_prompt_data;
use promptsmith_core::wire::{
    BuildRequest, BuildResponse, GenerateRequest, GenerateResponse, RefineRequest,
};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

pub const MISSING_RAW_PROMPT_MESSAGE: &str = "Missing rawPrompt in request body";

pub const MISSING_REFINE_FIELDS_MESSAGE: &str =
    "Missing promptToRefine or instruction in request body";

pub const GENERATE_UPSTREAM_MESSAGE: &str = "Failed to generate improved prompts.";

pub const REFINE_UPSTREAM_MESSAGE: &str = "Failed to refine prompt.";

pub const INVALID_BUILD_BODY_MESSAGE: &str = "Missing promptType or data in request body";

/// Unwrap a JSON body, answering any extraction failure with `missing`.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>, missing: &str) -> AppResult<T> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        AppError::BadRequest(missing.to_string())
    })
}

// ---------------------------------------------------------------------------
// Relay endpoints
// ---------------------------------------------------------------------------

/// POST /api/generate
///
/// Improve a raw prompt. `alternativePrompts` is `null` unless
/// `generateAlternatives` was set.
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> AppResult<Json<GenerateResponse>> {
    let input = json_body(payload, MISSING_RAW_PROMPT_MESSAGE)?;
    if input.raw_prompt.is_empty() {
        return Err(AppError::BadRequest(MISSING_RAW_PROMPT_MESSAGE.to_string()));
    }

    let mut improved = state
        .improver
        .improve(&input.raw_prompt, input.generate_alternatives)
        .await
        .map_err(|source| AppError::Upstream {
            message: GENERATE_UPSTREAM_MESSAGE,
            source,
        })?;

    if !input.generate_alternatives {
        improved.alternative_prompts = None;
    }

    tracing::info!(
        raw_chars = input.raw_prompt.len(),
        alternatives = improved.alternative_prompts.is_some(),
        "Prompt improved",
    );

    Ok(Json(improved))
}

/// POST /api/refine
///
/// Apply an instruction to a prompt. Responds with the refined prompt as
/// trimmed `text/plain`.
pub async fn refine(
    State(state): State<AppState>,
    payload: Result<Json<RefineRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload, MISSING_REFINE_FIELDS_MESSAGE)?;
    if input.prompt_to_refine.is_empty() || input.instruction.is_empty() {
        return Err(AppError::BadRequest(
            MISSING_REFINE_FIELDS_MESSAGE.to_string(),
        ));
    }

    let refined = state
        .improver
        .refine(&input.prompt_to_refine, &input.instruction)
        .await
        .map_err(|source| AppError::Upstream {
            message: REFINE_UPSTREAM_MESSAGE,
            source,
        })?;

    tracing::info!(refined_chars = refined.len(), "Prompt refined");

    Ok(refined.trim().to_string())
}

// ---------------------------------------------------------------------------
// Template endpoints
// ---------------------------------------------------------------------------

/// POST /api/build
///
/// Validate form data and return the raw prompt built from it.
pub async fn build(
    State(_state): State<AppState>,
    payload: Result<Json<BuildRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload, INVALID_BUILD_BODY_MESSAGE)?;
    let data = PromptData::from_value(input.prompt_type, input.data)?;
    validate_prompt_data(&data)?;

    Ok(Json(DataResponse {
        data: BuildResponse {
            raw_prompt: build_prompt(&data),
        },
    }))
}

/// GET /api/options
///
/// The enumerated choices offered by the forms.
pub async fn options(State(_state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: FormOptions::catalogue(),
    }))
}
