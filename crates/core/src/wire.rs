//! Relay wire contract shared by the server and the caller-side client.
//!
//! ```text
//! POST /api/generate   GenerateRequest  -> 200 GenerateResponse
//! POST /api/refine     RefineRequest    -> 200 text/plain
//! POST /api/build      BuildRequest     -> 200 { data: BuildResponse }
//! any failure                           -> non-2xx ErrorBody
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{ImprovedPrompts, PromptKind};

/// Request body of `POST /api/generate`.
///
/// Fields default when absent so the handler can answer a missing prompt
/// with its own message instead of a deserialization rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GenerateRequest {
    #[serde(default)]
    pub raw_prompt: String,
    #[serde(default)]
    pub generate_alternatives: bool,
}

/// Response body of `POST /api/generate`. `alternativePrompts` is always
/// present, `null` when no variants were produced.
pub type GenerateResponse = ImprovedPrompts;

/// Request body of `POST /api/refine`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RefineRequest {
    #[serde(default)]
    pub prompt_to_refine: String,
    #[serde(default)]
    pub instruction: String,
}

/// Request body of `POST /api/build`: form data plus its kind.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    pub prompt_type: PromptKind,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BuildResponse {
    pub raw_prompt: String,
}

/// Failure envelope returned with every non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
