//! The remote prompt-improvement capability.
//!
//! [`PromptImprover`] is the seam between the session logic and whatever
//! reaches the generative service: the relay server implements it on top of
//! Gemini, the caller-side client implements it on top of the relay's HTTP
//! contract, and tests use in-memory fakes.

use async_trait::async_trait;

use crate::error::RelayError;
use crate::types::ImprovedPrompts;

/// Fallback shown when a generation fails without a usable server message.
pub const GENERATE_FAILED_MESSAGE: &str =
    "No se pudieron generar los prompts mejorados. Verifica tu conexión e inténtalo de nuevo.";

/// Fallback shown when a refinement fails without a usable server message.
pub const REFINE_FAILED_MESSAGE: &str =
    "No se pudo refinar el prompt. Verifica tu conexión e inténtalo de nuevo.";

/// Fallback shown when the response body is missing or malformed.
pub const RESPONSE_FORMAT_MESSAGE: &str =
    "La respuesta del servicio no tiene el formato esperado. Inténtalo de nuevo.";

/// Shown when a slot to refine holds no prompt.
pub const MISSING_PROMPT_MESSAGE: &str = "No se encontró el prompt para refinar.";

/// One request/response pair per call. No retries, no streaming, no
/// cancellation contract.
#[async_trait]
pub trait PromptImprover: Send + Sync {
    /// Ask the remote service for an improved main prompt and, when
    /// `want_alternatives` is set, the three stylistic variants.
    async fn improve(
        &self,
        raw_prompt: &str,
        want_alternatives: bool,
    ) -> Result<ImprovedPrompts, RelayError>;

    /// Apply a free-text instruction to an existing prompt. Returns the
    /// modified prompt, trimmed.
    async fn refine(&self, prompt: &str, instruction: &str) -> Result<String, RelayError>;
}
