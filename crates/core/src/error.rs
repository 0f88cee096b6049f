use crate::types::HistoryId;

/// Domain-level errors raised before anything reaches the network.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: HistoryId },

    /// A required form field is blank, or input is otherwise unusable.
    /// The message is user-facing.
    #[error("{0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// User-facing message for credential failures.
pub const AUTH_ERROR_MESSAGE: &str =
    "API key no válida. Por favor, verifica la clave en tus variables de entorno.";

/// Failures of a remote round trip (generation or refinement).
///
/// The `Display` output of every variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// Non-success transport status. Carries the server-supplied message
    /// when one was available, otherwise a generic localized fallback.
    #[error("{0}")]
    Request(String),

    /// The body was missing, empty, or did not have the expected shape.
    #[error("{0}")]
    ResponseFormat(String),

    /// The remote service rejected the credential. The payload keeps the
    /// raw upstream message for logging; it is never shown to the user.
    #[error("{AUTH_ERROR_MESSAGE}")]
    Auth(String),
}

impl RelayError {
    /// Raw detail suitable for logs and the `details` field of an error
    /// envelope.
    pub fn details(&self) -> &str {
        match self {
            RelayError::Request(msg) | RelayError::ResponseFormat(msg) | RelayError::Auth(msg) => {
                msg
            }
        }
    }

    /// Build a request error, promoting it to [`RelayError::Auth`] when the
    /// message looks like a credential failure.
    pub fn from_remote_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if is_credential_error(&message) {
            RelayError::Auth(message)
        } else {
            RelayError::Request(message)
        }
    }
}

/// Whether a remote error message refers to the API credential.
pub fn is_credential_error(message: &str) -> bool {
    message.contains("API key not valid") || message.contains("API_KEY")
}
