use promptsmith_core::error::{CoreError, RelayError};
use promptsmith_store::StoreError;

/// Errors surfaced by [`crate::Assistant`] operations.
///
/// `Display` is the user-facing message for validation and relay failures.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Relay(#[from] RelayError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
