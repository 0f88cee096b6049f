//! Caller side of the prompt assistant.
//!
//! [`RelayClient`] speaks the relay server's HTTP contract; [`Assistant`]
//! is the controller that ties a [`PromptImprover`] to the session state
//! and the prompt library.
//!
//! [`PromptImprover`]: promptsmith_core::relay::PromptImprover

pub mod assistant;
pub mod error;
pub mod relay;

pub use assistant::Assistant;
pub use error::ClientError;
pub use relay::RelayClient;
