//! Promptsmith domain library.
//!
//! Pure building blocks shared by the relay server and the caller-side
//! client: form data types, the raw-prompt template builder, validation,
//! the relay trait and error taxonomy, per-session prompt state and the
//! history/saved-items list policy. Nothing in here performs I/O.

pub mod error;
pub mod history;
pub mod options;
pub mod relay;
pub mod session;
pub mod template;
pub mod types;
pub mod validation;
pub mod wire;
