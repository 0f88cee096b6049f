//! Google Gemini client library.
//!
//! Wraps the `generateContent` REST endpoint with [`reqwest`], holds the
//! fixed instruction templates for prompt improvement and refinement, and
//! provides [`GeminiImprover`], the upstream implementation of
//! [`promptsmith_core::relay::PromptImprover`].

pub mod api;
pub mod config;
pub mod improver;
pub mod instructions;

pub use api::{GeminiApi, GeminiApiError};
pub use config::GeminiConfig;
pub use improver::GeminiImprover;
