//! Durable records for prompt history and saved prompts.
//!
//! [`KeyValueStore`] is the storage seam: string keys to string values,
//! with an in-memory and a file-backed implementation. [`PromptLibrary`]
//! keeps the two JSON-array records on top of it.

pub mod error;
pub mod kv;
pub mod library;

pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use library::{PromptLibrary, HISTORY_KEY, SAVED_KEY};
