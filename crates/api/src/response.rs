//! Shared response envelope types for API handlers.
//!
//! JSON resources owned by this server use a `{ "data": ... }` envelope.
//! The relay endpoints (`/api/generate`, `/api/refine`) keep the bare
//! shapes their callers already parse.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
