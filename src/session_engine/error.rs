//! Input-boundary error types.
//!
//! Only the strict payload parse in [`validator`](super::validator) returns
//! errors. Inside the engine everything degrades softly: malformed records
//! are dropped, an empty dataset becomes a queryable empty session, and
//! redundant selections are ignored.

use thiserror::Error;

/// Errors from decoding the embedded quiz payload.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The payload is not valid JSON at all.
    #[error("quiz payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The payload decoded, but the top level is not a list of records.
    /// Carries the JSON type name actually found.
    #[error("invalid quiz data format: expected a list, got {0}")]
    NotAList(&'static str),
}
