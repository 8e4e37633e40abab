//! Errors raised at the data boundary.
//!
//! Extraction itself never fails; these only come from decoding input
//! handed over by a host.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be decoded.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// A statement carried a line number below 1.
    #[error("statement in {method} has invalid line number {line}")]
    InvalidLine { method: String, line: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
