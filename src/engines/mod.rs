//! Low-level engines
//!
//! Byte-level compute kernels and text-format handling that the
//! sequence types in [`crate::modules`] are built on.

pub mod compute;
pub mod storage;

use thiserror::Error;

/// Engine-level error type
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
