//! Compute primitives for sequence operations
//!
//! Byte-level kernels shared by the strand types, the rabbit recurrence,
//! and a small batch-execution trait.

pub mod recurrence;
pub mod string_ops;

/// Compute operation result type
pub type ComputeResult<T> = Result<T, ComputeError>;

/// Error types for compute operations
#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Invalid symbol '{}' at position {position}", .symbol.escape_ascii())]
    InvalidSymbol { symbol: u8, position: usize },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

/// Apply a fallible per-item operation over a batch of independent inputs.
///
/// Results come back in input order. Without the `parallel` feature the
/// batch runs sequentially and stops at the first error; with it, items are
/// spread over rayon's global pool and one of the errors is returned.
pub trait ParallelCompute<T, R, E> {
    /// Execute the operation over every item
    fn execute_batch(&self, items: &[T]) -> Result<Vec<R>, E>;
}

impl<T, R, E, F> ParallelCompute<T, R, E> for F
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync,
{
    #[cfg(feature = "parallel")]
    fn execute_batch(&self, items: &[T]) -> Result<Vec<R>, E> {
        use rayon::prelude::*;

        items.par_iter().map(self).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn execute_batch(&self, items: &[T]) -> Result<Vec<R>, E> {
        items.iter().map(self).collect()
    }
}
