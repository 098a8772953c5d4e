//! I/O module
//!
//! FASTA records for feeding raw text into the sequence types.

pub mod fasta;

/// Convenience re-exports
pub use fasta::FastaRecord;
