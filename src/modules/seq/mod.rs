//! Sequence module
//!
//! This module provides the strand, codon and protein types.

pub mod alphabet;
pub mod batch;
pub mod codon;
pub mod protein;
pub mod sequence;

/// Convenience re-exports
pub use alphabet::{Alphabet, DnaAlphabet, RawAlphabet, RnaAlphabet, ValidatedAlphabet};
pub use codon::{Codon, CodonTable, Translation};
pub use protein::{Protein, TrailingCodon};
pub use sequence::{
    BaseCounts, DistancePolicy, Dna, RawStrand, Rna, SequenceError, SequenceResult, Strand,
};
