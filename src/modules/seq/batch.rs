//! Batch versions of the strand transformations
//!
//! Inputs are independent immutable values, so they can be processed on
//! rayon's pool when the `parallel` feature is on.

use crate::engines::compute::ParallelCompute;

use super::alphabet::Alphabet;
use super::protein::Protein;
use super::sequence::{Dna, Rna, SequenceResult, Strand};

/// Translate every strand, in order
pub fn translate_all(strands: &[Rna]) -> SequenceResult<Vec<Protein>> {
    Protein::translate.execute_batch(strands)
}

/// GC content of every strand, in order
pub fn gc_content_all<A: Alphabet>(strands: &[Strand<A>]) -> SequenceResult<Vec<f64>> {
    Strand::<A>::gc_content.execute_batch(strands)
}

/// Reverse complement of every strand, in order
pub fn reverse_complement_all(strands: &[Dna]) -> SequenceResult<Vec<Dna>> {
    Dna::reverse_complement.execute_batch(strands)
}
