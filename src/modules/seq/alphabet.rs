//! Sequence alphabets
//!
//! Alphabets are zero-sized marker types. A [`Strand`](super::Strand)
//! carries one as a type parameter, so DNA and RNA are distinct types
//! without any per-value cost.

use std::fmt;
use std::hash::Hash;

use crate::engines::compute::string_ops;

/// Marker for the symbol set a strand is drawn from
pub trait Alphabet:
    fmt::Debug + Clone + Copy + PartialEq + Eq + Hash + Default + Send + Sync + 'static
{
    /// Human-readable alphabet name
    const NAME: &'static str;
}

/// An alphabet with a fixed, checkable set of symbols
pub trait ValidatedAlphabet: Alphabet {
    /// Every valid symbol, upper case only
    const SYMBOLS: &'static [u8];

    /// Check that every symbol of `sequence` is in the alphabet
    fn is_valid_sequence(sequence: &[u8]) -> bool {
        Self::first_invalid(sequence).is_none()
    }

    /// Position and value of the first symbol outside the alphabet
    fn first_invalid(sequence: &[u8]) -> Option<(usize, u8)> {
        string_ops::first_foreign_symbol(sequence, Self::SYMBOLS)
    }
}

/// Deoxyribonucleic acid: `A`, `C`, `G`, `T`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
}

impl ValidatedAlphabet for DnaAlphabet {
    const SYMBOLS: &'static [u8] = b"ACGT";
}

/// Ribonucleic acid: `A`, `C`, `G`, `U`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
}

impl ValidatedAlphabet for RnaAlphabet {
    const SYMBOLS: &'static [u8] = b"ACGU";
}

/// No alphabet at all; only the generic strand metrics apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RawAlphabet;

impl Alphabet for RawAlphabet {
    const NAME: &'static str = "Strand";
}

/// The 20 standard amino acids by one-letter code
pub const PROTEIN_SYMBOLS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";
