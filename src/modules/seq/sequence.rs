//! Core strand type
//!
//! [`Strand`] is an immutable run of one-character symbols in 5'->3'
//! order, tagged with an [`Alphabet`] marker. Construction never checks
//! the symbols; validity is a separate query so that malformed input can
//! still be held and inspected.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::alphabet::{Alphabet, DnaAlphabet, RawAlphabet, RnaAlphabet, ValidatedAlphabet};
use super::protein::Protein;
use crate::engines::compute::{string_ops, ComputeError};

/// Error type for sequence operations
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid {alphabet} symbol '{}' at position {position}", .symbol.escape_ascii())]
    Validation {
        alphabet: &'static str,
        symbol: u8,
        position: usize,
    },

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Cannot translate codon {codon} at position {position}")]
    Translation { codon: String, position: usize },

    #[error("Malformed sequence: {0}")]
    MalformedSequence(String),

    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Engine error: {0}")]
    EngineError(#[from] crate::engines::EngineError),
}

impl SequenceError {
    fn domain(err: ComputeError) -> Self {
        SequenceError::Domain(err.to_string())
    }
}

/// Result type for sequence operations
pub type SequenceResult<T> = Result<T, SequenceError>;

/// How [`Strand::distance_with`] treats strands of different length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistancePolicy {
    /// Compare the shared prefix and ignore the longer strand's tail
    #[default]
    SharedPrefix,
    /// Refuse to compare strands of different length
    EqualLength,
}

/// Raw symbol tally in the fixed order A, C, G, other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    /// T in DNA, U in RNA, plus anything invalid
    pub other: usize,
}

impl BaseCounts {
    /// Sum of all four counts
    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.other
    }

    pub fn as_tuple(&self) -> (usize, usize, usize, usize) {
        (self.a, self.c, self.g, self.other)
    }
}

impl From<[usize; 4]> for BaseCounts {
    fn from([a, c, g, other]: [usize; 4]) -> Self {
        Self { a, c, g, other }
    }
}

impl fmt::Display for BaseCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} {}", self.a, self.c, self.g, self.other)
    }
}

/// Immutable symbol sequence tagged with an alphabet
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strand<A> {
    symbols: String,
    #[serde(skip)]
    alphabet: PhantomData<A>,
}

/// Strand with no alphabet
pub type RawStrand = Strand<RawAlphabet>;

/// DNA strand
pub type Dna = Strand<DnaAlphabet>;

/// RNA strand
pub type Rna = Strand<RnaAlphabet>;

impl<A: Alphabet> Strand<A> {
    /// Wrap `symbols` as a strand without checking them
    pub fn new(symbols: impl Into<String>) -> Self {
        Self {
            symbols: symbols.into(),
            alphabet: PhantomData,
        }
    }

    /// Name of the strand's alphabet
    pub fn alphabet_name(&self) -> &'static str {
        A::NAME
    }

    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.symbols.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.symbols
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Tally of A, C, G and everything else.
    ///
    /// This ignores the alphabet: a `T` in RNA or a `U` in DNA is simply
    /// "other", as is any invalid symbol.
    pub fn count(&self) -> BaseCounts {
        string_ops::count_bases(self.as_bytes()).into()
    }

    /// Fraction (0.0..=1.0) of symbols that are G or C.
    ///
    /// An empty strand has no GC content and yields [`SequenceError::Domain`].
    pub fn gc_content(&self) -> SequenceResult<f64> {
        string_ops::gc_fraction(self.as_bytes()).map_err(SequenceError::domain)
    }

    /// GC content as a percentage
    pub fn gc_percent(&self) -> SequenceResult<f64> {
        Ok(100.0 * self.gc_content()?)
    }

    /// Number of mismatching positions over the shared prefix.
    ///
    /// Symbols beyond the shorter strand are not compared, so strands of
    /// different length never fail here; use [`Strand::distance_with`] with
    /// [`DistancePolicy::EqualLength`] to reject them instead.
    pub fn distance<B: Alphabet>(&self, other: &Strand<B>) -> usize {
        string_ops::prefix_mismatches(self.as_bytes(), other.as_bytes())
    }

    /// Mismatch count under an explicit length policy
    pub fn distance_with<B: Alphabet>(
        &self,
        other: &Strand<B>,
        policy: DistancePolicy,
    ) -> SequenceResult<usize> {
        if policy == DistancePolicy::EqualLength && self.len() != other.len() {
            return Err(SequenceError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        Ok(self.distance(other))
    }
}

impl<A: ValidatedAlphabet> Strand<A> {
    /// Whether every symbol belongs to the alphabet
    pub fn is_valid(&self) -> bool {
        A::is_valid_sequence(self.as_bytes())
    }

    /// Like [`Strand::is_valid`], but reports the first offending symbol
    pub fn validate(&self) -> SequenceResult<()> {
        match A::first_invalid(self.as_bytes()) {
            None => Ok(()),
            Some((position, symbol)) => Err(SequenceError::Validation {
                alphabet: A::NAME,
                symbol,
                position,
            }),
        }
    }
}

impl Strand<DnaAlphabet> {
    /// Reverse complement (A<->T, C<->G, read backwards).
    ///
    /// Fails with [`SequenceError::Domain`] on any symbol outside `ACGT`.
    pub fn reverse_complement(&self) -> SequenceResult<Self> {
        string_ops::reverse_complement_dna(self.as_str())
            .map(Self::new)
            .map_err(SequenceError::domain)
    }

    /// RNA copy with every T replaced by U
    pub fn transcribe(&self) -> Rna {
        Rna::from(self)
    }
}

impl Strand<RnaAlphabet> {
    /// DNA copy with every U replaced by T
    pub fn back_transcribe(&self) -> Dna {
        Dna::from(self)
    }

    /// Translate from the first nucleotide with the standard genetic code
    pub fn translate(&self) -> SequenceResult<Protein> {
        Protein::translate(self)
    }
}

impl From<&Dna> for Rna {
    fn from(dna: &Dna) -> Self {
        Rna::new(string_ops::transcribe(dna.as_str()))
    }
}

impl From<Dna> for Rna {
    fn from(dna: Dna) -> Self {
        Rna::from(&dna)
    }
}

impl From<&Rna> for Dna {
    fn from(rna: &Rna) -> Self {
        Dna::new(string_ops::reverse_transcribe(rna.as_str()))
    }
}

impl From<Rna> for Dna {
    fn from(rna: Rna) -> Self {
        Dna::from(&rna)
    }
}

impl<A: Alphabet> From<&str> for Strand<A> {
    fn from(symbols: &str) -> Self {
        Self::new(symbols)
    }
}

impl<A: Alphabet> From<String> for Strand<A> {
    fn from(symbols: String) -> Self {
        Self::new(symbols)
    }
}

impl<A: Alphabet> FromStr for Strand<A> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl<A: Alphabet> AsRef<str> for Strand<A> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<A: Alphabet> fmt::Display for Strand<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}

impl<A: Alphabet> fmt::Debug for Strand<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({:?})", A::NAME, self.symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_count() {
        let dna = Dna::new("AGCTTTTCATTCTGACTGCAACGGGCAATATGTCTCTGTGTGGATTAAAAAAAGAGTGTCTGATAGCAGC");
        assert_eq!(dna.count().as_tuple(), (20, 12, 17, 21));
        assert_eq!(dna.count().to_string(), "20 12 17 21");

        // U and junk fall into "other"
        let rna = Rna::new("ACGUUx");
        assert_eq!(rna.count(), BaseCounts { a: 1, c: 1, g: 1, other: 3 });
    }

    #[test]
    fn test_gc_content() {
        let dna = Dna::new("AGCTATAG");
        assert_eq!(dna.gc_content().unwrap(), 0.375);
        assert_eq!(dna.gc_percent().unwrap(), 37.5);

        let rna = Rna::new("GGCC");
        assert_eq!(rna.gc_content().unwrap(), 1.0);
    }

    #[test]
    fn test_gc_content_empty_is_domain_error() {
        let empty = Dna::new("");
        assert!(matches!(empty.gc_content(), Err(SequenceError::Domain(_))));
        assert!(matches!(empty.gc_percent(), Err(SequenceError::Domain(_))));
    }

    #[test]
    fn test_compute_errors_keep_kernel_message() {
        match Dna::new("ACNT").reverse_complement() {
            Err(err @ SequenceError::Domain(_)) => {
                let kernel = ComputeError::InvalidSymbol { symbol: b'N', position: 2 };
                assert_eq!(err.to_string(), format!("Domain error: {}", kernel));
            }
            other => panic!("Expected Domain error, got {:?}", other),
        }

        match Rna::new("").gc_content() {
            Err(SequenceError::Domain(msg)) => assert!(msg.starts_with("Empty input")),
            other => panic!("Expected Domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_distance() {
        let a = Dna::new("GAGCCTACTAACGGGAT");
        let b = Dna::new("CATCGTAATGACGGCCT");
        assert_eq!(a.distance(&b), 7);
        assert_eq!(b.distance(&a), 7);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn test_distance_shared_prefix_policy() {
        let long = Dna::new("ACGTACGT");
        let short = Dna::new("AGGT");

        // Tail of the longer strand is ignored in both directions
        assert_eq!(long.distance(&short), 1);
        assert_eq!(short.distance(&long), 1);
        assert_eq!(long.distance(&Dna::new("")), 0);
        assert_eq!(
            long.distance_with(&short, DistancePolicy::SharedPrefix).unwrap(),
            1
        );
    }

    #[test]
    fn test_distance_equal_length_policy() {
        let long = Dna::new("ACGTACGT");
        let short = Dna::new("AGGT");

        match long.distance_with(&short, DistancePolicy::EqualLength) {
            Err(SequenceError::LengthMismatch { left, right }) => {
                assert_eq!(left, 8);
                assert_eq!(right, 4);
            }
            other => panic!("Expected LengthMismatch, got {:?}", other),
        }

        let same = Dna::new("ACGAACGA");
        assert_eq!(
            long.distance_with(&same, DistancePolicy::EqualLength).unwrap(),
            2
        );
    }

    #[test]
    fn test_distance_across_alphabets() {
        let dna = Dna::new("ACGT");
        let rna = Rna::new("ACGU");
        assert_eq!(dna.distance(&rna), 1);
    }

    #[test]
    fn test_is_valid() {
        assert!(Dna::new("ACGT").is_valid());
        assert!(Dna::new("").is_valid());
        assert!(!Dna::new("ACGU").is_valid());
        assert!(!Dna::new("acgt").is_valid());
        assert!(!Dna::new("ACGTN").is_valid());

        assert!(Rna::new("ACGU").is_valid());
        assert!(!Rna::new("ACGT").is_valid());
        assert!(!Rna::new("ACgU").is_valid());
    }

    #[test]
    fn test_validate_reports_first_symbol() {
        assert!(Dna::new("ACGT").validate().is_ok());

        match Rna::new("ACGTT").validate() {
            Err(SequenceError::Validation { alphabet, symbol, position }) => {
                assert_eq!(alphabet, "RNA");
                assert_eq!(symbol, b'T');
                assert_eq!(position, 3);
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }

        let err = Dna::new("AxGT").validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid DNA symbol 'x' at position 1");
    }

    #[test]
    fn test_transcription() {
        let dna = Dna::new("GATGGAACTTGACTACGTAAATT");
        let rna = dna.transcribe();
        assert_eq!(rna.as_str(), "GAUGGAACUUGACUACGUAAAUU");
        assert_eq!(rna.back_transcribe(), dna);

        // Invalid symbols pass straight through
        let odd = Rna::from(&Dna::new("TTxU"));
        assert_eq!(odd.as_str(), "UUxU");
        assert_eq!(Dna::from(odd).as_str(), "TTxT");
    }

    #[test]
    fn test_reverse_complement() {
        let dna = Dna::new("AAAACCCGGT");
        assert_eq!(dna.reverse_complement().unwrap().as_str(), "ACCGGGTTTT");
        assert_eq!(Dna::new("").reverse_complement().unwrap().as_str(), "");
    }

    #[test]
    fn test_reverse_complement_rejects_foreign_symbols() {
        for symbols in ["ACGU", "ACGN", "acgt"] {
            assert!(
                matches!(Dna::new(symbols).reverse_complement(), Err(SequenceError::Domain(_))),
                "{} should not complement",
                symbols
            );
        }
    }

    #[test]
    fn test_derived_strands_leave_source_untouched() {
        let dna = Dna::new("ACGT");
        let _ = dna.transcribe();
        let _ = dna.reverse_complement().unwrap();
        assert_eq!(dna.as_str(), "ACGT");
    }

    #[test]
    fn test_parse_and_display() {
        let dna: Dna = "ACGT".parse().unwrap();
        assert_eq!(dna.to_string(), "ACGT");
        assert_eq!(format!("{:?}", dna), "DNA(\"ACGT\")");
        assert_eq!(dna.alphabet_name(), "DNA");
        assert_eq!(RawStrand::from("xyz").len(), 3);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let rna = Rna::new("ACGU");
        let json = serde_json::to_string(&rna).unwrap();
        assert_eq!(json, "\"ACGU\"");

        let back: Rna = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rna);
    }

    proptest! {
        #[test]
        fn rna_round_trip_is_identity(symbols in "[ACGT]{0,200}") {
            let dna = Dna::new(symbols);
            prop_assert_eq!(Dna::from(Rna::from(&dna)), dna);
        }

        #[test]
        fn double_reverse_complement_is_identity(symbols in "[ACGT]{0,200}") {
            let dna = Dna::new(symbols);
            let twice = dna.reverse_complement().unwrap().reverse_complement().unwrap();
            prop_assert_eq!(twice, dna);
        }

        #[test]
        fn counts_sum_to_length(symbols in "[ACGTUN ]{0,200}") {
            let strand = RawStrand::new(symbols);
            prop_assert_eq!(strand.count().total(), strand.len());
        }

        #[test]
        fn distance_is_symmetric_on_equal_length(a in "[ACGT]{40}", b in "[ACGT]{40}") {
            let a = Dna::new(a);
            let b = Dna::new(b);
            prop_assert_eq!(a.distance(&b), b.distance(&a));
            prop_assert!(a.distance(&b) <= a.len());
        }
    }
}
