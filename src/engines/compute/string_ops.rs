//! Byte-level string operations for sequence data
//!
//! These kernels work on raw symbols and know nothing about alphabets;
//! the typed wrappers in [`crate::modules::seq`] decide which ones apply.
//! Matching is case-sensitive throughout.

use super::{ComputeError, ComputeResult};

/// Tally symbols into `[A, C, G, other]`.
///
/// Anything that is not an upper-case `A`, `C` or `G` lands in the last
/// slot, so the four counts always sum to `sequence.len()`.
pub fn count_bases(sequence: &[u8]) -> [usize; 4] {
    let mut counts = [0; 4];

    for &base in sequence {
        match base {
            b'A' => counts[0] += 1,
            b'C' => counts[1] += 1,
            b'G' => counts[2] += 1,
            _ => counts[3] += 1,
        }
    }

    counts
}

/// Fraction of symbols that are `G` or `C`
pub fn gc_fraction(sequence: &[u8]) -> ComputeResult<f64> {
    if sequence.is_empty() {
        return Err(ComputeError::EmptyInput(
            "GC content of an empty sequence is undefined".to_string(),
        ));
    }

    let gc_count = sequence
        .iter()
        .filter(|&&base| base == b'G' || base == b'C')
        .count();

    Ok(gc_count as f64 / sequence.len() as f64)
}

/// Count positions where `a` and `b` differ, over their shared prefix only
pub fn prefix_mismatches(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Find the first symbol of `sequence` that is not in `alphabet`
pub fn first_foreign_symbol(sequence: &[u8], alphabet: &[u8]) -> Option<(usize, u8)> {
    sequence
        .iter()
        .position(|base| !alphabet.contains(base))
        .map(|position| (position, sequence[position]))
}

/// Transcribe DNA to RNA (T -> U); every other symbol is copied as is
pub fn transcribe(dna: &str) -> String {
    dna.replace('T', "U")
}

/// Reverse-transcribe RNA to DNA (U -> T); every other symbol is copied as is
pub fn reverse_transcribe(rna: &str) -> String {
    rna.replace('U', "T")
}

/// Watson-Crick partner of a single DNA base
pub fn complement_base(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'T'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        b'T' => Some(b'A'),
        _ => None,
    }
}

/// Reverse-complement a DNA sequence.
///
/// Only `A`, `C`, `G` and `T` have partners; any other byte fails with
/// [`ComputeError::InvalidSymbol`] carrying its position in the input.
pub fn reverse_complement_dna(sequence: &str) -> ComputeResult<String> {
    sequence
        .bytes()
        .enumerate()
        .rev()
        .map(|(position, symbol)| {
            complement_base(symbol)
                .map(char::from)
                .ok_or(ComputeError::InvalidSymbol { symbol, position })
        })
        .collect()
}
