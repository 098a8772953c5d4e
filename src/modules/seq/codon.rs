//! Codons and the standard genetic code

use std::fmt;

use itertools::iproduct;

use super::sequence::{SequenceError, SequenceResult};

/// RNA bases in table order
const RNA_BASES: [u8; 4] = [b'A', b'C', b'G', b'U'];

/// Table entry for a stop codon
const STOP: u8 = b'*';

// Indexed by A=0, C=1, G=2, U=3 as first*16 + second*4 + third.
#[rustfmt::skip]
const STANDARD_CODE: [u8; 64] = [
    b'K', b'N', b'K', b'N',  // AA*
    b'T', b'T', b'T', b'T',  // AC*
    b'R', b'S', b'R', b'S',  // AG*
    b'I', b'I', b'M', b'I',  // AU*
    b'Q', b'H', b'Q', b'H',  // CA*
    b'P', b'P', b'P', b'P',  // CC*
    b'R', b'R', b'R', b'R',  // CG*
    b'L', b'L', b'L', b'L',  // CU*
    b'E', b'D', b'E', b'D',  // GA*
    b'A', b'A', b'A', b'A',  // GC*
    b'G', b'G', b'G', b'G',  // GG*
    b'V', b'V', b'V', b'V',  // GU*
    STOP, b'Y', STOP, b'Y',  // UA*
    b'S', b'S', b'S', b'S',  // UC*
    STOP, b'C', b'W', b'C',  // UG*
    b'L', b'F', b'L', b'F',  // UU*
];

static STANDARD_TABLE: CodonTable = CodonTable {
    residues: STANDARD_CODE,
};

fn base_index(base: u8) -> Option<usize> {
    RNA_BASES.iter().position(|&b| b == base)
}

/// Three RNA symbols read as one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([u8; 3]);

impl Codon {
    pub const fn new(bases: [u8; 3]) -> Self {
        Self(bases)
    }

    pub fn bases(&self) -> [u8; 3] {
        self.0
    }

    /// Position in the 64-entry table, `None` if any base is not `ACGU`
    fn index(&self) -> Option<usize> {
        let [first, second, third] = self.0;
        Some(base_index(first)? * 16 + base_index(second)? * 4 + base_index(third)?)
    }
}

impl TryFrom<&[u8]> for Codon {
    type Error = SequenceError;

    fn try_from(window: &[u8]) -> SequenceResult<Self> {
        <[u8; 3]>::try_from(window).map(Codon).map_err(|_| {
            SequenceError::MalformedSequence(format!(
                "a codon needs 3 symbols, got {}",
                window.len()
            ))
        })
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// What a codon means to the translator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Translation {
    /// One-letter amino-acid code
    AminoAcid(char),
    /// End of the protein
    Stop,
}

impl Translation {
    fn from_residue(residue: u8) -> Self {
        match residue {
            STOP => Translation::Stop,
            amino_acid => Translation::AminoAcid(char::from(amino_acid)),
        }
    }
}

/// Immutable codon -> amino acid lookup
#[derive(Debug)]
pub struct CodonTable {
    residues: [u8; 64],
}

impl CodonTable {
    /// The standard genetic code (NCBI translation table 1)
    pub fn standard() -> &'static CodonTable {
        &STANDARD_TABLE
    }

    /// Look up one codon; `None` if it contains a symbol outside `ACGU`
    pub fn translate(&self, codon: Codon) -> Option<Translation> {
        codon
            .index()
            .map(|index| Translation::from_residue(self.residues[index]))
    }

    /// All 64 entries in table order
    pub fn codons(&self) -> impl Iterator<Item = (Codon, Translation)> + '_ {
        iproduct!(RNA_BASES, RNA_BASES, RNA_BASES)
            .zip(self.residues.iter())
            .map(|((first, second, third), &residue)| {
                (Codon::new([first, second, third]), Translation::from_residue(residue))
            })
    }

    /// Codons that end translation
    pub fn stop_codons(&self) -> impl Iterator<Item = Codon> + '_ {
        self.codons()
            .filter(|(_, translation)| *translation == Translation::Stop)
            .map(|(codon, _)| codon)
    }
}
