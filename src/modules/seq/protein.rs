//! Proteins and RNA translation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engines::compute::string_ops;

use super::alphabet::PROTEIN_SYMBOLS;
use super::codon::{Codon, CodonTable, Translation};
use super::sequence::{Rna, SequenceError, SequenceResult};

/// What to do with 1 or 2 symbols left over after the last full codon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingCodon {
    /// Ignore the partial codon
    #[default]
    Drop,
    /// Fail with [`SequenceError::MalformedSequence`]
    Reject,
}

/// Amino-acid chain produced by translating RNA.
///
/// Deserialization checks the residues, so a `Protein` only ever holds the
/// 20 standard one-letter codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ProteinFields")]
pub struct Protein {
    residues: String,
    /// Whether translation ended on a stop codon rather than running out of input
    terminated: bool,
}

impl Protein {
    /// Translate `rna` with the standard genetic code, dropping a trailing partial codon
    pub fn translate(rna: &Rna) -> SequenceResult<Self> {
        Self::translate_with(rna, TrailingCodon::default())
    }

    /// Translate `rna` in frame from its first symbol.
    ///
    /// Codons are read three symbols at a time until a stop codon (which is
    /// not added to the protein) or the end of the strand. A codon holding
    /// anything other than `A`, `C`, `G` or `U` fails with
    /// [`SequenceError::Translation`]; symbols after the stop codon are never
    /// looked at.
    pub fn translate_with(rna: &Rna, trailing: TrailingCodon) -> SequenceResult<Self> {
        let table = CodonTable::standard();
        let mut residues = String::with_capacity(rna.len() / 3);
        let mut windows = rna.as_bytes().chunks_exact(3);

        for (index, window) in windows.by_ref().enumerate() {
            let codon = Codon::try_from(window)?;
            match table.translate(codon) {
                Some(Translation::AminoAcid(amino_acid)) => residues.push(amino_acid),
                Some(Translation::Stop) => {
                    return Ok(Self {
                        residues,
                        terminated: true,
                    })
                }
                None => {
                    return Err(SequenceError::Translation {
                        codon: codon.to_string(),
                        position: index * 3,
                    })
                }
            }
        }

        let remainder = windows.remainder();
        if !remainder.is_empty() {
            match trailing {
                TrailingCodon::Drop => {
                    log::debug!(
                        "dropping {} trailing symbol(s) after the last full codon",
                        remainder.len()
                    );
                }
                TrailingCodon::Reject => {
                    return Err(SequenceError::MalformedSequence(format!(
                        "length {} is not a multiple of 3 ({} trailing symbol(s))",
                        rna.len(),
                        remainder.len()
                    )));
                }
            }
        }

        Ok(Self {
            residues,
            terminated: false,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.residues
    }

    /// Number of residues
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// True if translation stopped at a stop codon
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Whether every residue is one of the 20 standard amino acids
    pub fn is_valid(&self) -> bool {
        self.residues.bytes().all(|residue| PROTEIN_SYMBOLS.contains(&residue))
    }
}

#[derive(Deserialize)]
struct ProteinFields {
    residues: String,
    terminated: bool,
}

impl TryFrom<ProteinFields> for Protein {
    type Error = SequenceError;

    fn try_from(fields: ProteinFields) -> SequenceResult<Self> {
        if let Some((position, symbol)) =
            string_ops::first_foreign_symbol(fields.residues.as_bytes(), PROTEIN_SYMBOLS)
        {
            return Err(SequenceError::Validation {
                alphabet: "Protein",
                symbol,
                position,
            });
        }

        Ok(Self {
            residues: fields.residues,
            terminated: fields.terminated,
        })
    }
}

impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.residues)
    }
}
