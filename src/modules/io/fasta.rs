//! FASTA records
//!
//! A [`FastaRecord`] is the identifier and raw sequence text of one record.
//! It does not interpret the sequence; callers pick the strand type with
//! [`FastaRecord::to_dna`], [`FastaRecord::to_rna`] or
//! [`FastaRecord::to_strand`].

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engines::storage::formats::{FastaParser, FastaWriter};
use crate::engines::EngineError;
use crate::modules::seq::{Dna, RawStrand, Rna, SequenceError, SequenceResult};

/// A single FASTA record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastaRecord {
    /// Header line without the leading '>'
    id: String,
    /// Body lines joined together
    sequence: String,
}

impl FastaRecord {
    /// Create a new FASTA record
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    /// Parse the first record of `content`
    pub fn parse(content: &str) -> SequenceResult<Self> {
        Self::read_from(&mut content.as_bytes())
    }

    /// Read one record from `reader`.
    ///
    /// The reader is left positioned at the next record marker (or at end
    /// of input), so whatever follows is untouched.
    pub fn read_from<R: BufRead>(reader: &mut R) -> SequenceResult<Self> {
        let record = FastaParser::new().parse(reader).map_err(parse_error)?;

        Ok(Self {
            id: record.id,
            sequence: record.sequence,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn into_parts(self) -> (String, String) {
        (self.id, self.sequence)
    }

    /// Sequence as an alphabet-less strand
    pub fn to_strand(&self) -> RawStrand {
        RawStrand::new(self.sequence.as_str())
    }

    /// Sequence as DNA (not validated)
    pub fn to_dna(&self) -> Dna {
        Dna::new(self.sequence.as_str())
    }

    /// Sequence as RNA (not validated)
    pub fn to_rna(&self) -> Rna {
        Rna::new(self.sequence.as_str())
    }

    /// Write the record in FASTA format with the default line width.
    ///
    /// Records that would not parse back (see [`FastaWriter::write_record`])
    /// are refused.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> SequenceResult<()> {
        FastaWriter::new().write_record(writer, &self.id, &self.sequence)?;
        Ok(())
    }
}

fn parse_error(err: EngineError) -> SequenceError {
    match err {
        EngineError::InvalidFormat(msg) => SequenceError::Format(msg),
        other => SequenceError::EngineError(other),
    }
}

impl FromStr for FastaRecord {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FastaRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", FastaWriter::new().display(&self.id, &self.sequence))
    }
}
