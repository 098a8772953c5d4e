//! Minimal biological sequence toolkit
//!
//! DNA, RNA and protein strands with complementation, transcription,
//! translation, distance and composition metrics, plus single-record
//! FASTA parsing and the rabbit-population recurrence.
//!
//! ```
//! use bioseq_kit::{Dna, FastaRecord};
//!
//! let record = FastaRecord::parse(">seq\nATGGCC\nTGA\n").unwrap();
//! let dna: Dna = record.to_dna();
//! assert_eq!(dna.transcribe().translate().unwrap().as_str(), "MA");
//! ```

pub mod engines;
pub mod modules;

pub use engines::compute::recurrence::{rabbit_pairs, MAX_FIBONACCI_MONTH};
pub use engines::compute::{ComputeError, ComputeResult};
pub use engines::storage::{FastaParser, FastaWriter};
pub use engines::{EngineError, EngineResult};
pub use modules::io::FastaRecord;
pub use modules::seq::{
    BaseCounts, Codon, CodonTable, DistancePolicy, Dna, Protein, RawStrand, Rna, SequenceError,
    SequenceResult, Strand, TrailingCodon, Translation,
};
