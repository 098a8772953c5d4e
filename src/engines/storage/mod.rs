//! Text formats for sequence data
//!
//! Parsing and writing are done against caller-supplied readers and
//! writers; nothing in here opens files.

pub mod formats;

pub use formats::{FastaParser, FastaWriter, SequenceRecord};
