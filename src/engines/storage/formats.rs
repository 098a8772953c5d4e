//! FASTA parser and writer
//!
//! The parser reads exactly one record from any [`BufRead`]. It looks at the
//! next unread byte through `fill_buf` to find record boundaries, so the
//! marker of a following record is left in the reader.

use std::fmt;
use std::io::{BufRead, Write};

use crate::engines::{EngineError, EngineResult};

/// Byte that opens a FASTA header line
pub const RECORD_MARKER: u8 = b'>';

/// Default number of sequence symbols per output line
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Identifier and raw sequence text of a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Header line without the marker
    pub id: String,
    /// Body lines concatenated, line endings removed
    pub sequence: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    ExpectHeader,
    ConsumeBody,
}

/// Single-record FASTA parser
#[derive(Debug, Clone)]
pub struct FastaParser {
    /// Initial capacity of the sequence buffer
    buffer_capacity: usize,
}

impl FastaParser {
    /// Create a new FASTA parser
    pub fn new() -> Self {
        Self {
            buffer_capacity: 1024,
        }
    }

    /// Set the initial capacity reserved for the sequence body
    pub fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    /// Parse one record from `reader`.
    ///
    /// Fails with [`EngineError::InvalidFormat`] when the next unread byte is
    /// not the record marker. Reading stops at end of input or right before
    /// the next marker.
    pub fn parse<R: BufRead>(&self, reader: &mut R) -> EngineResult<SequenceRecord> {
        let mut state = ParserState::ExpectHeader;
        let mut id = String::new();
        let mut sequence = String::with_capacity(self.buffer_capacity);
        let mut line = String::new();

        loop {
            match state {
                ParserState::ExpectHeader => {
                    if peek_byte(reader)? != Some(RECORD_MARKER) {
                        return Err(EngineError::InvalidFormat("Not FASTA format".to_string()));
                    }
                    reader.consume(1);
                    reader.read_line(&mut id)?;
                    trim_line_ending(&mut id);
                    state = ParserState::ConsumeBody;
                }
                ParserState::ConsumeBody => match peek_byte(reader)? {
                    None | Some(RECORD_MARKER) => break,
                    Some(_) => {
                        line.clear();
                        reader.read_line(&mut line)?;
                        trim_line_ending(&mut line);
                        log::trace!("record {}: body line of {} symbols", id, line.len());
                        sequence.push_str(&line);
                    }
                },
            }
        }

        log::debug!("parsed FASTA record {} ({} symbols)", id, sequence.len());
        Ok(SequenceRecord { id, sequence })
    }

    /// Parse one record from an in-memory string
    pub fn parse_str(&self, content: &str) -> EngineResult<SequenceRecord> {
        self.parse(&mut content.as_bytes())
    }
}

impl Default for FastaParser {
    fn default() -> Self {
        Self::new()
    }
}

fn peek_byte<R: BufRead>(reader: &mut R) -> std::io::Result<Option<u8>> {
    Ok(reader.fill_buf()?.first().copied())
}

fn trim_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// FASTA writer
#[derive(Debug, Clone)]
pub struct FastaWriter {
    /// Symbols per sequence line; 0 keeps the whole sequence on one line
    line_width: usize,
}

impl FastaWriter {
    /// Create a new FASTA writer with the default line width
    pub fn new() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Set the number of symbols per sequence line
    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    /// Write one record to `writer`.
    ///
    /// Fails with [`EngineError::InvalidFormat`] when the record could not be
    /// read back: a line break in the identifier or sequence, or a sequence
    /// that opens with the record marker.
    pub fn write_record<W: Write>(&self, writer: &mut W, id: &str, sequence: &str) -> EngineResult<()> {
        check_writable(id, sequence)?;
        write!(writer, "{}", self.display(id, sequence))?;
        Ok(())
    }

    /// Render one record as FASTA text.
    ///
    /// Unlike [`FastaWriter::write_record`] this does not check the record.
    pub fn display<'a>(&'a self, id: &'a str, sequence: &'a str) -> RecordDisplay<'a> {
        RecordDisplay {
            writer: self,
            id,
            sequence,
        }
    }
}

impl Default for FastaWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed record rendered through a [`FastaWriter`]
pub struct RecordDisplay<'a> {
    writer: &'a FastaWriter,
    id: &'a str,
    sequence: &'a str,
}

impl fmt::Display for RecordDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}{}", char::from(RECORD_MARKER), self.id)?;

        let mut rest = self.sequence;
        while !rest.is_empty() {
            let (line, tail) = rest.split_at(line_end(rest, self.writer.line_width));
            writeln!(f, "{}", line)?;
            rest = tail;
        }

        Ok(())
    }
}

/// Byte offset where the next body line ends.
///
/// Counts `width` characters, then runs past any record markers so that the
/// following line never starts with one.
fn line_end(rest: &str, width: usize) -> usize {
    let end = match width {
        0 => rest.len(),
        width => rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(index, _)| index),
    };

    end + rest[end..]
        .bytes()
        .take_while(|&byte| byte == RECORD_MARKER)
        .count()
}

fn check_writable(id: &str, sequence: &str) -> EngineResult<()> {
    let is_line_break = |c: char| c == '\n' || c == '\r';

    if id.contains(is_line_break) {
        return Err(EngineError::InvalidFormat(
            "identifier contains a line break".to_string(),
        ));
    }
    if sequence.contains(is_line_break) {
        return Err(EngineError::InvalidFormat(
            "sequence contains a line break".to_string(),
        ));
    }
    if sequence.as_bytes().first() == Some(&RECORD_MARKER) {
        return Err(EngineError::InvalidFormat(
            "sequence starts with the record marker".to_string(),
        ));
    }

    Ok(())
}
