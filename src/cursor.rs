//! Codepoint cursor over a byte stream.
//!
//! The cursor decodes UTF-8 from any [`Read`] and tracks the line and column of
//! the read head. It supports un-reading exactly one codepoint, which is all
//! the scanner ever needs: every look-ahead reads one codepoint past a lexeme
//! and then decides whether to put it back.

use std::io::{BufRead, BufReader, ErrorKind, Read};

use crate::error::{ScanError, ScanResult};
use crate::position::Position;

pub struct SourceCursor<R> {
    reader: BufReader<R>,
    position: Position,

    // Most recently read codepoint; the only one that may be backed up.
    last: Option<char>,
    // A backed-up codepoint, returned by the next read.
    pending: Option<char>,
    // Bytes of a rejected UTF-8 sequence, decoded again one at a time. Top of stack first.
    replay: Vec<u8>,
}

impl<R: Read> SourceCursor<R> {
    pub fn new(reader: R) -> Self {
        SourceCursor {
            reader: BufReader::new(reader),
            position: Position::START,
            last: None,
            pending: None,
            replay: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Read the next codepoint and advance the column.
    ///
    /// Returns `Ok(None)` at end of input; this is repeatable.
    /// Any other failure of the underlying stream is returned as an error.
    pub fn read_one(&mut self) -> ScanResult<Option<char>> {
        let c = match self.pending.take() {
            Some(c) => c,
            None => match self.decode()? {
                Some(c) => c,
                None => {
                    self.last = None;
                    return Ok(None);
                }
            },
        };
        self.last = Some(c);
        self.position.column += 1;
        Ok(Some(c))
    }

    /// Un-read the most recently read codepoint.
    ///
    /// No-op at column zero (start of a line), or if nothing is available to back up.
    pub fn backup_one(&mut self) {
        if self.position.column == 0 {
            return;
        }
        if let Some(c) = self.last.take() {
            self.pending = Some(c);
            self.position.column -= 1;
        }
    }

    /// Move to the start of the next line.
    pub fn note_newline(&mut self) {
        self.position.line += 1;
        self.position.column = 0;
    }

    fn peek_byte(&mut self) -> ScanResult<Option<u8>> {
        if let Some(&byte) = self.replay.last() {
            return Ok(Some(byte));
        }
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(ScanError::Read {
                        position: self.position,
                        source,
                    })
                }
            }
        }
    }

    fn consume_byte(&mut self) {
        if self.replay.pop().is_none() {
            self.reader.consume(1);
        }
    }

    fn next_byte(&mut self) -> ScanResult<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.consume_byte();
        }
        Ok(byte)
    }

    /// Decode one UTF-8 sequence from the stream.
    ///
    /// A malformed or truncated sequence decodes to U+FFFD and consumes only its
    /// lead byte; the bytes after it are decoded again.
    fn decode(&mut self) -> ScanResult<Option<char>> {
        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };
        let width = match lead {
            0x00..=0x7F => return Ok(Some(char::from(lead))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Ok(Some(self.malformed(&[lead]))),
        };

        let mut bytes = [lead, 0, 0, 0];
        for len in 1..width {
            match self.peek_byte()? {
                Some(b) if b & 0xC0 == 0x80 => {
                    bytes[len] = b;
                    self.consume_byte();
                }
                _ => return Ok(Some(self.malformed(&bytes[..len]))),
            }
        }

        match std::str::from_utf8(&bytes[..width]) {
            Ok(s) => Ok(s.chars().next()),
            Err(_) => Ok(Some(self.malformed(&bytes[..width]))),
        }
    }

    /// Reject the sequence `bytes`, keeping everything after its lead byte for re-reading.
    fn malformed(&mut self, bytes: &[u8]) -> char {
        tracing::warn!(
            "malformed UTF-8 {:02X?} after {}; substituting U+FFFD",
            bytes,
            self.position
        );
        self.replay.extend(bytes[1..].iter().rev());
        char::REPLACEMENT_CHARACTER
    }
}
