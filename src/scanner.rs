//! Module for extracting Quirk tokens from an input stream.
//!
//! The scanner pulls one codepoint at a time from a [`SourceCursor`] and classifies it:
//! newlines and other whitespace are skipped, operator and punctuation characters
//! are tokens by themselves, and a digit or letter starts a literal that runs until
//! the first codepoint outside its class. Anything else is reported as an
//! `ILLEGAL` token rather than an error, so the caller decides whether to carry on.
//!
//! Positions are those of the cursor just after the first character of the token
//! was read; the first character of a line is at column 1.

use std::io::Read;
use std::iter::FusedIterator;

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::config::ScanConfig;
use crate::cursor::SourceCursor;
use crate::error::ScanResult;
use crate::position::Position;
use crate::token::{Token, TokenKind};

pub struct Scanner<R> {
    cursor: SourceCursor<R>,
    config: ScanConfig,
}

impl<R: Read> Scanner<R> {
    /// Scanner over `reader` with the default options.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ScanConfig::default())
    }

    pub fn with_config(reader: R, config: ScanConfig) -> Self {
        Scanner {
            cursor: SourceCursor::new(reader),
            config,
        }
    }

    pub fn config(&self) -> ScanConfig {
        self.config
    }

    /// Current position of the read head.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Iterate over the remaining tokens, stopping before `EOF`.
    pub fn tokens(&mut self) -> Tokens<'_, R> {
        Tokens {
            scanner: self,
            finished: false,
        }
    }

    /// Scan the next token.
    ///
    /// At end of input this returns an `EOF` token, and keeps doing so on every
    /// later call. An error means the underlying stream failed; the input is
    /// truncated and should not be treated as complete.
    pub fn scan(&mut self) -> ScanResult<Token> {
        loop {
            let Some(c) = self.cursor.read_one()? else {
                let position = self.cursor.position();
                tracing::debug!("end of input at {}", position);
                return Ok(Token::eof(position));
            };

            let token = if c == '\n' {
                self.cursor.note_newline();
                continue;
            } else if let Some(kind) = TokenKind::from_char(c) {
                self.scan_fixed(kind)?
            } else if c.is_whitespace() {
                continue;
            } else if is_digit(c) {
                // Back up and let the sub-scanner re-read the first digit.
                let start = self.cursor.position();
                self.cursor.backup_one();
                Token::new(start, TokenKind::Int, self.scan_integer()?)
            } else if is_letter(c) {
                let start = self.cursor.position();
                self.cursor.backup_one();
                let text = self.scan_identifier()?;
                match TokenKind::keyword(&text) {
                    Some(keyword) if self.config.reserve_keywords => Token::fixed(start, keyword),
                    _ => Token::new(start, TokenKind::Identifier, text),
                }
            } else {
                Token::new(self.cursor.position(), TokenKind::Illegal, c.to_string())
            };

            tracing::trace!("{} {:?} {:?}", token.position, token.kind, token.text);
            return Ok(token);
        }
    }

    /// A single-character lexeme that has just been read.
    /// With combined operators enabled, this looks one codepoint ahead for a trailing `=`.
    fn scan_fixed(&mut self, kind: TokenKind) -> ScanResult<Token> {
        let position = self.cursor.position();
        let Some(combined) = kind.with_trailing_equals() else {
            return Ok(Token::fixed(position, kind));
        };
        if self.config.combine_operators {
            match self.cursor.read_one()? {
                Some('=') => return Ok(Token::fixed(position, combined)),
                Some(_) => self.cursor.backup_one(),
                None => (),
            }
        }
        Ok(Token::fixed(position, kind))
    }

    fn scan_integer(&mut self) -> ScanResult<String> {
        self.scan_run(is_digit)
    }

    fn scan_identifier(&mut self) -> ScanResult<String> {
        self.scan_run(is_letter)
    }

    /// Consume the longest run of codepoints in `class`.
    ///
    /// The first codepoint past the run is backed up, so the cursor is left
    /// immediately after the literal. End of input also ends the run.
    fn scan_run(&mut self, class: fn(char) -> bool) -> ScanResult<String> {
        let mut text = String::new();
        while let Some(c) = self.cursor.read_one()? {
            if !class(c) {
                self.cursor.backup_one();
                break;
            }
            text.push(c);
        }
        Ok(text)
    }
}

/// Decimal digits (general category Nd).
fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Letters (general categories Lu, Ll, Lt, Lm and Lo). Combining marks are not letters.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Iterator over the tokens of a [`Scanner`], excluding the final `EOF`.
///
/// A stream failure is yielded once, after which the iterator is exhausted.
pub struct Tokens<'a, R> {
    scanner: &'a mut Scanner<R>,

    // Set once the last item has been yielded.
    finished: bool,
}

impl<R: Read> Iterator for Tokens<'_, R> {
    type Item = ScanResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.scanner.scan() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: Read> FusedIterator for Tokens<'_, R> {}

/// Split the input into its constituent tokens, excluding the final `EOF`.
pub fn tokenize(input: &[u8]) -> ScanResult<Vec<Token>> {
    tokenize_with(input, ScanConfig::default())
}

pub fn tokenize_with(input: &[u8], config: ScanConfig) -> ScanResult<Vec<Token>> {
    Scanner::with_config(input, config).tokens().collect()
}
