//! Lexical scanner for the Quirk language.
//!
//! A [`Scanner`] reads codepoints from any [`std::io::Read`] and produces
//! positioned [`Token`]s, one per call to [`Scanner::scan`], ending with an
//! `EOF` token. It never buffers more than one codepoint of look-ahead.
//!
//! ```
//! use quirk::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("x = 1;".as_bytes());
//! let token = scanner.scan().unwrap();
//! assert_eq!(token.kind, TokenKind::Identifier);
//! assert_eq!(token.text, "x");
//! ```

pub mod config;
pub mod cursor;
pub mod error;
pub mod listing;
pub mod position;
pub mod scanner;
pub mod token;

pub use config::ScanConfig;
pub use error::{ScanError, ScanResult};
pub use listing::write_listing;
pub use position::Position;
pub use scanner::{tokenize, tokenize_with, Scanner, Tokens};
pub use token::{Token, TokenKind};
