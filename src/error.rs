//! Scanner errors.
//!
//! Only failures of the underlying stream are errors. Unrecognized characters
//! are reported as `ILLEGAL` tokens, and end-of-input is an `EOF` token.

use crate::position::Position;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The input stream failed with something other than a clean end-of-input.
    #[error("read error at {position}: {source}")]
    Read {
        position: Position,
        #[source]
        source: std::io::Error,
    },

    /// Writing scanner output failed.
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),
}

pub type ScanResult<T> = Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn read_error_mentions_position() {
        let err = ScanError::Read {
            position: Position::new(4, 2),
            source: std::io::Error::new(ErrorKind::Other, "device gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("4:2"), "missing position in {:?}", msg);
        assert!(msg.contains("device gone"), "missing cause in {:?}", msg);
    }
}
