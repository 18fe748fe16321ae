//! Source positions.

use std::fmt;

/// A line/column position in the input stream.
///
/// Lines are 1-indexed. Columns count codepoints consumed since the last newline,
/// so the first character of a line is reported at column 1 once it has been read;
/// column 0 means "nothing read on this line yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Position of a freshly-opened stream.
    pub const START: Position = Position { line: 1, column: 0 };

    pub const fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_line_one_column_zero() {
        assert_eq!(Position::START, Position::new(1, 0));
    }

    #[test]
    fn display_as_line_colon_column() {
        assert_eq!(Position::new(12, 7).to_string(), "12:7");
    }

    #[test]
    fn orders_by_line_then_column() {
        assert!(Position::new(1, 9) < Position::new(2, 0));
        assert!(Position::new(3, 1) < Position::new(3, 2));
    }
}
