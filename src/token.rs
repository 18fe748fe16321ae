//! Quirk tokens and their display spellings.

use std::fmt;

use crate::position::Position;

/// The class of a scanned token.
///
/// Every kind other than `Identifier`, `Int` and `Illegal` has exactly one
/// canonical spelling, given by [`TokenKind::spelling`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    Eof,
    Illegal,
    Identifier,
    Int,

    // Operators
    Assign,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
    Ampersand,
    Greater,
    Lesser,
    Not,

    // Keywords
    Fn,
    Var,
    If,
    Else,
    Return,
    Loop,

    // Two-character operators
    EqualEqual,
    GreaterEqual,
    LessEqual,

    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Colon,
    DoubleQuote,
    Semicolon,
}

/// Reserved words, as written in source.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("fn", TokenKind::Fn),
    ("var", TokenKind::Var),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
    ("loop", TokenKind::Loop),
];

impl TokenKind {
    /// All token kinds, in declaration order.
    pub const ALL: &'static [TokenKind] = &[
        TokenKind::Eof,
        TokenKind::Illegal,
        TokenKind::Identifier,
        TokenKind::Int,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::Modulus,
        TokenKind::Ampersand,
        TokenKind::Greater,
        TokenKind::Lesser,
        TokenKind::Not,
        TokenKind::Fn,
        TokenKind::Var,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
        TokenKind::Loop,
        TokenKind::EqualEqual,
        TokenKind::GreaterEqual,
        TokenKind::LessEqual,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::DoubleQuote,
        TokenKind::Semicolon,
    ];

    /// Canonical display spelling.
    ///
    /// Keywords display as their upper-case name, other fixed lexemes as the lexeme itself.
    pub const fn spelling(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::Modulus => "%",
            TokenKind::Ampersand => "&",
            TokenKind::Greater => ">",
            TokenKind::Lesser => "<",
            TokenKind::Not => "!",
            TokenKind::Fn => "FN",
            TokenKind::Var => "VAR",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Loop => "LOOP",
            TokenKind::EqualEqual => "==",
            TokenKind::GreaterEqual => ">=",
            TokenKind::LessEqual => "<=",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::DoubleQuote => "\"",
            TokenKind::Semicolon => ";",
        }
    }

    /// The kind of a single-character lexeme, if `c` is one.
    pub const fn from_char(c: char) -> Option<TokenKind> {
        let kind = match c {
            ';' => TokenKind::Semicolon,
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '%' => TokenKind::Modulus,
            '&' => TokenKind::Ampersand,
            '>' => TokenKind::Greater,
            '<' => TokenKind::Lesser,
            '!' => TokenKind::Not,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '"' => TokenKind::DoubleQuote,
            _ => return None,
        };
        Some(kind)
    }

    /// The keyword spelled by `text`, if any. Case-sensitive.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(word, _)| *word == text)
            .map(|&(_, kind)| kind)
    }

    /// The two-character operator formed by `self` followed by `=`, if any.
    pub(crate) const fn with_trailing_equals(self) -> Option<TokenKind> {
        match self {
            TokenKind::Assign => Some(TokenKind::EqualEqual),
            TokenKind::Greater => Some(TokenKind::GreaterEqual),
            TokenKind::Lesser => Some(TokenKind::LessEqual),
            _ => None,
        }
    }

    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Fn
                | TokenKind::Var
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::Loop
        )
    }

    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Multiply
                | TokenKind::Divide
                | TokenKind::Modulus
                | TokenKind::Ampersand
                | TokenKind::Greater
                | TokenKind::Lesser
                | TokenKind::Not
                | TokenKind::EqualEqual
                | TokenKind::GreaterEqual
                | TokenKind::LessEqual
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// A token along with its position in the input stream.
///
/// For fixed lexemes, `text` is the kind's canonical spelling, so a reserved word
/// carries `FN`, not `fn`. `EOF` has empty text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub position: Position,
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(position: Position, kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            position,
            kind,
            text: text.into(),
        }
    }

    /// A fixed-lexeme token, carrying its canonical spelling as text.
    pub fn fixed(position: Position, kind: TokenKind) -> Self {
        Token::new(position, kind, kind.spelling())
    }

    pub fn eof(position: Position) -> Self {
        Token::new(position, TokenKind::Eof, String::new())
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Renders as `line:column<TAB>KIND<TAB>text`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.position, self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn spellings_are_unique() {
        let mut seen = HashSet::new();
        for kind in TokenKind::ALL {
            assert!(
                seen.insert(kind.spelling()),
                "duplicate spelling {:?} for {:?}",
                kind.spelling(),
                kind
            );
        }
    }

    #[test]
    fn single_characters_round_trip_through_spelling() {
        for kind in TokenKind::ALL {
            let mut chars = kind.spelling().chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                continue;
            };
            if let Some(found) = TokenKind::from_char(c) {
                assert_eq!(found, *kind, "unexpected kind for {:?}", c);
            }
        }
    }

    #[test]
    fn every_punctuation_character_is_recognized() {
        for c in "+-*/%&><!=;,:\"(){}[]".chars() {
            let kind = TokenKind::from_char(c)
                .unwrap_or_else(|| panic!("{:?} is not a single-character lexeme", c));
            assert_eq!(kind.spelling(), c.to_string());
        }
        for c in ['a', '1', ' ', '@', '.', '\n'] {
            assert_eq!(TokenKind::from_char(c), None, "unexpected lexeme {:?}", c);
        }
    }

    #[test]
    fn keywords() {
        let want = [
            ("fn", TokenKind::Fn),
            ("var", TokenKind::Var),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("return", TokenKind::Return),
            ("loop", TokenKind::Loop),
        ];
        for (word, kind) in want {
            assert_eq!(TokenKind::keyword(word), Some(kind));
            assert!(kind.is_keyword());
            assert_eq!(kind.spelling(), word.to_uppercase());
        }
        assert_eq!(TokenKind::keyword("FN"), None);
        assert_eq!(TokenKind::keyword("loops"), None);
    }

    #[test]
    fn class_names() {
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
        assert_eq!(TokenKind::Illegal.to_string(), "ILLEGAL");
        assert_eq!(TokenKind::Identifier.to_string(), "IDENTIFIER");
        assert_eq!(TokenKind::Int.to_string(), "INT");
    }

    #[test]
    fn operators_are_not_keywords() {
        for kind in TokenKind::ALL {
            assert!(!(kind.is_operator() && kind.is_keyword()), "{:?}", kind);
        }
        assert!(TokenKind::LessEqual.is_operator());
        assert!(!TokenKind::Semicolon.is_operator());
    }

    #[test]
    fn display_token() {
        let token = Token::new(Position::new(3, 4), TokenKind::Identifier, "abc");
        assert_eq!(token.to_string(), "3:4\tIDENTIFIER\tabc");
        let token = Token::fixed(Position::new(1, 1), TokenKind::LeftBrace);
        assert_eq!(token.to_string(), "1:1\t{\t{");
        assert_eq!(token.text, "{");
    }
}
