//! Token definitions
//!
//!     A token is an immutable record of one lexical unit: its category, its literal text,
//!     where it starts and ends, and the physical source line(s) it was read from. The
//!     categories mirror Python's `tokenize` module, since the output format is consumed by
//!     tools that think in those terms.
//!
//!     Positions are (line, column) pairs. Lines are 1-based, columns are 0-based and count
//!     characters, not bytes. Every stage keeps positions intact on the tokens it passes
//!     through; synthetic tokens borrow the position of the token they replace, or of the
//!     line they stand for.

use serde::Serialize;
use std::fmt;

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenType {
    #[serde(rename = "ENDMARKER")]
    EndMarker,
    Name,
    Number,
    String,
    /// End of a logical line
    Newline,
    Indent,
    Dedent,
    Op,
    Comment,
    /// Non-logical line break: blank lines, comment-only lines, breaks inside brackets
    Nl,
}

impl TokenType {
    /// The upper-case name used by Python's `tokenize` module
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::EndMarker => "ENDMARKER",
            TokenType::Name => "NAME",
            TokenType::Number => "NUMBER",
            TokenType::String => "STRING",
            TokenType::Newline => "NEWLINE",
            TokenType::Indent => "INDENT",
            TokenType::Dedent => "DEDENT",
            TokenType::Op => "OP",
            TokenType::Comment => "COMMENT",
            TokenType::Nl => "NL",
        }
    }

    /// Whether this token ends a physical line
    pub fn is_line_break(&self) -> bool {
        matches!(self, TokenType::Newline | TokenType::Nl)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A (line, column) position. Ordering is document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.column)
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, column): (usize, usize)) -> Self {
        Position { line, column }
    }
}

/// A positioned token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenType,
    pub text: String,
    pub start: Position,
    pub end: Position,
    /// The physical source line(s) this token was read from
    pub line: String,
}

impl Token {
    pub fn new(
        kind: TokenType,
        text: impl Into<String>,
        start: impl Into<Position>,
        end: impl Into<Position>,
        line: impl Into<String>,
    ) -> Self {
        Token {
            kind,
            text: text.into(),
            start: start.into(),
            end: end.into(),
            line: line.into(),
        }
    }

    /// Top-level tokens start at column 0, outside any block
    pub fn is_top_level(&self) -> bool {
        self.start.column == 0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {:?}",
            self.kind, self.start, self.end, self.text
        )
    }
}
