//! Core token types shared across the lexer, the transforms and the detokenizer.

pub mod line_terminator;
pub mod types;

pub use line_terminator::LineTerminator;
pub use types::{Position, Token, TokenType};
