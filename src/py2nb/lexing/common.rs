//! Common lexer types
//!
//! Errors raised while turning source bytes into tokens. Every variant is fatal: the
//! tokenizer stops at the first one and nothing downstream tries to recover.

use crate::py2nb::token::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("source is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("unexpected character {found:?} at {position}")]
    UnexpectedCharacter { found: char, position: Position },

    #[error("unterminated string literal starting at {position}")]
    UnterminatedString { position: Position },

    #[error("EOF in multi-line statement starting at {position}")]
    UnexpectedEof { position: Position },

    #[error("unindent does not match any outer indentation level at {position}")]
    InconsistentDedent { position: Position },
}

impl TokenizeError {
    /// Where in the source the error was detected, if it relates to a position
    pub fn position(&self) -> Option<Position> {
        match self {
            TokenizeError::InvalidUtf8(_) => None,
            TokenizeError::UnexpectedCharacter { position, .. }
            | TokenizeError::UnterminatedString { position }
            | TokenizeError::UnexpectedEof { position }
            | TokenizeError::InconsistentDedent { position } => Some(*position),
        }
    }
}
