//! Detokenizer
//!
//! Converts a list of positioned tokens back into source text. It is the inverse of the
//! [tokenizer](crate::py2nb::lexing): for an unmodified token stream it reproduces the
//! source, up to whitespace between tokens and at line ends.
//!
//! The renderer follows token positions rather than token order alone:
//!
//! - ENDMARKER stops rendering.
//! - INDENT pushes its text as the current indentation, DEDENT pops it.
//! - The first token of a line is preceded by the current indentation when its column
//!   reaches it.
//! - A column gap on the same line is filled with spaces.
//! - A row gap is bridged with one backslash continuation per skipped row.
//! - After NEWLINE and NL, rendering continues on the next row at column 0.
//!
//! Tokens must not start before the previous token ended; such a stream cannot be rendered.

use crate::py2nb::token::{Position, Token, TokenType};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("token {kind} at {start} starts before the previous token ended at {previous}")]
pub struct RenderError {
    pub kind: TokenType,
    pub start: Position,
    pub previous: Position,
}

struct Renderer {
    out: String,
    prev: Position,
}

impl Renderer {
    fn new() -> Self {
        Renderer {
            out: String::new(),
            prev: Position::new(1, 0),
        }
    }

    fn add_whitespace(&mut self, token: &Token) -> Result<(), RenderError> {
        let start = token.start;
        if start < self.prev {
            return Err(RenderError {
                kind: token.kind,
                start,
                previous: self.prev,
            });
        }

        let row_offset = start.line - self.prev.line;
        if row_offset > 0 {
            self.out.push_str(&"\\\n".repeat(row_offset));
            self.prev.column = 0;
        }

        let col_offset = start.column.saturating_sub(self.prev.column);
        if col_offset > 0 {
            self.out.push_str(&" ".repeat(col_offset));
        }

        Ok(())
    }
}

/// Render tokens back into source text
pub fn detokenize(tokens: &[Token]) -> Result<String, RenderError> {
    let mut renderer = Renderer::new();
    let mut indents: Vec<&str> = Vec::new();
    let mut start_of_line = false;

    for token in tokens {
        match token.kind {
            TokenType::EndMarker => break,
            TokenType::Indent => {
                indents.push(&token.text);
                continue;
            }
            TokenType::Dedent => {
                indents.pop();
                renderer.prev = token.end;
                continue;
            }
            TokenType::Newline | TokenType::Nl => start_of_line = true,
            _ => {
                if start_of_line {
                    if let Some(indent) = indents.last() {
                        let width = indent.chars().count();
                        if token.start.column >= width {
                            renderer.out.push_str(indent);
                            renderer.prev.column = width;
                        }
                    }
                    start_of_line = false;
                }
            }
        }

        renderer.add_whitespace(token)?;
        renderer.out.push_str(&token.text);
        renderer.prev = token.end;
        if token.kind.is_line_break() {
            renderer.prev = Position::new(renderer.prev.line + 1, 0);
        }
    }

    Ok(renderer.out)
}
