//! Newline gap filling
//!
//!     The detokenizer bridges a jump of several lines between two tokens with backslash
//!     continuations, which would shift every following line and cell boundary. This stage
//!     makes sure no line number is skipped: whenever the next token starts more than one
//!     line after the previous token ended, one NEWLINE token is inserted for each line in
//!     between.
//!
//!     The only state is a cursor holding the first line not yet covered, set from the first
//!     token's end line and advanced past every token that is emitted.

use crate::py2nb::token::{Position, Token, TokenType};

/// Lazy stage that inserts NEWLINE tokens for skipped lines
pub struct NewlineFiller<I> {
    inner: I,
    /// First line not covered by an emitted token; `None` until the first token
    cursor: Option<usize>,
    /// Token waiting for its gap to be filled
    pending: Option<Token>,
}

impl<I> NewlineFiller<I> {
    pub fn new(inner: I) -> Self {
        NewlineFiller {
            inner,
            cursor: None,
            pending: None,
        }
    }
}

impl<I, E> Iterator for NewlineFiller<I>
where
    I: Iterator<Item = Result<Token, E>>,
{
    type Item = Result<Token, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = match self.pending.take() {
            Some(token) => token,
            None => match self.inner.next()? {
                Ok(token) => token,
                Err(error) => return Some(Err(error)),
            },
        };

        match self.cursor {
            Some(line) if line < token.start.line => {
                self.cursor = Some(line + 1);
                self.pending = Some(token);
                log::trace!("filling skipped line {line}");
                Some(Ok(filler(line)))
            }
            _ => {
                self.cursor = Some(token.end.line + 1);
                Some(Ok(token))
            }
        }
    }
}

/// Wrap a token stream in the newline filling stage
pub fn fix_newlines<I, E>(tokens: I) -> NewlineFiller<I::IntoIter>
where
    I: IntoIterator<Item = Result<Token, E>>,
{
    NewlineFiller::new(tokens.into_iter())
}

/// Empty-line NEWLINE standing for `line`
fn filler(line: usize) -> Token {
    let at = Position::new(line, 0);
    Token::new(TokenType::Newline, "\n", at, at, "\n")
}
