//! Lexer
//!
//!     This module turns Python source bytes into a lazy stream of positioned tokens, the
//!     same categories Python's `tokenize` module produces. It is the first stage of the
//!     conversion pipeline and the only one that looks at raw text.
//!
//! The Lexing Pipeline
//!
//!     1. Decoding. The bytes must be UTF-8; a leading byte order mark is dropped.
//!
//!     2. Core tokenization using the logos lexer. See [tokens_core](tokens_core).
//!        Whitespace, newlines and backslash continuations are lexemes like any other here,
//!        and lexemes carry byte ranges only.
//!
//!     3. Logical line assembly. See [logical_lines](logical_lines).
//!        Lexemes become tokens with (line, column) positions; line breaks are split into
//!        NEWLINE and NL, indentation becomes INDENT/DEDENT, whitespace is dropped, and the
//!        stream is closed with ENDMARKER.
//!
//!     Both steps run on demand: the returned [Tokenizer] pulls one lexeme at a time.
//!
//! Errors
//!
//!     Invalid UTF-8, characters outside the grammar, unterminated strings, unclosed brackets
//!     and inconsistent dedents are all fatal [TokenizeError]s. The stream yields the error in
//!     place and then ends.

pub mod common;
pub mod line_index;
pub mod logical_lines;
pub mod tokens_core;

pub use common::TokenizeError;
pub use logical_lines::Tokenizer;
pub use tokens_core::RawToken;

const BOM: &str = "\u{feff}";

/// Decode `bytes` and return a lazy token stream over them
pub fn tokenize(bytes: &[u8]) -> Result<Tokenizer<'_>, TokenizeError> {
    let source = std::str::from_utf8(bytes)?;
    let source = source.strip_prefix(BOM).unwrap_or(source);
    log::debug!("tokenizing {} bytes of source", source.len());
    Ok(Tokenizer::new(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::py2nb::token::TokenType;

    #[test]
    fn test_tokenize_bytes() {
        let tokens: Vec<_> = tokenize(b"x = 1\n")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].kind, TokenType::Name);
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let tokens: Vec<_> = tokenize("\u{feff}x\n".as_bytes())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tokens[0].text, "x");
        assert_eq!(tokens[0].start.column, 0);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        assert!(matches!(
            tokenize(&[b'x', 0xff, b'\n']),
            Err(TokenizeError::InvalidUtf8(_))
        ));
    }
}
