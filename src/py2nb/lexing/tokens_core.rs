//! Core lexemes for Python source
//!
//! This module defines the raw lexemes produced by the logos lexer. They carry no position
//! and no notion of logical lines: whitespace, newlines and backslash continuations are all
//! plain lexemes here. The line-aware pass in [logical_lines](super::logical_lines) turns
//! them into positioned [Token](crate::py2nb::token::Token)s.
//!
//! String literals are matched by their opening delimiter (optional prefix plus quote) and a
//! callback scans the remainder for the closing delimiter, since logos regexes cannot express
//! "anything up to the first unescaped triple quote".

use logos::{Lexer, Logos};

/// Why logos rejected a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexicalError {
    #[default]
    UnexpectedCharacter,
    UnterminatedString,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexicalError)]
pub enum RawToken {
    // Spaces, tabs and form feeds. Indentation when at the start of a line.
    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    // Explicit line joining
    #[regex(r"\\(\r\n|\r|\n)")]
    Continuation,

    #[regex(r"\r\n|\r|\n")]
    Newline,

    #[regex(r"#[^\r\n]*")]
    Comment,

    #[regex(r#"[rRbBuUfF]{0,2}["']"#, string_literal)]
    String,

    #[regex(r"(?:[A-Za-z_]|[^\x00-\x7F])(?:[A-Za-z0-9_]|[^\x00-\x7F])*")]
    Name,

    #[regex(r"[0-9][0-9_]*(?:\.[0-9_]*)?(?:[eE][+-]?[0-9_]+)?[jJ]?")]
    #[regex(r"\.[0-9][0-9_]*(?:[eE][+-]?[0-9_]+)?[jJ]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+")]
    Number,

    #[regex(r"->|\.\.\.|:=|\*\*=?|//=?|>>=?|<<=?|[-+*/%&|^@<>=!]=")]
    #[regex(r"[-+*/%&|^@~<>=.,:;()\[\]{}]")]
    Op,
}

/// Scan a string literal body after its opening delimiter.
///
/// Triple-quoted strings may span lines; single-quoted strings may only continue onto the
/// next line through an escaped newline. Backslash escapes are honored in every prefix,
/// raw strings included, as Python's tokenizer does.
fn string_literal(lex: &mut Lexer<RawToken>) -> Result<(), LexicalError> {
    let quote = match lex.slice().as_bytes().last() {
        Some(&q) => q,
        None => return Err(LexicalError::UnexpectedCharacter),
    };
    let rest = lex.remainder().as_bytes();
    let triple = rest.len() >= 2 && rest[0] == quote && rest[1] == quote;

    let mut i = if triple { 2 } else { 0 };
    while i < rest.len() {
        match rest[i] {
            b'\\' => {
                // Skip the escaped character, treating "\r\n" as one
                i += if rest.get(i + 1) == Some(&b'\r') && rest.get(i + 2) == Some(&b'\n') {
                    3
                } else {
                    2
                };
            }
            b'\r' | b'\n' if !triple => return Err(LexicalError::UnterminatedString),
            c if c == quote => {
                if !triple {
                    lex.bump(i + 1);
                    return Ok(());
                }
                if rest.get(i + 1) == Some(&quote) && rest.get(i + 2) == Some(&quote) {
                    lex.bump(i + 3);
                    return Ok(());
                }
                i += 1;
            }
            _ => i += 1,
        }
    }

    Err(LexicalError::UnterminatedString)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(source: &str) -> Vec<(RawToken, &str)> {
        let mut lexer = RawToken::lexer(source);
        let mut out = Vec::new();
        while let Some(result) = lexer.next() {
            out.push((result.expect("lexing failed"), lexer.slice()));
        }
        out
    }

    #[test]
    fn test_assignment() {
        assert_eq!(
            lexemes("x = 1"),
            vec![
                (RawToken::Name, "x"),
                (RawToken::Whitespace, " "),
                (RawToken::Op, "="),
                (RawToken::Whitespace, " "),
                (RawToken::Number, "1"),
            ]
        );
    }

    #[test]
    fn test_triple_quoted_string_spans_lines() {
        let source = "\"\"\"Hello\nWorld\"\"\"\n";
        assert_eq!(
            lexemes(source),
            vec![
                (RawToken::String, "\"\"\"Hello\nWorld\"\"\""),
                (RawToken::Newline, "\n"),
            ]
        );
    }

    #[test]
    fn test_triple_quoted_string_with_inner_quotes() {
        let source = "'''it's a ''quote'''";
        assert_eq!(lexemes(source), vec![(RawToken::String, source)]);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(
            lexemes("'' \"\"\"\"\"\""),
            vec![
                (RawToken::String, "''"),
                (RawToken::Whitespace, " "),
                (RawToken::String, "\"\"\"\"\"\""),
            ]
        );
    }

    #[test]
    fn test_fake_docstring_is_a_single_quoted_string() {
        let source = r#"'"""Hello\nWorld"""'"#;
        assert_eq!(lexemes(source), vec![(RawToken::String, source)]);
    }

    #[test]
    fn test_prefixed_strings() {
        assert_eq!(
            lexemes(r#"rb"\d" f'{x}'"#),
            vec![
                (RawToken::String, r#"rb"\d""#),
                (RawToken::Whitespace, " "),
                (RawToken::String, "f'{x}'"),
            ]
        );
    }

    #[test]
    fn test_prefix_letters_alone_are_names() {
        assert_eq!(lexemes("rb"), vec![(RawToken::Name, "rb")]);
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let source = r#""say \"hi\"""#;
        assert_eq!(lexemes(source), vec![(RawToken::String, source)]);
    }

    #[test]
    fn test_unterminated_single_quoted_string() {
        let mut lexer = RawToken::lexer("'abc\n");
        assert_eq!(lexer.next(), Some(Err(LexicalError::UnterminatedString)));
    }

    #[test]
    fn test_unterminated_triple_quoted_string() {
        let mut lexer = RawToken::lexer("\"\"\"abc\n\ndef");
        assert_eq!(lexer.next(), Some(Err(LexicalError::UnterminatedString)));
    }

    #[test]
    fn test_comment_stops_at_line_end() {
        assert_eq!(
            lexemes("#%% cell\r\nx"),
            vec![
                (RawToken::Comment, "#%% cell"),
                (RawToken::Newline, "\r\n"),
                (RawToken::Name, "x"),
            ]
        );
    }

    #[test]
    fn test_continuation() {
        assert_eq!(
            lexemes("a \\\nb"),
            vec![
                (RawToken::Name, "a"),
                (RawToken::Whitespace, " "),
                (RawToken::Continuation, "\\\n"),
                (RawToken::Name, "b"),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        for source in ["0", "42", "1_000", "3.14", "1.", ".5", "1e10", "2.5E-3", "0xFF", "0o17", "0b101", "3j"] {
            assert_eq!(lexemes(source), vec![(RawToken::Number, source)], "{source}");
        }
    }

    #[test]
    fn test_operators_use_longest_match() {
        let ops: Vec<_> = lexemes("** **= // -> ... := != == <= . ( ]")
            .into_iter()
            .filter(|(t, _)| *t == RawToken::Op)
            .map(|(_, s)| s)
            .collect();
        assert_eq!(ops, vec!["**", "**=", "//", "->", "...", ":=", "!=", "==", "<=", ".", "(", "]"]);
    }

    #[test]
    fn test_unicode_names() {
        assert_eq!(lexemes("données"), vec![(RawToken::Name, "données")]);
    }

    #[test]
    fn test_unexpected_character() {
        let mut lexer = RawToken::lexer("$");
        assert_eq!(lexer.next(), Some(Err(LexicalError::UnexpectedCharacter)));
    }
}
