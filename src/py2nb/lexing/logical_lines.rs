//! Logical line assembly
//!
//!     Turns the flat logos lexemes into positioned tokens following Python's tokenizer rules.
//!     Lexemes are pulled from logos one at a time; the tokens they produce are queued and
//!     handed out on demand, so nothing past the current line is ever scanned ahead.
//!
//! Line Rules
//!
//!     - A line holding only whitespace and/or a comment is non-logical: its comment becomes
//!       a COMMENT token, its line break an NL token, and it never changes indentation.
//!     - A line break inside brackets is an NL token; the next line is a continuation, so its
//!       leading whitespace is not indentation.
//!     - A backslash continuation produces no token and also suppresses indentation handling
//!       for the next line.
//!     - Any other line break ends the logical line with a NEWLINE token.
//!
//! Indentation Handling
//!
//!     The first content lexeme of a logical line compares its indentation width against the
//!     stack of open levels (tabs advance to the next multiple of 8, form feeds reset to 0).
//!     A wider line opens a level with one INDENT token whose text is the raw indentation.
//!     A narrower line closes levels with one empty DEDENT token each, and must land exactly
//!     on an enclosing level.
//!
//! End of Input
//!
//!     A last line without a line break still gets its closing token (an empty NEWLINE, or an
//!     empty NL after a comment-only line). Open levels are closed with DEDENT tokens and the
//!     stream ends with ENDMARKER, all on the line after the last one. Open brackets or a
//!     dangling backslash at that point are an error.

use crate::py2nb::lexing::common::TokenizeError;
use crate::py2nb::lexing::line_index::LineIndex;
use crate::py2nb::lexing::tokens_core::{LexicalError, RawToken};
use crate::py2nb::token::{Position, Token, TokenType};
use logos::Logos;
use std::collections::VecDeque;
use std::ops::Range;

const TAB_SIZE: usize = 8;

/// Lazy tokenizer over a source string
pub struct Tokenizer<'src> {
    source: &'src str,
    lexer: logos::Lexer<'src, RawToken>,
    index: LineIndex,
    pending: VecDeque<Token>,
    /// Widths of the open indentation levels, outermost (0) first
    indents: Vec<usize>,
    /// Positions of the currently open brackets
    brackets: Vec<Position>,
    /// No token has been emitted yet on the current logical line
    at_line_start: bool,
    /// Leading whitespace seen at the start of the current line
    indentation: Option<Range<usize>>,
    /// The current line holds only a comment
    comment_only: bool,
    /// The previous lexeme was a backslash continuation
    continued: Option<Position>,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Tokenizer {
            source,
            lexer: RawToken::lexer(source),
            index: LineIndex::new(source),
            pending: VecDeque::new(),
            indents: vec![0],
            brackets: Vec::new(),
            at_line_start: true,
            indentation: None,
            comment_only: false,
            continued: None,
            finished: false,
        }
    }

    fn offset_position(&self, offset: usize) -> Position {
        self.index.position(self.source, offset)
    }

    fn physical_lines(&self, start: Position, end: Position) -> String {
        self.index
            .lines(self.source, start.line, end.line)
            .to_string()
    }

    /// Queue a token for the lexeme at `span`
    fn emit(&mut self, kind: TokenType, span: Range<usize>) {
        let text = &self.source[span.clone()];
        let start = self.offset_position(span.start);
        let end = if kind.is_line_break() {
            // Line breaks end on their own line, not at the start of the next one
            Position::new(start.line, start.column + text.chars().count())
        } else {
            self.offset_position(span.end)
        };
        let line = self.physical_lines(start, end);
        self.pending
            .push_back(Token::new(kind, text, start, end, line));
    }

    fn emit_synthetic(&mut self, kind: TokenType, text: &str, start: Position, end: Position) {
        let line = self.physical_lines(start, start);
        self.pending
            .push_back(Token::new(kind, text, start, end, line));
    }

    fn process(&mut self, raw: RawToken, span: Range<usize>) -> Result<(), TokenizeError> {
        if raw != RawToken::Whitespace {
            self.continued = None;
        }

        match raw {
            RawToken::Whitespace => {
                if self.at_line_start {
                    self.indentation = Some(span);
                }
            }
            RawToken::Continuation => {
                if self.at_line_start {
                    self.open_line(span.start)?;
                }
                self.continued = Some(self.offset_position(span.start));
            }
            RawToken::Newline => {
                if self.at_line_start {
                    // Blank line
                    self.indentation = None;
                    self.emit(TokenType::Nl, span);
                } else {
                    let kind = if self.brackets.is_empty() && !self.comment_only {
                        TokenType::Newline
                    } else {
                        TokenType::Nl
                    };
                    self.emit(kind, span);
                    self.comment_only = false;
                    if self.brackets.is_empty() {
                        self.at_line_start = true;
                    }
                }
            }
            RawToken::Comment => {
                if self.at_line_start {
                    self.at_line_start = false;
                    self.comment_only = true;
                    self.indentation = None;
                }
                self.emit(TokenType::Comment, span);
            }
            RawToken::Name | RawToken::Number | RawToken::String | RawToken::Op => {
                if self.at_line_start {
                    self.open_line(span.start)?;
                }
                let kind = match raw {
                    RawToken::Name => TokenType::Name,
                    RawToken::Number => TokenType::Number,
                    RawToken::String => TokenType::String,
                    _ => {
                        self.track_brackets(&span);
                        TokenType::Op
                    }
                };
                self.emit(kind, span);
            }
        }

        Ok(())
    }

    fn track_brackets(&mut self, span: &Range<usize>) {
        match &self.source[span.clone()] {
            "(" | "[" | "{" => {
                let position = self.offset_position(span.start);
                self.brackets.push(position);
            }
            ")" | "]" | "}" => {
                self.brackets.pop();
            }
            _ => {}
        }
    }

    /// Handle indentation for the first content lexeme of a logical line
    fn open_line(&mut self, offset: usize) -> Result<(), TokenizeError> {
        self.at_line_start = false;
        let content_start = self.offset_position(offset);
        let (indent_text, width) = match self.indentation.take() {
            Some(span) => {
                let text = &self.source[span];
                (text, indentation_width(text))
            }
            None => ("", 0),
        };

        let current = self.indents.last().copied().unwrap_or(0);
        if width > current {
            self.indents.push(width);
            let start = Position::new(content_start.line, 0);
            let line = self.physical_lines(start, start);
            self.pending.push_back(Token::new(
                TokenType::Indent,
                indent_text,
                start,
                content_start,
                line,
            ));
        } else if width < current {
            while self.indents.last().is_some_and(|&level| width < level) {
                self.indents.pop();
                self.emit_synthetic(TokenType::Dedent, "", content_start, content_start);
            }
            if self.indents.last().copied().unwrap_or(0) != width {
                return Err(TokenizeError::InconsistentDedent {
                    position: content_start,
                });
            }
        }

        Ok(())
    }

    /// Close the stream at end of input
    fn finish(&mut self) -> Result<(), TokenizeError> {
        if let Some(position) = self.brackets.first().copied().or(self.continued) {
            return Err(TokenizeError::UnexpectedEof { position });
        }

        let end = self.offset_position(self.source.len());
        if !self.at_line_start {
            if self.comment_only {
                self.emit_synthetic(TokenType::Nl, "", end, end);
            } else {
                let after = Position::new(end.line, end.column + 1);
                self.emit_synthetic(TokenType::Newline, "", end, after);
            }
        }

        let eof_line = if end.column == 0 { end.line } else { end.line + 1 };
        let eof = Position::new(eof_line, 0);
        for _ in 1..self.indents.len() {
            self.pending
                .push_back(Token::new(TokenType::Dedent, "", eof, eof, ""));
        }
        self.indents.truncate(1);
        self.pending
            .push_back(Token::new(TokenType::EndMarker, "", eof, eof, ""));

        Ok(())
    }

    fn lexical_error(&self, error: LexicalError, span: Range<usize>) -> TokenizeError {
        let position = self.offset_position(span.start);
        match error {
            LexicalError::UnterminatedString => TokenizeError::UnterminatedString { position },
            LexicalError::UnexpectedCharacter => TokenizeError::UnexpectedCharacter {
                found: self.source[span.start..].chars().next().unwrap_or('\0'),
                position,
            },
        }
    }

    fn fail(&mut self, error: TokenizeError) -> Option<Result<Token, TokenizeError>> {
        self.finished = true;
        self.pending.clear();
        Some(Err(error))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.finished {
                return None;
            }

            match self.lexer.next() {
                Some(Ok(raw)) => {
                    let span = self.lexer.span();
                    if let Err(error) = self.process(raw, span) {
                        return self.fail(error);
                    }
                }
                Some(Err(error)) => {
                    let error = self.lexical_error(error, self.lexer.span());
                    return self.fail(error);
                }
                None => {
                    self.finished = true;
                    if let Err(error) = self.finish() {
                        return self.fail(error);
                    }
                }
            }
        }
    }
}

/// Width of an indentation string, with tabs advancing to the next multiple of 8
fn indentation_width(text: &str) -> usize {
    text.chars().fold(0, |column, c| match c {
        '\t' => (column / TAB_SIZE + 1) * TAB_SIZE,
        '\x0C' => 0,
        _ => column + 1,
    })
}
