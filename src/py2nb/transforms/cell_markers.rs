//! Cell marker conversion
//!
//!     Rewrites the tokens that carry notebook structure into comment tokens holding cell
//!     boundary markers. The decision is local to each token: its type, a prefix of its text
//!     and whether it starts at column 0. No lookahead is needed, so the stage is a plain map.
//!
//! Rules (first match wins)
//!
//!     - A top-level docstring (STRING starting with `"""`, `'''` or `'"""`) becomes a
//!       markdown cell, or a raw cell when it opens with a `Raw` line, followed by a code
//!       cell marker.
//!     - A top-level COMMENT starting with `#%%` becomes a code cell marker.
//!     - Everything else passes through untouched.
//!
//! Docstring Rewriting
//!
//!     The steps run in a fixed order, since each one sees the previous one's output:
//!         1. The two-character sequence `\n` becomes a real newline. This lets a single
//!            quoted string such as `'"""Hello\nWorld"""'` stand in for a docstring.
//!         2. The first `Raw` line directly after a triple quote is removed, switching the
//!            cell to raw.
//!         3. The line terminator style is inferred from the resulting text.
//!         4. Quotes, spaces and terminator characters are stripped from both ends, and each
//!            remaining line is prefixed with `# `.
//!         5. The body is wrapped in the cell markers, joined with the same terminator.

use crate::py2nb::token::line_terminator::split_lines;
use crate::py2nb::token::{LineTerminator, Token, TokenType};
use once_cell::sync::Lazy;
use regex::Regex;

pub const CODE_CELL: &str = "# <codecell>";
pub const MARKDOWN_CELL: &str = "# <markdowncell>";
pub const RAW_CELL: &str = "# <rawcell>";

/// Prefix of comments that separate code cells
pub const CELL_SEPARATOR: &str = "#%%";

const DOCSTRING_OPENERS: [&str; 3] = ["\"\"\"", "'''", "'\"\"\""];

static RAW_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(["']{3})Raw\r?\n"#).expect("raw marker pattern is valid"));

/// Lazy stage that rewrites docstrings and separator comments into cell markers
pub struct CellMarkers<I> {
    inner: I,
}

impl<I> CellMarkers<I> {
    pub fn new(inner: I) -> Self {
        CellMarkers { inner }
    }
}

impl<I, E> Iterator for CellMarkers<I>
where
    I: Iterator<Item = Result<Token, E>>,
{
    type Item = Result<Token, E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|item| item.map(convert_token))
    }
}

/// Wrap a token stream in the cell marker stage
pub fn convert_toplevel_docstrings<I, E>(tokens: I) -> CellMarkers<I::IntoIter>
where
    I: IntoIterator<Item = Result<Token, E>>,
{
    CellMarkers::new(tokens.into_iter())
}

/// Apply the conversion rules to a single token
pub fn convert_token(token: Token) -> Token {
    match token.kind {
        TokenType::String if token.is_top_level() && is_docstring(&token.text) => {
            let text = docstring_cell(&token.text);
            log::trace!("docstring at {} converted to a cell", token.start);
            marker_token(text, &token)
        }
        TokenType::Comment if token.is_top_level() && token.text.starts_with(CELL_SEPARATOR) => {
            log::trace!("cell separator at {} converted", token.start);
            marker_token(format!("{CODE_CELL}\n"), &token)
        }
        _ => token,
    }
}

fn is_docstring(text: &str) -> bool {
    DOCSTRING_OPENERS
        .iter()
        .any(|opener| text.starts_with(opener))
}

/// Synthetic comment that takes the place (and position) of `original`
fn marker_token(text: String, original: &Token) -> Token {
    Token::new(TokenType::Comment, text, original.start, original.end, "#")
}

/// Render docstring literal text as a markdown or raw cell followed by a code cell marker
pub fn docstring_cell(literal: &str) -> String {
    let text = literal.replace("\\n", "\n");

    let (text, raw) = match RAW_MARKER.find(&text) {
        Some(_) => (RAW_MARKER.replacen(&text, 1, "${1}").into_owned(), true),
        None => (text, false),
    };

    let term = LineTerminator::detect(&text);
    let strip_chars = |c: char| matches!(c, '"' | '\'' | ' ') || term.as_str().contains(c);
    let body = split_lines(text.trim_matches(strip_chars))
        .into_iter()
        .map(|line| format!("# {line}"))
        .collect::<Vec<_>>()
        .join(term.as_str());

    let header = if raw { RAW_CELL } else { MARKDOWN_CELL };
    [header, body.as_str(), CODE_CELL].join(term.as_str())
}
