//! Blank line normalization
//!
//! Final pass over the rendered text. Lines holding only whitespace become empty and every
//! line break becomes `\n`, whatever the source used.

use crate::py2nb::token::line_terminator::{is_line_boundary, split_lines};

/// Replace whitespace-only lines with empty lines and join with `\n`
///
/// Unlike a plain split and `\n`-join, which drops the final line break, a text ending in a
/// line break keeps one trailing `\n`. Without it every pass would eat one trailing blank
/// line; with it, running the pass on its own output changes nothing.
pub fn fix_empty_lines(text: &str) -> String {
    let mut lines = split_lines(text);
    if text.chars().next_back().is_some_and(is_line_boundary) {
        lines.push("");
    }

    lines
        .into_iter()
        .map(|line| if line.trim().is_empty() { "" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}
