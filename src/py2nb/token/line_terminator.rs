//! Line terminator styles
//!
//! Docstring bodies are re-emitted with the terminator style they were written in, so the
//! style has to be inferred from the text itself. Detection checks for `\r\n` first, then a
//! lone `\r`, then `\n`. Text without any terminator defaults to `\n`.
//!
//! Splitting is wider than detection: it breaks on every boundary Python's `str.splitlines`
//! knows, including form feeds, the ASCII separators and the Unicode line separators.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTerminator {
    CrLf,
    Cr,
    #[default]
    Lf,
}

impl LineTerminator {
    /// Infer the terminator style used in `text`
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineTerminator::CrLf
        } else if text.contains('\r') {
            // No "\r\n" anywhere, so every '\r' stands alone
            LineTerminator::Cr
        } else {
            LineTerminator::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::CrLf => "\r\n",
            LineTerminator::Cr => "\r",
            LineTerminator::Lf => "\n",
        }
    }
}

impl fmt::Display for LineTerminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `c` ends a line under Python's `str.splitlines` rules
pub fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0B'
            | '\x0C'
            | '\x1C'
            | '\x1D'
            | '\x1E'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split `text` on any line boundary, dropping the boundaries.
///
/// Boundaries are the ones of [is_line_boundary], with `\r\n` counted as one. A trailing
/// boundary does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut chars = text.char_indices().peekable();
    let mut start = 0;

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello\r\nWorld", LineTerminator::CrLf)]
    #[case("Hello\rWorld", LineTerminator::Cr)]
    #[case("Hello\nWorld", LineTerminator::Lf)]
    #[case("Hello World", LineTerminator::Lf)]
    #[case("", LineTerminator::Lf)]
    #[case("a\nb\r\nc", LineTerminator::CrLf)]
    #[case("a\nb\rc", LineTerminator::Cr)]
    fn test_detect(#[case] text: &str, #[case] expected: LineTerminator) {
        assert_eq!(LineTerminator::detect(text), expected);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(LineTerminator::CrLf.as_str(), "\r\n");
        assert_eq!(LineTerminator::Cr.as_str(), "\r");
        assert_eq!(LineTerminator::Lf.as_str(), "\n");
        assert_eq!(LineTerminator::default(), LineTerminator::Lf);
    }

    #[rstest]
    #[case("", vec![])]
    #[case("a", vec!["a"])]
    #[case("a\n", vec!["a"])]
    #[case("a\n\nb", vec!["a", "", "b"])]
    #[case("a\r\nb\rc\nd", vec!["a", "b", "c", "d"])]
    #[case("\n", vec![""])]
    #[case("a\x0Cb", vec!["a", "b"])]
    #[case("a\u{2028}b\u{2029}", vec!["a", "b"])]
    #[case("a\x0Bb\x1Cc\u{85}d", vec!["a", "b", "c", "d"])]
    #[case("a\r\r\nb", vec!["a", "", "b"])]
    fn test_split_lines(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_lines(text), expected);
    }
}
