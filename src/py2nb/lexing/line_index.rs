//! Byte offset to (line, column) mapping
//!
//! Logos reports byte ranges. Tokens carry 1-based lines and 0-based character columns, plus
//! the physical line(s) they came from, so the source is indexed once up front. `\r\n`, `\r`
//! and `\n` all end a line.

use crate::py2nb::token::Position;

#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset at which each line starts
    starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut starts = vec![0];
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    i += 2;
                    starts.push(i);
                }
                b'\r' | b'\n' => {
                    i += 1;
                    starts.push(i);
                }
                _ => i += 1,
            }
        }

        LineIndex {
            starts,
            len: source.len(),
        }
    }

    /// Position of a byte offset
    pub fn position(&self, source: &str, offset: usize) -> Position {
        let line_idx = self.starts.partition_point(|&start| start <= offset) - 1;
        let column = source[self.starts[line_idx]..offset].chars().count();
        Position::new(line_idx + 1, column)
    }

    /// Source text of the lines `first..=last`, terminators included
    pub fn lines<'src>(&self, source: &'src str, first: usize, last: usize) -> &'src str {
        let start = self.line_start(first);
        let end = self
            .starts
            .get(last)
            .copied()
            .unwrap_or(self.len);
        &source[start..end.max(start)]
    }

    fn line_start(&self, line: usize) -> usize {
        self.starts
            .get(line.saturating_sub(1))
            .copied()
            .unwrap_or(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        let source = "ab\ncd\r\nef";
        let index = LineIndex::new(source);
        assert_eq!(index.position(source, 0), Position::new(1, 0));
        assert_eq!(index.position(source, 2), Position::new(1, 2));
        assert_eq!(index.position(source, 3), Position::new(2, 0));
        assert_eq!(index.position(source, 7), Position::new(3, 0));
        assert_eq!(index.position(source, 9), Position::new(3, 2));
    }

    #[test]
    fn test_columns_count_characters() {
        let source = "é = 1";
        let index = LineIndex::new(source);
        assert_eq!(index.position(source, "é ".len()), Position::new(1, 2));
    }

    #[test]
    fn test_end_of_source_after_newline_is_next_line() {
        let source = "x\n";
        let index = LineIndex::new(source);
        assert_eq!(index.position(source, source.len()), Position::new(2, 0));
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        let source = "a\rb";
        let index = LineIndex::new(source);
        assert_eq!(index.position(source, 2), Position::new(2, 0));
    }

    #[test]
    fn test_lines() {
        let source = "one\ntwo\nthree";
        let index = LineIndex::new(source);
        assert_eq!(index.lines(source, 1, 1), "one\n");
        assert_eq!(index.lines(source, 2, 3), "two\nthree");
        assert_eq!(index.lines(source, 4, 4), "");
    }
}
