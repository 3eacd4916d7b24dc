//! Testing utilities
//!
//!     Tests should load Python input from the sample files under `samples/` rather than
//!     inlining it, except for the short snippets that pin down a single tokenizer or marker
//!     rule. The samples are plain Python files that also run under the interpreter, so they
//!     stay honest when the conversion rules change.
//!
//! Usage
//!
//!     ```rust,ignore
//!     use py2nb::py2nb::testing::Samples;
//!
//!     let source = Samples::get("separators").source();
//!     let tokens = Samples::get("separators").tokens("tokens-cells");
//!     let script = Samples::get("separators").convert();
//!     ```
//!
//!     Token factories build tokens with less noise than [Token::new] when a test needs a
//!     hand-made stream.

use crate::py2nb::pipeline::{ExecutionOutput, PipelineExecutor};
use crate::py2nb::reader;
use crate::py2nb::token::{Token, TokenType};
use std::path::PathBuf;

const SAMPLES_DIR: &str = "samples";

/// Loader for one sample file
#[derive(Debug, Clone)]
pub struct Samples {
    name: String,
}

impl Samples {
    /// Sample by file stem, e.g. `"plain-code"` for `samples/plain-code.py`
    pub fn get(name: &str) -> Self {
        Samples {
            name: name.to_string(),
        }
    }

    /// Names of every available sample, sorted
    pub fn list() -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(samples_dir())
            .map(|entries| {
                entries
                    .filter_map(|entry| entry.ok())
                    .map(|entry| entry.path())
                    .filter(|path| path.extension().is_some_and(|ext| ext == "py"))
                    .filter_map(|path| Some(path.file_stem()?.to_str()?.to_string()))
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    pub fn path(&self) -> PathBuf {
        samples_dir().join(format!("{}.py", self.name))
    }

    pub fn source(&self) -> String {
        std::fs::read_to_string(self.path())
            .unwrap_or_else(|e| panic!("Failed to read sample '{}': {}", self.name, e))
    }

    /// Run a token configuration over the sample
    pub fn tokens(&self, config: &str) -> Vec<Token> {
        match PipelineExecutor::new().load_and_execute(self.path(), config) {
            Ok(ExecutionOutput::Tokens(tokens)) => tokens,
            Ok(other) => panic!("Config '{}' did not produce tokens: {:?}", config, other),
            Err(e) => panic!("Sample '{}' failed under '{}': {}", self.name, config, e),
        }
    }

    /// Full conversion through [reader::read]
    pub fn convert(&self) -> String {
        reader::read(self.path())
            .unwrap_or_else(|e| panic!("Sample '{}' failed to convert: {}", self.name, e))
    }
}

fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(SAMPLES_DIR)
}

/// Token with a single-line extent computed from its text
pub fn mk_token(kind: TokenType, text: &str, line: usize, column: usize) -> Token {
    let end = (line, column + text.chars().count());
    Token::new(kind, text, (line, column), end, text)
}

/// Token with explicit positions, for multi-line or synthetic tokens
pub fn mk_span(kind: TokenType, text: &str, start: (usize, usize), end: (usize, usize)) -> Token {
    Token::new(kind, text, start, end, text)
}

/// Wrap tokens as an infallible upstream for the stream adapters
pub fn ok_stream<E>(tokens: Vec<Token>) -> impl Iterator<Item = Result<Token, E>> {
    tokens.into_iter().map(Ok)
}

/// Kinds of a token list, for compact shape assertions
pub fn kinds(tokens: &[Token]) -> Vec<TokenType> {
    tokens.iter().map(|token| token.kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_listed() {
        let names = Samples::list();
        assert!(names.contains(&"plain-code".to_string()));
        assert!(names.contains(&"separators".to_string()));
    }

    #[test]
    fn test_mk_token_extent() {
        let token = mk_token(TokenType::Name, "héllo", 3, 4);
        assert_eq!(token.start, (3, 4).into());
        assert_eq!(token.end, (3, 9).into());
    }

    #[test]
    fn test_sample_tokens_end_with_endmarker() {
        for name in Samples::list() {
            let tokens = Samples::get(&name).tokens("tokens-raw");
            assert_eq!(
                tokens.last().map(|t| t.kind),
                Some(TokenType::EndMarker),
                "sample {}",
                name
            );
        }
    }
}
