//! Reader
//!
//! One-call conversion of a Python file into the notebook python script format.
//!
//! ```text
//! read(path)
//!   -> bytes               (whole file, handle closed before conversion starts)
//!   -> tokenize            (lazy)
//!   -> cell markers        (lazy)
//!   -> newline fill        (lazy)
//!   -> Vec<Token>          (materialized, first error aborts)
//!   -> detokenize
//!   -> fix_empty_lines
//! ```
//!
//! Every failure is returned as is; there is no partial output.

use crate::py2nb::formats::{detokenize, fix_empty_lines, RenderError};
use crate::py2nb::lexing::{tokenize, TokenizeError};
use crate::py2nb::token::Token;
use crate::py2nb::transforms::{convert_toplevel_docstrings, fix_newlines};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to tokenize source: {0}")]
    Tokenize(#[from] TokenizeError),

    #[error("failed to render tokens: {0}")]
    Render(#[from] RenderError),
}

/// Read a Python file and convert it to the notebook python script format
pub fn read(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    let bytes = std::fs::read(path)?;
    read_source(&bytes)
}

/// Convert Python source bytes to the notebook python script format
pub fn read_source(bytes: &[u8]) -> Result<String, ReadError> {
    let tokens = cell_tokens(bytes)?;
    let rendered = detokenize(&tokens)?;
    Ok(fix_empty_lines(&rendered))
}

/// Tokenize, convert cell markers and fill skipped lines, materializing the result
pub fn cell_tokens(bytes: &[u8]) -> Result<Vec<Token>, ReadError> {
    let tokens = fix_newlines(convert_toplevel_docstrings(tokenize(bytes)?))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("pipeline produced {} tokens", tokens.len());
    Ok(tokens)
}
