//! Output formats
//!
//! Unlike the transforms, which map token streams to token streams, these modules produce
//! text: the detokenizer renders a materialized token list back to source, and the blank
//! line fixer normalizes the rendered text.

pub mod blank_lines;
pub mod detokenizer;

pub use blank_lines::fix_empty_lines;
pub use detokenizer::{detokenize, RenderError};
