//! # py2nb
//!
//! Converts annotated Python scripts into the IPython notebook (v3) python script format.
//!
//! Top-level docstrings become markdown cells (or raw cells when they open with `Raw`),
//! `#%%` comments at column 0 become code cell boundaries, and everything else is kept as
//! code. The work is done as a pipeline over a token stream:
//!
//! ```text
//! bytes -> tokenize -> cell markers -> newline fill -> detokenize -> fix empty lines
//! ```
//!
//! See [reader](py2nb::reader) for the one-call entry points and
//! [pipeline](py2nb::pipeline) for running the stages individually.

pub mod py2nb;

pub use py2nb::reader::{read, read_source, ReadError};
