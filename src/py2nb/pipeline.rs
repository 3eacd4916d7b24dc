//! Named processing configurations
//!
//! The reader runs one fixed chain of stages. This module exposes the same chain as named
//! configurations so the stream can be stopped and inspected after any stage:
//!
//! - `notebook`: the full conversion, same output as [read](crate::py2nb::reader::read)
//! - `tokens-raw`: tokens straight from the tokenizer
//! - `tokens-cells`: tokens after docstrings and separators became cell markers
//! - `tokens-filled`: tokens after skipped lines were filled with newlines

pub mod config;
pub mod executor;

pub use config::{ConfigRegistry, PipelineSpec, ProcessingConfig, TargetSpec};
pub use executor::{ExecutionError, ExecutionOutput, PipelineExecutor};
