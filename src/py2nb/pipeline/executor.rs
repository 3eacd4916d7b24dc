//! Pipeline executor that runs processing configurations

use crate::py2nb::formats::{detokenize, fix_empty_lines, RenderError};
use crate::py2nb::lexing::{tokenize, TokenizeError};
use crate::py2nb::pipeline::config::{ConfigRegistry, PipelineSpec, ProcessingConfig, TargetSpec};
use crate::py2nb::token::Token;
use crate::py2nb::transforms::{convert_toplevel_docstrings, fix_newlines};
use std::path::Path;
use thiserror::Error;

/// Errors during pipeline execution
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Config '{0}' not found")]
    ConfigNotFound(String),

    #[error("Failed to read source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tokenization failed: {0}")]
    Tokenize(#[from] TokenizeError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Output from pipeline execution
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutput {
    Tokens(Vec<Token>),
    Script(String),
}

/// Executes processing configurations
pub struct PipelineExecutor {
    registry: ConfigRegistry,
}

impl PipelineExecutor {
    /// Create executor with default configurations
    pub fn new() -> Self {
        Self {
            registry: ConfigRegistry::with_defaults(),
        }
    }

    /// Create executor with custom registry
    pub fn with_registry(registry: ConfigRegistry) -> Self {
        Self { registry }
    }

    /// Execute a named configuration over source bytes
    pub fn execute(
        &self,
        config_name: &str,
        source: &[u8],
    ) -> Result<ExecutionOutput, ExecutionError> {
        let config = self
            .registry
            .get(config_name)
            .ok_or_else(|| ExecutionError::ConfigNotFound(config_name.to_string()))?;
        log::debug!(
            "executing config '{}' ({:?} -> {:?})",
            config.name,
            config.pipeline_spec,
            config.target
        );

        let tokens = run_stages(source, config.pipeline_spec)?;

        match config.target {
            TargetSpec::Tokens => Ok(ExecutionOutput::Tokens(tokens)),
            TargetSpec::Script => {
                let rendered = detokenize(&tokens)?;
                Ok(ExecutionOutput::Script(fix_empty_lines(&rendered)))
            }
        }
    }

    /// Read a file and execute a named configuration over its contents
    pub fn load_and_execute(
        &self,
        path: impl AsRef<Path>,
        config_name: &str,
    ) -> Result<ExecutionOutput, ExecutionError> {
        // Fail on the name before touching the file system
        if !self.registry.has(config_name) {
            return Err(ExecutionError::ConfigNotFound(config_name.to_string()));
        }
        let source = std::fs::read(path.as_ref())?;
        self.execute(config_name, &source)
    }

    /// List all available configurations
    pub fn list_configs(&self) -> Vec<&ProcessingConfig> {
        self.registry.list_all()
    }

    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }
}

impl Default for PipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}

fn run_stages(source: &[u8], spec: PipelineSpec) -> Result<Vec<Token>, ExecutionError> {
    let raw = tokenize(source)?;
    let tokens = match spec {
        PipelineSpec::Raw => raw.collect::<Result<Vec<_>, _>>()?,
        PipelineSpec::Cells => convert_toplevel_docstrings(raw).collect::<Result<Vec<_>, _>>()?,
        PipelineSpec::Filled => {
            fix_newlines(convert_toplevel_docstrings(raw)).collect::<Result<Vec<_>, _>>()?
        }
    };
    log::debug!("{:?} stages produced {} tokens", spec, tokens.len());
    Ok(tokens)
}
