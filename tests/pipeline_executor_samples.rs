//! Integration tests for PipelineExecutor
//!
//! These tests validate that the config-based executor:
//! 1. Runs every default config on every sample without errors
//! 2. Agrees with the one-call reader for the notebook config

use py2nb::py2nb::pipeline::{ExecutionError, ExecutionOutput, PipelineExecutor};
use py2nb::py2nb::testing::{kinds, Samples};
use py2nb::py2nb::token::TokenType;

#[test]
fn test_all_configs_on_all_samples() {
    let executor = PipelineExecutor::new();
    for name in Samples::list() {
        let path = Samples::get(&name).path();
        for config in executor.list_configs() {
            let result = executor.load_and_execute(&path, &config.name);
            assert!(
                result.is_ok(),
                "config '{}' failed on sample '{}': {:?}",
                config.name,
                name,
                result.err()
            );
        }
    }
}

#[test]
fn test_notebook_config_matches_reader() {
    let executor = PipelineExecutor::new();
    for name in Samples::list() {
        let sample = Samples::get(&name);
        let output = executor.load_and_execute(sample.path(), "notebook").unwrap();
        assert_eq!(output, ExecutionOutput::Script(sample.convert()), "sample {}", name);
    }
}

#[test]
fn test_cells_stage_replaces_separators_only_at_top_level() {
    let tokens = Samples::get("separators").tokens("tokens-cells");
    let comments: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenType::Comment)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(
        comments,
        vec!["# <codecell>\n", "# <codecell>\n", "#%% not a separator"]
    );
}

#[test]
fn test_raw_stage_shape() {
    let tokens = Samples::get("raw-cell").tokens("tokens-raw");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenType::String,
            TokenType::Newline,
            TokenType::Name,
            TokenType::Op,
            TokenType::String,
            TokenType::Op,
            TokenType::Newline,
            TokenType::EndMarker,
        ]
    );
}

#[test]
fn test_stages_keep_positions() {
    let raw = Samples::get("markdown-cells").tokens("tokens-raw");
    let cells = Samples::get("markdown-cells").tokens("tokens-cells");
    assert_eq!(raw.len(), cells.len());
    for (before, after) in raw.iter().zip(&cells) {
        assert_eq!((before.start, before.end), (after.start, after.end));
    }
}

#[test]
fn test_unknown_config() {
    let executor = PipelineExecutor::new();
    let result = executor.execute("tokens-everything", b"x = 1\n");
    assert!(matches!(result, Err(ExecutionError::ConfigNotFound(name)) if name == "tokens-everything"));
}
