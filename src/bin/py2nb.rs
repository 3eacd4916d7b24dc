//! Command-line interface for py2nb
//! Converts annotated Python scripts into the notebook python script format, or dumps the
//! token stream at any stage of the conversion.
//!
//! Usage:
//!   py2nb `<path>` [--config `<config>`] [--format `<format>`] [--output `<file>`]
//!   py2nb --list-configs

use clap::{Arg, ArgAction, ArgMatches, Command};
use py2nb::py2nb::pipeline::{ExecutionOutput, PipelineExecutor};
use py2nb::py2nb::token::Token;
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("py2nb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert annotated Python scripts into the notebook python script format")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the Python file")
                .required_unless_present("list-configs")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration name (e.g., 'notebook', 'tokens-raw', 'tokens-cells')")
                .default_value("notebook"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format for token configurations")
                .value_parser(["auto", "token-json", "token-simple"])
                .default_value("auto"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout"),
        )
        .arg(
            Arg::new("list-configs")
                .long("list-configs")
                .help("List available processing configurations")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli().get_matches();

    if matches.get_flag("list-configs") {
        handle_list_configs_command();
        return ExitCode::SUCCESS;
    }

    match handle_execute_command(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

/// Handle the execute command
fn handle_execute_command(matches: &ArgMatches) -> Result<(), String> {
    let path = matches
        .get_one::<String>("path")
        .ok_or("a path is required unless listing configs")?;
    let config = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("notebook");
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("auto");

    let executor = PipelineExecutor::new();
    let output = executor
        .load_and_execute(path, config)
        .map_err(|e| e.to_string())?;

    let formatted = match (output, format) {
        (ExecutionOutput::Script(script), "auto") => script,
        (ExecutionOutput::Script(_), fmt) => {
            return Err(format!(
                "format '{}' is only available for token configurations",
                fmt
            ));
        }
        (ExecutionOutput::Tokens(tokens), "token-simple") => format_simple(&tokens),
        (ExecutionOutput::Tokens(tokens), _) => {
            let mut json = serde_json::to_string_pretty(&tokens)
                .map_err(|e| format!("failed to format tokens: {}", e))?;
            json.push('\n');
            json
        }
    };

    match matches.get_one::<String>("output") {
        Some(output_path) => std::fs::write(output_path, formatted)
            .map_err(|e| format!("failed to write {}: {}", output_path, e)),
        None => {
            print!("{}", formatted);
            Ok(())
        }
    }
}

fn format_simple(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{}\n", token)).collect()
}

/// Handle the list-configs command
fn handle_list_configs_command() {
    let executor = PipelineExecutor::new();
    println!("Available processing configurations:\n");

    for config in executor.list_configs() {
        println!("  {}", config.name);
        println!("    {}", config.description);
        println!();
    }
}
