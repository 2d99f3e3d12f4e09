//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads configuration and installs logging
//! - loads the model artifact once
//! - dispatches to the form, a one-shot prediction, or the schema listing

use clap::Parser;

use crate::cli::{Command, PredictArgs};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::predictor::PipelineModel;

pub mod pipeline;

/// Entry point for the `empperf` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `empperf` to behave like `empperf form`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let config = AppConfig::from_env().with_model_override(cli.model.clone());
    let interactive = matches!(cli.command, Command::Form);
    crate::logging::init(&config, interactive)?;

    match cli.command {
        Command::Form => handle_form(&config),
        Command::Predict(args) => handle_predict(&config, &args),
        Command::Schema => {
            print!("{}", crate::report::format_schema());
            Ok(())
        }
    }
}

fn load_model(config: &AppConfig) -> Result<PipelineModel, AppError> {
    PipelineModel::load(&config.model_path).map_err(AppError::from)
}

fn handle_form(config: &AppConfig) -> Result<(), AppError> {
    let model = load_model(config)?;
    crate::tui::run(&model)
}

fn handle_predict(config: &AppConfig, args: &PredictArgs) -> Result<(), AppError> {
    let model = load_model(config)?;
    let raw = crate::io::read_raw_inputs(args.input.as_deref())?;

    let outcome = pipeline::run_prediction(&model, &raw)?;
    if args.show_record {
        print!("{}", crate::report::format_record(&outcome.record));
    }
    println!("{}", crate::report::format_outcome(&outcome));
    Ok(())
}

/// Rewrite argv so `empperf` defaults to `empperf form`.
///
/// Rules:
/// - `empperf`                      -> `empperf form`
/// - `empperf --model m.json`       -> `empperf form --model m.json`
/// - `empperf --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("form".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "form" | "predict" | "schema");
    if is_subcommand {
        return argv;
    }

    // A leading flag with no subcommand anywhere means "form flags".
    let has_subcommand = argv[1..]
        .iter()
        .any(|a| matches!(a.as_str(), "form" | "predict" | "schema"));
    if arg1.starts_with('-') && !has_subcommand {
        argv.insert(1, "form".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_the_form() {
        assert_eq!(rewrite_args(args(&["empperf"])), args(&["empperf", "form"]));
    }

    #[test]
    fn leading_flags_go_to_the_form() {
        assert_eq!(
            rewrite_args(args(&["empperf", "--model", "m.json"])),
            args(&["empperf", "form", "--model", "m.json"])
        );
    }

    #[test]
    fn global_flag_before_subcommand_is_left_alone() {
        assert_eq!(
            rewrite_args(args(&["empperf", "--model", "m.json", "predict"])),
            args(&["empperf", "--model", "m.json", "predict"])
        );
    }

    #[test]
    fn help_and_subcommands_pass_through() {
        assert_eq!(rewrite_args(args(&["empperf", "--help"])), args(&["empperf", "--help"]));
        assert_eq!(
            rewrite_args(args(&["empperf", "predict", "-i", "x.json"])),
            args(&["empperf", "predict", "-i", "x.json"])
        );
        assert_eq!(rewrite_args(args(&["empperf", "schema"])), args(&["empperf", "schema"]));
    }
}
