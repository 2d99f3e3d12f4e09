//! Command-line parsing for the employee performance predictor.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! assembly and scoring code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "empperf", version, about = "Employee Performance Prediction")]
pub struct Cli {
    /// Model artifact (JSON). Overrides EMPPERF_MODEL.
    #[arg(long, global = true, value_name = "JSON")]
    pub model: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fill in the employee form interactively and predict.
    Form,
    /// Predict once from a raw-input JSON object.
    Predict(PredictArgs),
    /// Print the feature schema with ranges and allowed values.
    Schema,
}

#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    /// Raw-input JSON file. Reads stdin when omitted.
    #[arg(short, long, value_name = "JSON")]
    pub input: Option<PathBuf>,

    /// Also print the assembled feature record.
    #[arg(long)]
    pub show_record: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_predict_with_global_model() {
        let cli = Cli::parse_from(["empperf", "predict", "-i", "in.json", "--model", "m.json", "--show-record"]);
        assert_eq!(cli.model, Some(PathBuf::from("m.json")));
        match cli.command {
            Command::Predict(args) => {
                assert_eq!(args.input, Some(PathBuf::from("in.json")));
                assert!(args.show_record);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn predict_defaults_to_stdin() {
        let cli = Cli::parse_from(["empperf", "predict"]);
        match cli.command {
            Command::Predict(args) => assert_eq!(args.input, None),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
