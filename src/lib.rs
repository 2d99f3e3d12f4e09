//! `emp-perf` library crate.
//!
//! The binary (`empperf`) is a thin wrapper around this library so that:
//!
//! - feature assembly and scoring are testable without a terminal
//! - the predictor can be swapped behind a trait
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod io;
pub mod logging;
pub mod predictor;
pub mod registry;
pub mod report;
pub mod tui;
