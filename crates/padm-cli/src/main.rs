//! PADM DIC Risk Predictor CLI.

use clap::{ColorChoice, Parser};
use padm_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::Level;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_assess, run_demo, run_model_info, run_ranges};
use crate::summary::print_report;

use padm_model::AssessmentReport;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Assess(args) => {
            let json = args.json;
            match run_assess(&args) {
                Ok(report) => emit_report(&report, json),
                Err(error) => {
                    eprintln!("error: {error}");
                    1
                }
            }
        }
        Command::Demo(args) => {
            let json = args.json;
            match run_demo(&args) {
                Ok(report) => emit_report(&report, json),
                Err(error) => {
                    eprintln!("error: {error}");
                    1
                }
            }
        }
        Command::Ranges => match run_ranges() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::ModelInfo(args) => match run_model_info(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn emit_report(report: &AssessmentReport, json: bool) -> i32 {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(error) => {
                eprintln!("error: failed to serialize report: {error}");
                1
            }
        }
    } else {
        print_report(report);
        0
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level: cli
            .verbosity
            .tracing_level()
            .unwrap_or(Level::ERROR),
        ..LogConfig::default()
    };
    if let Some(level) = cli.log_level {
        config.level = match level {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
