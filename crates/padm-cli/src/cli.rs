//! CLI argument definitions for the PADM risk predictor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "padm",
    version,
    about = "PADM DIC Risk Predictor - Coagulation-panel risk stratification",
    long_about = "Predict Disseminated Intravascular Coagulation (DIC) risk from a \
                  four-value coagulation panel (PT, APTT, D-Dimer, MPV).\n\n\
                  Requires a trained PADM model artifact; without one, the demo \
                  subcommand still exercises the tier and recommendation flow.\n\n\
                  Clinical decision support only. Always correlate with the \
                  patient's clinical status."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow panel values (patient data) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assess one coagulation panel and print risk plus recommendations.
    Assess(AssessArgs),

    /// Run the fixed example panel through the tier and recommendation
    /// flow with a supplied probability, without touching the model.
    Demo(DemoArgs),

    /// Print the normal-range reference table for the four parameters.
    Ranges,

    /// Print metadata and validation metrics of a model artifact.
    ModelInfo(ModelInfoArgs),
}

#[derive(Parser)]
pub struct AssessArgs {
    /// Prothrombin Time in seconds (normal 11.0-13.5).
    #[arg(long = "pt", value_name = "SECONDS")]
    pub pt: f64,

    /// Activated Partial Thromboplastin Time in seconds (normal 25.0-35.0).
    #[arg(long = "aptt", value_name = "SECONDS")]
    pub aptt: f64,

    /// D-Dimer in mg/L (normal 0.0-0.5).
    #[arg(long = "d-dimer", value_name = "MG_PER_L")]
    pub d_dimer: f64,

    /// Mean Platelet Volume in fL (normal 7.5-11.5).
    #[arg(long = "mpv", value_name = "FL")]
    pub mpv: f64,

    /// Path to the trained model artifact (default: $PADM_MODEL_PATH,
    /// then ./PADM_model.json).
    #[arg(long = "model", value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Emit the full assessment report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct DemoArgs {
    /// Probability to feed the threshold mapper, in [0, 1].
    #[arg(long = "probability", value_name = "P", default_value_t = 0.75)]
    pub probability: f64,

    /// Emit the full assessment report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ModelInfoArgs {
    /// Path to the trained model artifact (default: $PADM_MODEL_PATH,
    /// then ./PADM_model.json).
    #[arg(long = "model", value_name = "PATH")]
    pub model: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn assess_parses_panel_flags() {
        let cli = Cli::try_parse_from([
            "padm", "assess", "--pt", "18.5", "--aptt", "55.0", "--d-dimer", "3.2", "--mpv",
            "12.5",
        ])
        .unwrap();
        match cli.command {
            Command::Assess(args) => {
                assert_eq!(args.pt, 18.5);
                assert_eq!(args.aptt, 55.0);
                assert_eq!(args.d_dimer, 3.2);
                assert_eq!(args.mpv, 12.5);
                assert!(args.model.is_none());
            }
            _ => panic!("expected assess"),
        }
    }

    #[test]
    fn demo_defaults_probability() {
        let cli = Cli::try_parse_from(["padm", "demo"]).unwrap();
        match cli.command {
            Command::Demo(args) => assert_eq!(args.probability, 0.75),
            _ => panic!("expected demo"),
        }
    }
}
