//! CLI argument definitions for the CBC triage tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cbc-triage",
    version,
    about = "CBC Triage - Analyze blood-test reports against reference ranges",
    long_about = "Analyze extracted blood-test report text against the built-in CBC panel.\n\n\
                  Classifies each value as Normal/Low/High, resolves educational links and\n\
                  dietary advice for abnormal results, and returns the sections relevant\n\
                  to the query."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a report and print the sections matching the query.
    Analyze(AnalyzeArgs),

    /// List the built-in CBC panel with its reference ranges.
    Panel,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the extracted report text, or "-" to read from stdin.
    ///
    /// PDF text extraction happens upstream; this tool consumes the
    /// extracted text. Empty or garbled text yields zero readings.
    #[arg(value_name = "REPORT_FILE")]
    pub report_file: PathBuf,

    /// The patient's free-text question about the report.
    #[arg(long = "query", value_name = "TEXT")]
    pub query: String,

    /// Patient weight in kilograms, used for the protein recommendation.
    #[arg(long = "weight-kg", value_name = "KG", default_value_t = 70.0)]
    pub weight_kg: f64,

    /// Daily protein target in grams per kilogram of body weight.
    #[arg(long = "protein-g-per-kg", value_name = "G", default_value_t = 1.2)]
    pub protein_g_per_kg: f64,

    /// Output format for the selected sections.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
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
