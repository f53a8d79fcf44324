//! CLI argument definitions for the certrec tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "certrec",
    version,
    about = "Reconcile training-certificate exports against master data",
    long_about = "Reconcile loosely-structured attendance/certificate exports against the\n\
                  training master dataset and generate idempotent SQL insert batches.\n\
                  Dry-run mode reports every decision without writing anything."
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

    /// Allow participant names and other row-level values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile the configured candidate program list.
    Programs(CommonArgs),

    /// Reconcile schedule occurrences from an attendance export.
    Schedules(SheetArgs),

    /// Reconcile participants and certificates from an attendance export.
    Participants(SheetArgs),

    /// Show the configured category table and keyword rules.
    Categories(ConfigArgs),
}

#[derive(Args)]
pub struct CommonArgs {
    /// Path to the reconciliation config (default: config/certrec.toml,
    /// or $CERTREC_CONFIG).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory containing master-data CSV exports
    /// (programs.csv, schedules.csv, participants.csv).
    #[arg(long = "master-dir", value_name = "DIR", default_value = "master")]
    pub master_dir: PathBuf,

    /// Output directory for generated SQL scripts.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "out")]
    pub output_dir: PathBuf,

    /// Only report what would be created; do not write the SQL script.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write the decision report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
}

#[derive(Args)]
pub struct SheetArgs {
    /// Path to the attendance/certificate export CSV.
    #[arg(value_name = "ATTENDANCE_CSV")]
    pub attendance: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Path to the reconciliation config (default: config/certrec.toml,
    /// or $CERTREC_CONFIG).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
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
