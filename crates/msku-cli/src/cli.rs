//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "msku-recon",
    version,
    about = "Reconcile marketplace order exports against a canonical inventory ledger",
    long_about = "Normalize per-marketplace SKUs to canonical MSKUs, expand combo \
                  listings into their components, aggregate sold quantities, and \
                  decrement the inventory ledger.\n\n\
                  Order files may come from Amazon, Flipkart, Meesho, or any export \
                  with a recognizable SKU column; the marketplace is detected from \
                  the column names."
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
    /// Process order files and reconcile the inventory ledger.
    Process(ProcessArgs),

    /// Load master data and print a read-only table view.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Master SKU-to-MSKU mapping file (delimited text).
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: PathBuf,

    /// Combo definition file.
    #[arg(long = "combos", value_name = "FILE")]
    pub combos: Option<PathBuf>,

    /// Current-inventory file used to build the ledger.
    #[arg(long = "inventory", value_name = "FILE")]
    pub inventory: Option<PathBuf>,

    /// Output format for the reconciliation result.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// One or more order export files to process.
    #[arg(value_name = "ORDER_FILES", required = true)]
    pub order_files: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Master SKU-to-MSKU mapping file.
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: PathBuf,

    /// Combo definition file.
    #[arg(long = "combos", value_name = "FILE")]
    pub combos: Option<PathBuf>,

    /// Current-inventory file.
    #[arg(long = "inventory", value_name = "FILE")]
    pub inventory: Option<PathBuf>,

    /// Which table to print.
    #[arg(long = "view", value_enum, default_value = "mappings")]
    pub view: ViewArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Mappings,
    Combos,
    Ledger,
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
