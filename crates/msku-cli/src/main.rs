//! Marketplace inventory reconciliation CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use msku_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};
use msku_cli::commands::{run_inspect, run_process};
use msku_cli::logging::{LogConfig, LogFormat, init_logging};
use msku_cli::summary::{
    print_inspect_outcome, print_process_outcome, render_inspect_json, render_response_json,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Process(args) => match run_process(&args) {
            Ok(outcome) => {
                match args.format {
                    OutputFormatArg::Table => print_process_outcome(&outcome),
                    OutputFormatArg::Json => match render_response_json(&outcome.response) {
                        Ok(json) => println!("{json}"),
                        Err(error) => eprintln!("error: {error}"),
                    },
                }
                if outcome.response.file_errors.is_empty() { 0 } else { 1 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Inspect(args) => match run_inspect(&args) {
            Ok(outcome) => {
                match args.format {
                    OutputFormatArg::Table => print_inspect_outcome(&outcome),
                    OutputFormatArg::Json => match render_inspect_json(&outcome) {
                        Ok(json) => println!("{json}"),
                        Err(error) => eprintln!("error: {error}"),
                    },
                }
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
