//! Ednt CLI - A command-line tool for working with EDN files.
//!
//! This is the main entry point for the ednt CLI application. It uses
//! clap for argument parsing and dispatches to the command handlers in
//! `commands`.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_check, run_convert, run_format, CheckArgs, ConvertArgs, FormatArgs,
};
use config::Config;
use error::Result;

/// Ednt - a tool for EDN files
///
/// Ednt parses `.edn` files and can report syntax diagnostics, re-render
/// files canonically, and convert their contents to JSON.
#[derive(Parser, Debug)]
#[command(name = "ednt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for checking, formatting, and converting EDN files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "EDNT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "EDNT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "EDNT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the ednt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse files and report diagnostics
    ///
    /// Exits non-zero when any file fails to parse.
    Check(CheckCommand),

    /// Re-render a file canonically
    ///
    /// Prints one top-level form per line with normalized spacing.
    Format(FormatCommand),

    /// Convert a file to JSON
    ///
    /// Normalizes the value tree first; unhandled tags fail unless
    /// `--ignore-tags` is given.
    Convert(ConvertCommand),
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Arguments for the format subcommand.
#[derive(Parser, Debug)]
struct FormatCommand {
    /// File to format
    file: PathBuf,

    /// Emit \newline-style names for control characters
    #[arg(long)]
    char_names: bool,
}

/// Arguments for the convert subcommand.
#[derive(Parser, Debug)]
struct ConvertCommand {
    /// File to convert
    file: PathBuf,

    /// Output file (stdout when absent)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Substitute unhandled tagged values with their payload
    #[arg(long)]
    ignore_tags: bool,
}

/// Main entry point for the ednt CLI.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    execute_command(cli.command, &config)?;
    Ok(())
}

/// Initializes the logging system.
///
/// The filter comes from `EDNT_LOG` when set, defaults to `warn`, and
/// `--verbose` raises it to `debug`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("EDNT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| error::EdntError::Config(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

/// Dispatches the selected command.
fn execute_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Check(args) => run_check(CheckArgs { files: args.files }),
        Commands::Format(args) => run_format(
            FormatArgs {
                file: args.file,
                char_names: args.char_names,
            },
            config,
        ),
        Commands::Convert(args) => run_convert(
            ConvertArgs {
                file: args.file,
                output: args.output,
                ignore_tags: args.ignore_tags,
            },
            config,
        ),
    }
}
