//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, PricesCommand, RunCommand, ValidateCommand};
use cinema::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sell tickets for a cinema room from the terminal.
#[derive(Parser)]
#[command(name = "cinema")]
#[command(version, about = "Sell tickets for a cinema room", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file on top of the discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "CINEMA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for seat maps, prices and statistics (human or json)
    #[arg(long, value_name = "FORMAT", global = true, env = "CINEMA_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Command to run; defaults to `run`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive ticket-selling session
    Run(RunCommand),

    /// Print the ticket price of every row of a room
    Prices(PricesCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
