//! Main entry point for the cinema CLI.
//!
//! Without a subcommand the interactive session starts:
//! - `run`: Sell tickets interactively
//! - `prices`: Print the price of every row
//! - `validate`: Check a configuration file
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod prompt;
mod session;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::RunCommand;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = cinema::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        quiet: cli.quiet,
        config: cli.config,
        format: cli.format,
        logger,
    };

    let result = match cli.command {
        None => RunCommand::default().execute(&global),
        Some(cli::Command::Run(cmd)) => cmd.execute(&global),
        Some(cli::Command::Prices(cmd)) => cmd.execute(&global),
        Some(cli::Command::Validate(cmd)) => cmd.execute(&global),
        Some(cli::Command::Completions(cmd)) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
