//! Build script for cinema-cli.
//!
//! Generates the `cinema.1` man page into OUT_DIR with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here again.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    Command::new("cinema")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sell tickets for a cinema room")
        .long_about(
            "Interactive box office for a single cinema room: show the seat map, \
             sell tickets and report occupancy and income",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load this configuration file on top of the discovered ones")
                .value_name("PATH")
                .global(true)
                .env("CINEMA_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format for seat maps, prices and statistics (human or json)")
                .value_name("FORMAT")
                .global(true)
                .env("CINEMA_OUTPUT_FORMAT"),
        )
        .subcommands(vec![
            Command::new("run")
                .about("Start an interactive ticket-selling session")
                .long_about(
                    "Ask for the room size unless it is configured, then sell tickets from a menu",
                )
                .arg(Arg::new("rows").long("rows").value_name("N"))
                .arg(Arg::new("seats-per-row").long("seats-per-row").value_name("N")),
            Command::new("prices")
                .about("Print the ticket price of every row of a room")
                .arg(Arg::new("rows").long("rows").value_name("N").required(true))
                .arg(
                    Arg::new("seats-per-row")
                        .long("seats-per-row")
                        .value_name("N")
                        .required(true),
                ),
            Command::new("validate")
                .about("Validate a configuration file")
                .arg(Arg::new("CONFIG_PATH").required(true)),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("cinema.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
