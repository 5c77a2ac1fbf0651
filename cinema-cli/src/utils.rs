//! Utility functions for CLI operations.
//!
//! Configuration loading and output format selection shared by the commands.

use crate::error::CliError;
use cinema::output::OutputFormat;
use cinema::{Config, ConfigBuilder, Logger};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file, loaded on top of the discovered ones.
    pub config: Option<PathBuf>,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,

    /// Logger for diagnostics on stderr.
    pub logger: Logger,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file
/// 3. `cinema.local.yaml` and `cinema.yaml` found from the current directory
/// 4. `~/.cinema/config.yaml`
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the output format: the command line wins over configuration.
pub fn resolve_format(global: &GlobalOptions, config: &Config) -> OutputFormat {
    global.format.unwrap_or_else(|| config.output_format())
}

/// Require that two optional flags are given together.
pub fn paired<T>(first: Option<T>, second: Option<T>) -> Result<Option<(T, T)>, CliError> {
    match (first, second) {
        (Some(a), Some(b)) => Ok(Some((a, b))),
        (None, None) => Ok(None),
        _ => Err(CliError::InvalidArguments(
            "--rows and --seats-per-row must be given together".to_string(),
        )),
    }
}
