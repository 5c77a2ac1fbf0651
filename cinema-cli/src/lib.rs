//! Library exports for cinema-cli.
//!
//! This module exports the CLI structure for use by the build script
//! and benchmarks, along with the interactive session.

pub mod cli;
pub mod commands;
pub mod error;
pub mod prompt;
pub mod session;
pub mod utils;

pub use cli::Cli;
pub use session::Session;
