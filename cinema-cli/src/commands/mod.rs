//! CLI command implementations.
//!
//! - `run`: Interactive ticket-selling session
//! - `prices`: Per-row price table of a room
//! - `validate`: Validate a configuration file
//! - `completions`: Shell completion scripts

pub mod completions;
pub mod prices;
pub mod run;
pub mod validate;

pub use completions::CompletionsCommand;
pub use prices::PricesCommand;
pub use run::RunCommand;
pub use validate::ValidateCommand;
