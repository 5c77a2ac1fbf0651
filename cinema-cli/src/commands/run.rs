//! Command to start the interactive session.

use crate::error::CliError;
use crate::session::Session;
use crate::utils::{load_configuration, paired, resolve_format, GlobalOptions};
use clap::Args;
use std::io;

/// Start an interactive ticket-selling session.
#[derive(Args, Debug, Default)]
pub struct RunCommand {
    /// Number of rows; skips the prompt (requires --seats-per-row)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub rows: Option<i64>,

    /// Number of seats in each row; skips the prompt (requires --rows)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub seats_per_row: Option<i64>,
}

impl RunCommand {
    /// Execute the run command on stdin and stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let dimensions =
            paired(self.rows, self.seats_per_row)?.or_else(|| config.room_dimensions());

        let stdin = io::stdin();
        let stdout = io::stdout();
        let session = Session::new(
            stdin.lock(),
            stdout.lock(),
            resolve_format(global, &config),
            config.pricing_policy(),
            global.logger,
        );

        if let Some(room) = session.run(dimensions)? {
            let metrics = room.metrics();
            global.logger.debug(&format!(
                "session ended with {} of {} seats sold",
                metrics.tickets_sold, metrics.total_seats
            ));
        }

        Ok(())
    }
}
