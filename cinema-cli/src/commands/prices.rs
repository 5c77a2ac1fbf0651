//! Command to print the price table of a room.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_format, GlobalOptions};
use cinema::output::PriceList;
use clap::Args;

/// Print the ticket price of every row of a room.
#[derive(Args, Debug)]
pub struct PricesCommand {
    /// Number of rows
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub rows: i64,

    /// Number of seats in each row
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub seats_per_row: i64,
}

impl PricesCommand {
    /// Execute the prices command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let prices =
            PriceList::for_dimensions(self.rows, self.seats_per_row, &config.pricing_policy())?;

        let formatter = resolve_format(global, &config).create_formatter();
        println!("{}", formatter.format_prices(&prices)?);

        Ok(())
    }
}
