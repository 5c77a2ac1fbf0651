//! The interactive box-office session.
//!
//! A session asks for the room dimensions (unless they are preset), then
//! loops over a numbered menu until the user exits or the input ends.

use crate::error::CliError;
use crate::prompt::{Prompter, Reply};
use cinema::output::{banner, OutputFormat, OutputFormatter};
use cinema::{Logger, PricingPolicy, SeatInventory};
use std::io::{BufRead, Write};

const MENU: &[&str] = &[
    "1. Show the seats",
    "2. Buy a ticket",
    "3. Statistics",
    "0. Exit",
];

/// A numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Print the seat map.
    ShowSeats,
    /// Buy one ticket.
    BuyTicket,
    /// Print occupancy and income.
    Statistics,
    /// Leave the session.
    Exit,
}

impl MenuChoice {
    /// Maps a typed number onto a menu entry.
    ///
    /// Both `0` and `4` exit.
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::ShowSeats),
            2 => Some(Self::BuyTicket),
            3 => Some(Self::Statistics),
            0 | 4 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One run of the interactive program over an input and an output.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    format: OutputFormat,
    formatter: Box<dyn OutputFormatter>,
    pricing: PricingPolicy,
    logger: Logger,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading answers from `input` and writing to `output`.
    pub fn new(
        input: R,
        output: W,
        format: OutputFormat,
        pricing: PricingPolicy,
        logger: Logger,
    ) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            format,
            formatter: format.create_formatter(),
            pricing,
            logger,
        }
    }

    /// Runs the session to completion.
    ///
    /// With `dimensions` set the room is created directly; otherwise the user
    /// is asked for it. Returns the final room, or `None` if the input ended
    /// before a room was created.
    ///
    /// # Errors
    ///
    /// Returns an error if the preset dimensions are invalid, or reading or
    /// writing fails.
    pub fn run(
        mut self,
        dimensions: Option<(i64, i64)>,
    ) -> Result<Option<SeatInventory>, CliError> {
        let inventory = match dimensions {
            Some((rows, seats_per_row)) => {
                SeatInventory::with_pricing(rows, seats_per_row, self.pricing)?
            }
            None => match self.create_room()? {
                Some(inventory) => inventory,
                None => return Ok(None),
            },
        };

        self.logger.debug(&format!(
            "room ready: {} rows x {} seats",
            inventory.rows(),
            inventory.seats_per_row()
        ));

        let mut inventory = inventory;
        self.menu_loop(&mut inventory)?;
        Ok(Some(inventory))
    }

    fn create_room(&mut self) -> Result<Option<SeatInventory>, CliError> {
        self.section("ROOM DETAILS")?;

        loop {
            let Some(rows) = self.prompter.ask_number_until_valid(
                "Enter the number of rows:",
                "This is not a whole number. Enter the number of rows:",
            )?
            else {
                return Ok(None);
            };
            let Some(seats_per_row) = self.prompter.ask_number_until_valid(
                "Enter the number of seats in each row:",
                "This is not a whole number. Enter the number of seats in each row:",
            )?
            else {
                return Ok(None);
            };

            match SeatInventory::with_pricing(rows, seats_per_row, self.pricing) {
                Ok(inventory) => return Ok(Some(inventory)),
                Err(e) if e.is_invalid_dimension() => {
                    self.logger.debug(&format!("rejected room: {e}"));
                    self.prompter
                        .say("Wrong input! Rows and seats must be positive numbers.")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn menu_loop(&mut self, inventory: &mut SeatInventory) -> Result<(), CliError> {
        loop {
            self.prompter.blank()?;
            for line in MENU {
                self.prompter.say(line)?;
            }

            let Some(number) = self
                .prompter
                .ask_number_until_valid("", "Wrong input. Please choose a valid option.")?
            else {
                return Ok(());
            };

            match MenuChoice::from_number(number) {
                Some(MenuChoice::ShowSeats) => self.show_seats(inventory)?,
                Some(MenuChoice::BuyTicket) => self.buy_ticket(inventory)?,
                Some(MenuChoice::Statistics) => self.show_statistics(inventory)?,
                Some(MenuChoice::Exit) => return Ok(()),
                None => self.prompter.say("Wrong input!")?,
            }
        }
    }

    fn show_seats(&mut self, inventory: &SeatInventory) -> Result<(), CliError> {
        self.section("CURRENT STATUS")?;
        let rendered = self.formatter.format_snapshot(&inventory.snapshot())?;
        self.prompter.say(&rendered)?;
        Ok(())
    }

    fn show_statistics(&mut self, inventory: &SeatInventory) -> Result<(), CliError> {
        self.section("STATISTICS")?;
        let rendered = self.formatter.format_metrics(&inventory.metrics())?;
        self.prompter.say(&rendered)?;
        Ok(())
    }

    fn buy_ticket(&mut self, inventory: &mut SeatInventory) -> Result<(), CliError> {
        self.section("BUY TICKET")?;

        if inventory.is_sold_out() {
            self.prompter.say("Sorry, all seats are sold out.")?;
            return Ok(());
        }

        loop {
            let Some(row) = self.ask_index("Enter a row number:", "row")? else {
                return Ok(());
            };
            let Some(seat) = self.ask_index("Enter a seat number in that row:", "seat")? else {
                return Ok(());
            };

            match inventory.sell_ticket(row, seat) {
                Ok(purchase) => {
                    self.logger.info(&format!(
                        "sold row {} seat {} for ${}",
                        purchase.row, purchase.seat, purchase.price
                    ));
                    let rendered = self.formatter.format_purchase(&purchase)?;
                    self.prompter.say(&rendered)?;
                    return Ok(());
                }
                Err(e) if e.is_out_of_range() => {
                    self.logger.debug(&format!("rejected purchase: {e}"));
                    self.prompter.say(&format!(
                        "Wrong input! Choose a row from 1 to {} and a seat from 1 to {}.",
                        inventory.rows(),
                        inventory.seats_per_row()
                    ))?;
                }
                Err(e) if e.is_already_reserved() => {
                    self.logger.debug(&format!("rejected purchase: {e}"));
                    self.prompter
                        .say("That ticket has already been purchased! Choose another seat.")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Asks for a row or seat number. `None` means return to the menu.
    fn ask_index(&mut self, prompt: &str, what: &str) -> Result<Option<i64>, CliError> {
        match self.prompter.ask_number(prompt)? {
            Reply::Number(value) => Ok(Some(value)),
            Reply::Invalid => {
                self.prompter
                    .say(&format!("Please enter a valid {what} number."))?;
                Ok(None)
            }
            Reply::Closed => Ok(None),
        }
    }

    fn section(&mut self, title: &str) -> Result<(), CliError> {
        if self.format == OutputFormat::Human {
            self.prompter.say(&banner(title))?;
        }
        Ok(())
    }
}
