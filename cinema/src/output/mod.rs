//! Output formatting module for seat maps and sales figures.
//!
//! This module renders inventory views for a driver to print, either as
//! human-readable text or as JSON documents.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::inventory::room_capacity;
use crate::{Error, Metrics, PricingPolicy, Result, SeatInventory, Snapshot};

pub use crate::inventory::Purchase;
pub use formatters::{HumanFormatter, JsonFormatter};

/// Width of the boxed section header drawn by [`banner`].
pub const BANNER_WIDTH: usize = 46;

/// Per-row ticket prices of a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceList {
    /// Seats in each row.
    pub seats_per_row: usize,
    /// Price of each row, front to back.
    pub row_prices: Vec<u32>,
    /// Income if every seat were sold.
    pub potential_total_income: u64,
}

impl PriceList {
    /// Builds the price list of a room.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinema::SeatInventory;
    /// use cinema::output::PriceList;
    ///
    /// let room = SeatInventory::new(60, 1).unwrap();
    /// let prices = PriceList::for_room(&room);
    /// assert_eq!(prices.row_prices[29], 10);
    /// assert_eq!(prices.row_prices[30], 12);
    /// assert_eq!(prices.potential_total_income, 660);
    /// ```
    #[must_use]
    pub fn for_room(inventory: &SeatInventory) -> Self {
        Self {
            seats_per_row: inventory.seats_per_row(),
            row_prices: inventory.row_prices(),
            potential_total_income: inventory
                .pricing()
                .potential_income(inventory.rows(), inventory.seats_per_row()),
        }
    }

    /// Builds the price list of a room of the given size without creating
    /// its seat grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the dimensions would be
    /// rejected by [`SeatInventory::new`], or the list of rows cannot be
    /// allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinema::output::PriceList;
    /// use cinema::PricingPolicy;
    ///
    /// let prices = PriceList::for_dimensions(2, 30, &PricingPolicy::default()).unwrap();
    /// assert_eq!(prices.row_prices, vec![10, 10]);
    /// assert_eq!(prices.potential_total_income, 600);
    /// ```
    pub fn for_dimensions(rows: i64, seats_per_row: i64, pricing: &PricingPolicy) -> Result<Self> {
        let (row_count, seat_count, total) = room_capacity(rows, seats_per_row)?;

        let mut row_prices = Vec::new();
        row_prices
            .try_reserve_exact(row_count)
            .map_err(|_| Error::InvalidDimension {
                field: "rows".into(),
                value: rows,
            })?;
        row_prices.extend((1..=row_count).map(|row| pricing.price_for_row(row, total)));

        Ok(Self {
            seats_per_row: seat_count,
            row_prices,
            potential_total_income: pricing.potential_income(row_count, seat_count),
        })
    }
}

/// Trait for rendering inventory views into different output formats.
pub trait OutputFormatter {
    /// Format the seat grid.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_snapshot(&self, snapshot: &Snapshot) -> Result<String>;

    /// Format occupancy and income figures.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_metrics(&self, metrics: &Metrics) -> Result<String>;

    /// Format the confirmation of a purchase.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_purchase(&self, purchase: &Purchase) -> Result<String>;

    /// Format a per-row price list.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_prices(&self, prices: &PriceList) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// JSON documents.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{s}' (expected human or json)"),
            }),
        }
    }
}

/// Draws a boxed section header with the title centred.
///
/// # Examples
///
/// ```
/// use cinema::output::banner;
///
/// let header = banner("BUY TICKET");
/// assert_eq!(header.lines().count(), 5);
/// assert!(header.lines().nth(2).unwrap().contains("BUY TICKET"));
/// ```
#[must_use]
pub fn banner(title: &str) -> String {
    let inner = BANNER_WIDTH - 2;
    let border = "*".repeat(BANNER_WIDTH);
    let blank = format!("*{}*", " ".repeat(inner));
    let title = format!("*{title:^inner$}*");

    [
        border.as_str(),
        blank.as_str(),
        title.as_str(),
        blank.as_str(),
        border.as_str(),
    ]
    .join("\n")
}
