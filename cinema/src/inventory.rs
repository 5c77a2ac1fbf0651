//! Seat inventory for a single cinema room.
//!
//! This module provides the seat grid, its availability views, and the
//! purchase operation, which is the only way a seat changes state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::metrics::Metrics;
use crate::pricing::PricingPolicy;

#[cfg(test)]
mod proptests;

/// A successful ticket purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    /// 1-based row number.
    pub row: usize,
    /// 1-based seat number.
    pub seat: usize,
    /// Price paid, in dollars.
    pub price: u32,
}

/// The state of a single seat.
///
/// Seats start out [`SeatState::Available`] and become
/// [`SeatState::Reserved`] when a ticket is bought. There is no way back.
///
/// # Examples
///
/// ```
/// use cinema::SeatState;
///
/// assert_eq!(SeatState::Available.marker(), "A");
/// assert_eq!(SeatState::Reserved.to_string(), "R");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeatState {
    /// The seat can be bought.
    #[default]
    #[serde(rename = "A")]
    Available,
    /// The seat has been sold.
    #[serde(rename = "R")]
    Reserved,
}

impl SeatState {
    /// Returns the one-letter marker for this state.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Available => "A",
            Self::Reserved => "R",
        }
    }

    /// Returns `true` if the seat has been sold.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Reserved)
    }
}

impl fmt::Display for SeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// A point-in-time copy of the seat grid.
///
/// Rows are ordered front to back, seats left to right. Serializes as an
/// array of arrays of `"A"` / `"R"` markers.
///
/// # Examples
///
/// ```
/// use cinema::{SeatInventory, SeatState};
///
/// let mut room = SeatInventory::new(2, 2).unwrap();
/// room.purchase(2, 1).unwrap();
///
/// let snapshot = room.snapshot();
/// assert_eq!(snapshot.get(2, 1), Some(SeatState::Reserved));
/// assert_eq!(snapshot.markers(), vec![vec!["A", "A"], vec!["R", "A"]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    rows: Vec<Vec<SeatState>>,
}

impl Snapshot {
    /// Returns the rows of the grid.
    #[must_use]
    pub fn rows(&self) -> &[Vec<SeatState>] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the state of a seat by 1-based row and seat number.
    ///
    /// Returns `None` if either number is outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, seat: usize) -> Option<SeatState> {
        let row = self.rows.get(row.checked_sub(1)?)?;
        row.get(seat.checked_sub(1)?).copied()
    }

    /// Returns the grid as one-letter markers.
    #[must_use]
    pub fn markers(&self) -> Vec<Vec<&'static str>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|state| state.marker()).collect())
            .collect()
    }
}

/// The seat grid of a cinema room.
///
/// Dimensions are fixed at creation. Row and seat numbers used by callers
/// are 1-based. The inventory is an owned value; mutation requires `&mut`,
/// so there is always a single writer.
///
/// # Examples
///
/// ```
/// use cinema::SeatInventory;
///
/// let mut room = SeatInventory::new(2, 3).unwrap();
/// assert_eq!(room.total_seats(), 6);
///
/// let price = room.purchase(1, 1).unwrap();
/// assert_eq!(price, 10);
/// assert!(room.purchase(1, 1).unwrap_err().is_already_reserved());
/// assert!(room.purchase(3, 1).unwrap_err().is_out_of_range());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatInventory {
    rows: usize,
    seats_per_row: usize,
    seats: Vec<SeatState>,
    pricing: PricingPolicy,
}

impl SeatInventory {
    /// Creates a room with every seat available, using the default pricing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is not a
    /// positive integer, or if the room would be too large to address.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinema::SeatInventory;
    ///
    /// assert!(SeatInventory::new(5, 5).is_ok());
    /// assert!(SeatInventory::new(0, 5).is_err());
    /// assert!(SeatInventory::new(5, -1).is_err());
    /// ```
    pub fn new(rows: i64, seats_per_row: i64) -> Result<Self> {
        Self::with_pricing(rows, seats_per_row, PricingPolicy::default())
    }

    /// Creates a room with every seat available and the given pricing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is not a
    /// positive integer, or if the room would be too large to address.
    pub fn with_pricing(rows: i64, seats_per_row: i64, pricing: PricingPolicy) -> Result<Self> {
        let (row_count, seat_count, total) = room_capacity(rows, seats_per_row)?;

        let mut seats = Vec::new();
        seats
            .try_reserve_exact(total)
            .map_err(|_| too_large(seats_per_row))?;
        seats.resize(total, SeatState::Available);

        Ok(Self {
            rows: row_count,
            seats_per_row: seat_count,
            seats,
            pricing,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of seats in each row.
    #[must_use]
    pub const fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    /// Returns the capacity of the room.
    #[must_use]
    pub const fn total_seats(&self) -> usize {
        self.rows * self.seats_per_row
    }

    /// Returns the pricing policy of the room.
    #[must_use]
    pub const fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    /// Returns the ticket price for a 1-based row.
    #[must_use]
    pub const fn price_for_row(&self, row: usize) -> u32 {
        self.pricing.price_for_row(row, self.total_seats())
    }

    /// Returns the ticket price of every row, front to back.
    #[must_use]
    pub fn row_prices(&self) -> Vec<u32> {
        (1..=self.rows).map(|row| self.price_for_row(row)).collect()
    }

    /// Returns the state of a seat by 1-based row and seat number.
    ///
    /// Returns `None` if either number is outside the room.
    #[must_use]
    pub fn seat_state(&self, row: usize, seat: usize) -> Option<SeatState> {
        if row == 0 || row > self.rows || seat == 0 || seat > self.seats_per_row {
            return None;
        }
        Some(self.seats[self.offset(row, seat)])
    }

    /// Returns the number of seats still for sale.
    #[must_use]
    pub fn available_seats(&self) -> usize {
        self.seats.iter().filter(|state| !state.is_reserved()).count()
    }

    /// Returns `true` if every seat has been sold.
    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        self.seats.iter().all(|state| state.is_reserved())
    }

    /// Returns a copy of the current seat grid.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self
                .seats
                .chunks(self.seats_per_row)
                .map(<[SeatState]>::to_vec)
                .collect(),
        }
    }

    /// Buys the ticket for a seat and returns its price.
    ///
    /// On success exactly one seat changes from available to reserved. On
    /// failure the grid is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the row or seat number is outside the
    /// room, and [`Error::AlreadyReserved`] if the seat has already been sold.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinema::{SeatInventory, SeatState};
    ///
    /// let mut room = SeatInventory::new(3, 3).unwrap();
    /// room.purchase(2, 3).unwrap();
    /// assert_eq!(room.seat_state(2, 3), Some(SeatState::Reserved));
    /// assert_eq!(room.available_seats(), 8);
    /// ```
    pub fn purchase(&mut self, row: i64, seat: i64) -> Result<u32> {
        self.sell_ticket(row, seat).map(|purchase| purchase.price)
    }

    /// Buys the ticket for a seat like [`SeatInventory::purchase`], returning
    /// the validated seat together with its price.
    ///
    /// # Errors
    ///
    /// Same as [`SeatInventory::purchase`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cinema::SeatInventory;
    ///
    /// let mut room = SeatInventory::new(60, 1).unwrap();
    /// let ticket = room.sell_ticket(31, 1).unwrap();
    /// assert_eq!((ticket.row, ticket.seat, ticket.price), (31, 1, 12));
    /// ```
    pub fn sell_ticket(&mut self, row: i64, seat: i64) -> Result<Purchase> {
        let row = index_in_range("row", row, self.rows)?;
        let seat = index_in_range("seat", seat, self.seats_per_row)?;

        let offset = self.offset(row, seat);
        if self.seats[offset].is_reserved() {
            return Err(Error::AlreadyReserved { row, seat });
        }

        self.seats[offset] = SeatState::Reserved;
        Ok(Purchase {
            row,
            seat,
            price: self.price_for_row(row),
        })
    }

    /// Computes occupancy and income figures from the current grid.
    #[must_use]
    pub fn metrics(&self) -> Metrics {
        Metrics::compute(self)
    }

    /// Iterates over every seat as `(row, state)`, with 1-based row numbers.
    pub(crate) fn seats_by_row(&self) -> impl Iterator<Item = (usize, SeatState)> + '_ {
        self.seats
            .chunks(self.seats_per_row)
            .enumerate()
            .flat_map(|(index, row)| row.iter().map(move |state| (index + 1, *state)))
    }

    const fn offset(&self, row: usize, seat: usize) -> usize {
        (row - 1) * self.seats_per_row + (seat - 1)
    }
}

/// Validates room dimensions and returns `(rows, seats_per_row, total_seats)`.
///
/// The total must be addressable as a single allocation of seats.
pub(crate) fn room_capacity(rows: i64, seats_per_row: i64) -> Result<(usize, usize, usize)> {
    let row_count = positive_dimension("rows", rows)?;
    let seat_count = positive_dimension("seats_per_row", seats_per_row)?;

    let total = row_count
        .checked_mul(seat_count)
        .filter(|total| isize::try_from(*total).is_ok())
        .ok_or_else(|| too_large(seats_per_row))?;

    Ok((row_count, seat_count, total))
}

fn too_large(seats_per_row: i64) -> Error {
    Error::InvalidDimension {
        field: "seats_per_row".into(),
        value: seats_per_row,
    }
}

fn positive_dimension(field: &str, value: i64) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| Error::InvalidDimension {
            field: field.into(),
            value,
        })
}

fn index_in_range(field: &str, value: i64, max: usize) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|v| (1..=max).contains(v))
        .ok_or_else(|| Error::OutOfRange {
            field: field.into(),
            value,
            max,
        })
}
