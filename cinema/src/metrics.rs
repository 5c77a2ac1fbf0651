//! Occupancy and income figures for a cinema room.

use serde::{Deserialize, Serialize};

use crate::inventory::SeatInventory;

/// Sales figures derived from a seat grid.
///
/// Every figure is recomputed from the grid on each call to
/// [`SeatInventory::metrics`]; nothing is tracked incrementally.
///
/// # Examples
///
/// ```
/// use cinema::SeatInventory;
///
/// let mut room = SeatInventory::new(2, 3).unwrap();
/// room.purchase(1, 1).unwrap();
/// room.purchase(2, 2).unwrap();
///
/// let metrics = room.metrics();
/// assert_eq!(metrics.tickets_sold, 2);
/// assert!((metrics.occupancy_percent - 100.0 / 3.0).abs() < 1e-9);
/// assert_eq!(metrics.current_income, 20);
/// assert_eq!(metrics.potential_total_income, 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Number of reserved seats.
    pub tickets_sold: usize,
    /// Capacity of the room.
    pub total_seats: usize,
    /// Share of reserved seats, from 0 to 100. Not rounded.
    pub occupancy_percent: f64,
    /// Sum of the prices of all reserved seats.
    pub current_income: u64,
    /// Sum of the prices of all seats, reserved or not.
    pub potential_total_income: u64,
}

impl Metrics {
    /// Computes the figures by scanning the whole grid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(inventory: &SeatInventory) -> Self {
        let mut tickets_sold = 0usize;
        let mut current_income = 0u64;
        let mut potential_total_income = 0u64;

        for (row, state) in inventory.seats_by_row() {
            let price = u64::from(inventory.price_for_row(row));
            if state.is_reserved() {
                tickets_sold += 1;
                current_income += price;
            }
            potential_total_income += price;
        }

        let total_seats = inventory.total_seats();
        let occupancy_percent = tickets_sold as f64 / total_seats as f64 * 100.0;

        Self {
            tickets_sold,
            total_seats,
            occupancy_percent,
            current_income,
            potential_total_income,
        }
    }

    /// Returns the number of seats still for sale.
    #[must_use]
    pub const fn seats_remaining(&self) -> usize {
        self.total_seats - self.tickets_sold
    }
}
