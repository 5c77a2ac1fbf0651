//! Ticket pricing by row.
//!
//! Small rooms charge a single standard price. Rooms above the capacity
//! threshold charge a premium price for rows in the "back half".
//!
//! The back half starts after row `total_seats / 2`. The boundary is derived
//! from the total number of seats rather than the number of rows, so for
//! rooms with more seats per row than rows no row ever reaches it and every
//! ticket sells at the standard price.

use serde::{Deserialize, Serialize};

/// Per-row pricing rules for a cinema room.
///
/// # Examples
///
/// ```
/// use cinema::PricingPolicy;
///
/// let policy = PricingPolicy::default();
///
/// // 25 seats: at or below the threshold, everything is standard price
/// assert_eq!(policy.price_for_row(5, 25), 10);
///
/// // 60 seats in a single column: rows above 30 are premium
/// assert_eq!(policy.price_for_row(30, 60), 10);
/// assert_eq!(policy.price_for_row(31, 60), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Price of a front half seat, and of every seat in a small room.
    pub standard_price: u32,
    /// Price of a back half seat in a large room.
    pub premium_price: u32,
    /// Rooms with more seats than this use split pricing.
    pub capacity_threshold: usize,
}

impl PricingPolicy {
    /// Default price of a standard ticket, in dollars.
    pub const DEFAULT_STANDARD_PRICE: u32 = 10;

    /// Default price of a premium ticket, in dollars.
    pub const DEFAULT_PREMIUM_PRICE: u32 = 12;

    /// Default capacity above which split pricing applies.
    pub const DEFAULT_CAPACITY_THRESHOLD: usize = 50;

    /// Returns `true` if a room of this size uses split pricing.
    #[must_use]
    pub const fn is_split(&self, total_seats: usize) -> bool {
        total_seats > self.capacity_threshold
    }

    /// Returns the last row number still sold at the standard price in a
    /// split-priced room.
    #[must_use]
    pub const fn half_boundary(total_seats: usize) -> usize {
        total_seats / 2
    }

    /// Returns the price of a ticket in the given 1-based row.
    ///
    /// This is a pure function of the row number and the room capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinema::PricingPolicy;
    ///
    /// let policy = PricingPolicy::default();
    ///
    /// // 10x10 room: boundary is row 50, so all ten rows are standard
    /// assert_eq!(policy.price_for_row(1, 100), 10);
    /// assert_eq!(policy.price_for_row(10, 100), 10);
    /// ```
    #[must_use]
    pub const fn price_for_row(&self, row: usize, total_seats: usize) -> u32 {
        if self.is_split(total_seats) && row > Self::half_boundary(total_seats) {
            self.premium_price
        } else {
            self.standard_price
        }
    }
}

impl PricingPolicy {
    /// Returns the income of a fully sold room, without building its grid.
    ///
    /// Saturates at `u64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinema::PricingPolicy;
    ///
    /// let policy = PricingPolicy::default();
    /// assert_eq!(policy.potential_income(60, 1), 660);
    /// assert_eq!(policy.potential_income(2, 3), 60);
    /// ```
    #[must_use]
    pub fn potential_income(&self, rows: usize, seats_per_row: usize) -> u64 {
        let total_seats = rows.saturating_mul(seats_per_row);
        let standard_rows = if self.is_split(total_seats) {
            rows.min(Self::half_boundary(total_seats))
        } else {
            rows
        };
        let premium_rows = rows - standard_rows;

        let per_row = |count: usize, price: u32| {
            u128::from(price)
                .saturating_mul(count as u128)
                .saturating_mul(seats_per_row as u128)
        };
        let income = per_row(standard_rows, self.standard_price)
            .saturating_add(per_row(premium_rows, self.premium_price));
        u64::try_from(income).unwrap_or(u64::MAX)
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            standard_price: Self::DEFAULT_STANDARD_PRICE,
            premium_price: Self::DEFAULT_PREMIUM_PRICE,
            capacity_threshold: Self::DEFAULT_CAPACITY_THRESHOLD,
        }
    }
}
