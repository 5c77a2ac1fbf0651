//! Error types for the cinema library.
//!
//! This module provides the error hierarchy for all operations in the
//! cinema library, using `thiserror` for ergonomic error handling.
//!
//! The seat inventory itself only ever fails with [`Error::InvalidDimension`],
//! [`Error::OutOfRange`] or [`Error::AlreadyReserved`]. All three are expected,
//! recoverable conditions that a driver answers by asking the user again.

use thiserror::Error;

/// Result type alias for operations that may fail with a cinema error.
///
/// # Examples
///
/// ```
/// use cinema::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(10)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cinema library.
#[derive(Debug, Error)]
pub enum Error {
    /// A room dimension was zero, negative, or too large.
    #[error("invalid {field} {value}: must be a positive integer")]
    InvalidDimension {
        /// The dimension that was rejected (`rows` or `seats_per_row`).
        field: String,
        /// The rejected value.
        value: i64,
    },

    /// A row or seat number fell outside the room.
    #[error("{field} {value} is out of range: must be between 1 and {max}")]
    OutOfRange {
        /// The index that was rejected (`row` or `seat`).
        field: String,
        /// The rejected value.
        value: i64,
        /// The largest valid value.
        max: usize,
    },

    /// The seat has already been sold.
    #[error("seat {seat} in row {row} is already reserved")]
    AlreadyReserved {
        /// 1-based row number.
        row: usize,
        /// 1-based seat number.
        seat: usize,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A serialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error is a rejected room dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinema::SeatInventory;
    ///
    /// let err = SeatInventory::new(0, 5).unwrap_err();
    /// assert!(err.is_invalid_dimension());
    /// ```
    #[must_use]
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, Self::InvalidDimension { .. })
    }

    /// Check if error is a row or seat number outside the room.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Check if error is a purchase of an already sold seat.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinema::SeatInventory;
    ///
    /// let mut room = SeatInventory::new(1, 1).unwrap();
    /// room.purchase(1, 1).unwrap();
    /// assert!(room.purchase(1, 1).unwrap_err().is_already_reserved());
    /// ```
    #[must_use]
    pub fn is_already_reserved(&self) -> bool {
        matches!(self, Self::AlreadyReserved { .. })
    }
}
