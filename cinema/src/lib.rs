#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cinema
//!
//! A library for managing the seat inventory and ticket sales of a single
//! cinema room.
//!
//! The room is a rectangular grid of seats. Seats start out available, are
//! reserved by purchasing a ticket, and are priced per row according to a
//! [`PricingPolicy`]. Occupancy and income figures are derived from the grid
//! on demand.
//!
//! ## Core Types
//!
//! - [`SeatInventory`]: The seat grid and its operations
//! - [`SeatState`] and [`Snapshot`]: Availability views of the grid
//! - [`PricingPolicy`]: Per-row ticket pricing
//! - [`Metrics`]: Occupancy and income figures
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cinema::SeatInventory;
//!
//! let mut room = SeatInventory::new(2, 3).unwrap();
//! assert_eq!(room.purchase(1, 1).unwrap(), 10);
//! assert!(room.purchase(1, 1).is_err());
//!
//! let metrics = room.metrics();
//! assert_eq!(metrics.tickets_sold, 1);
//! assert_eq!(metrics.potential_total_income, 60);
//! ```

pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod metrics;
pub mod output;
pub mod pricing;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use inventory::{Purchase, SeatInventory, SeatState, Snapshot};
pub use logging::{init_logger, LogLevel, Logger};
pub use metrics::Metrics;
pub use pricing::PricingPolicy;
