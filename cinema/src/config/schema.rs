//! Configuration schema definitions.
//!
//! This module defines the configuration structure for cinema: default
//! room dimensions, ticket pricing, and the output format.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::pricing::PricingPolicy;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered on top of
/// each other.
///
/// # Examples
///
/// ```
/// use cinema::config::{Config, RoomConfig};
///
/// let config: Config = serde_yaml::from_str("room:\n  rows: 8\n  seats_per_row: 12\n").unwrap();
/// assert_eq!(config.room_dimensions(), Some((8, 12)));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default room dimensions.
    pub room: Option<RoomConfig>,

    /// Ticket pricing settings.
    pub pricing: Option<PricingConfig>,

    /// Output format for seat maps and metrics.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the configured room dimensions if both are set.
    #[must_use]
    pub fn room_dimensions(&self) -> Option<(i64, i64)> {
        let room = self.room.as_ref()?;
        Some((room.rows?, room.seats_per_row?))
    }

    /// Returns the pricing policy, filling unset values with defaults.
    #[must_use]
    pub fn pricing_policy(&self) -> PricingPolicy {
        let defaults = PricingPolicy::default();
        let Some(pricing) = &self.pricing else {
            return defaults;
        };

        PricingPolicy {
            standard_price: pricing.standard_price.unwrap_or(defaults.standard_price),
            premium_price: pricing.premium_price.unwrap_or(defaults.premium_price),
            capacity_threshold: pricing
                .capacity_threshold
                .unwrap_or(defaults.capacity_threshold),
        }
    }

    /// Returns the configured output format, or human-readable output.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Default room dimensions.
///
/// Values are kept signed so that invalid input can be reported as an
/// invalid dimension instead of a parse failure.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RoomConfig {
    /// Number of rows.
    pub rows: Option<i64>,

    /// Number of seats in each row.
    pub seats_per_row: Option<i64>,
}

/// Ticket pricing settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// Price of a standard ticket, in dollars.
    pub standard_price: Option<u32>,

    /// Price of a back half ticket in a large room, in dollars.
    pub premium_price: Option<u32>,

    /// Rooms with more seats than this use split pricing.
    pub capacity_threshold: Option<usize>,
}
