//! Environment variable handling for configuration overrides.
//!
//! This module provides support for CINEMA_* environment variables that
//! override configuration file values.

use crate::config::schema::{Config, PricingConfig};
use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

/// Default number of rows.
pub const ROWS_ENV: &str = "CINEMA_ROWS";
/// Default number of seats in each row.
pub const SEATS_PER_ROW_ENV: &str = "CINEMA_SEATS_PER_ROW";
/// Standard ticket price.
pub const STANDARD_PRICE_ENV: &str = "CINEMA_STANDARD_PRICE";
/// Premium ticket price.
pub const PREMIUM_PRICE_ENV: &str = "CINEMA_PREMIUM_PRICE";
/// Capacity above which split pricing applies.
pub const CAPACITY_THRESHOLD_ENV: &str = "CINEMA_CAPACITY_THRESHOLD";
/// Output format (`human` or `json`).
pub const OUTPUT_FORMAT_ENV: &str = "CINEMA_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use cinema::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value cannot be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_room_overrides(config)?;
        Self::apply_pricing_overrides(config)?;

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse(OUTPUT_FORMAT_ENV, &format)?);
        }

        Ok(())
    }

    fn apply_room_overrides(config: &mut Config) -> Result<()> {
        let mut room = config.room.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(rows) = env::var(ROWS_ENV) {
            room.rows = Some(Self::parse(ROWS_ENV, &rows)?);
            modified = true;
        }

        if let Ok(seats) = env::var(SEATS_PER_ROW_ENV) {
            room.seats_per_row = Some(Self::parse(SEATS_PER_ROW_ENV, &seats)?);
            modified = true;
        }

        if modified {
            config.room = Some(room);
        }

        Ok(())
    }

    fn apply_pricing_overrides(config: &mut Config) -> Result<()> {
        let mut pricing: PricingConfig = config.pricing.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(price) = env::var(STANDARD_PRICE_ENV) {
            pricing.standard_price = Some(Self::parse(STANDARD_PRICE_ENV, &price)?);
            modified = true;
        }

        if let Ok(price) = env::var(PREMIUM_PRICE_ENV) {
            pricing.premium_price = Some(Self::parse(PREMIUM_PRICE_ENV, &price)?);
            modified = true;
        }

        if let Ok(threshold) = env::var(CAPACITY_THRESHOLD_ENV) {
            pricing.capacity_threshold = Some(Self::parse(CAPACITY_THRESHOLD_ENV, &threshold)?);
            modified = true;
        }

        if modified {
            config.pricing = Some(pricing);
        }

        Ok(())
    }

    /// Parse a value, reporting the variable name on failure.
    fn parse<T: FromStr>(field: &str, value: &str) -> Result<T> {
        value.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Invalid value: '{value}'"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use serial_test::serial;

    const ALL_VARS: [&str; 6] = [
        ROWS_ENV,
        SEATS_PER_ROW_ENV,
        STANDARD_PRICE_ENV,
        PREMIUM_PRICE_ENV,
        CAPACITY_THRESHOLD_ENV,
        OUTPUT_FORMAT_ENV,
    ];

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_apply_overrides_no_env_vars() {
        clear_env();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_room_overrides() {
        clear_env();
        env::set_var(ROWS_ENV, "6");
        env::set_var(SEATS_PER_ROW_ENV, " 11 ");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.room_dimensions(), Some((6, 11)));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_pricing_overrides_keep_file_values() {
        clear_env();
        env::set_var(PREMIUM_PRICE_ENV, "15");

        let mut config = Config {
            pricing: Some(PricingConfig {
                standard_price: Some(9),
                ..Default::default()
            }),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();

        let policy = config.pricing_policy();
        assert_eq!(policy.standard_price, 9);
        assert_eq!(policy.premium_price, 15);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_value_is_validation_error() {
        clear_env();
        env::set_var(STANDARD_PRICE_ENV, "ten");

        let mut config = Config::default();
        let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, STANDARD_PRICE_ENV),
            other => panic!("unexpected error: {other}"),
        }

        clear_env();
    }

    #[test]
    #[serial]
    fn test_output_format_override() {
        clear_env();
        env::set_var(OUTPUT_FORMAT_ENV, "JSON");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Json));

        clear_env();
    }
}
