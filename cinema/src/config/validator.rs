//! Configuration validation.

use crate::config::schema::{Config, PricingConfig, RoomConfig};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use cinema::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref room) = config.room {
            Self::validate_room(room)?;
        }

        if let Some(ref pricing) = config.pricing {
            Self::validate_pricing(pricing)?;
        }

        Ok(())
    }

    fn validate_room(room: &RoomConfig) -> Result<()> {
        for (field, value) in [
            ("room.rows", room.rows),
            ("room.seats_per_row", room.seats_per_row),
        ] {
            if let Some(value) = value {
                if value <= 0 {
                    return Err(Error::Validation {
                        field: field.into(),
                        message: format!("must be a positive integer, got {value}"),
                    });
                }
            }
        }

        Ok(())
    }

    fn validate_pricing(pricing: &PricingConfig) -> Result<()> {
        for (field, value) in [
            ("pricing.standard_price", pricing.standard_price),
            ("pricing.premium_price", pricing.premium_price),
        ] {
            if value == Some(0) {
                return Err(Error::Validation {
                    field: field.into(),
                    message: "price must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_room() {
        let config = Config {
            room: Some(RoomConfig {
                rows: Some(1),
                seats_per_row: Some(40),
            }),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_non_positive_room_rejected() {
        for (rows, seats) in [(Some(0), Some(5)), (Some(5), Some(-2))] {
            let config = Config {
                room: Some(RoomConfig {
                    rows,
                    seats_per_row: seats,
                }),
                ..Default::default()
            };
            let err = ConfigValidator::validate(&config).unwrap_err();
            assert!(err.to_string().contains("must be a positive integer"));
        }
    }

    #[test]
    fn test_zero_price_rejected() {
        let config = Config {
            pricing: Some(PricingConfig {
                premium_price: Some(0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, "pricing.premium_price"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_premium_may_be_cheaper() {
        let config = Config {
            pricing: Some(PricingConfig {
                standard_price: Some(12),
                premium_price: Some(10),
                capacity_threshold: Some(0),
            }),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }
}
