//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, PricingConfig, RoomConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use cinema::config::{Config, ConfigMerger};
/// use cinema::output::OutputFormat;
///
/// let low = Config { output_format: Some(OutputFormat::Human), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Nested sections are merged field by field, so a file that only sets
    /// `pricing.premium_price` keeps the standard price from a lower layer.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_room) = source.room {
            target.room = Some(match &target.room {
                Some(target_room) => Self::merge_room(target_room, source_room),
                None => source_room.clone(),
            });
        }

        if let Some(ref source_pricing) = source.pricing {
            target.pricing = Some(match &target.pricing {
                Some(target_pricing) => Self::merge_pricing(target_pricing, source_pricing),
                None => source_pricing.clone(),
            });
        }
    }

    fn merge_room(target: &RoomConfig, source: &RoomConfig) -> RoomConfig {
        RoomConfig {
            rows: source.rows.or(target.rows),
            seats_per_row: source.seats_per_row.or(target.seats_per_row),
        }
    }

    fn merge_pricing(target: &PricingConfig, source: &PricingConfig) -> PricingConfig {
        PricingConfig {
            standard_price: source.standard_price.or(target.standard_price),
            premium_price: source.premium_price.or(target.premium_price),
            capacity_threshold: source.capacity_threshold.or(target.capacity_threshold),
        }
    }
}
