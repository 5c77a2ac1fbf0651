//! Configuration system for cinema.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `cinema.yaml` files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (CINEMA_*)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. Private project config (`cinema.local.yaml`)
//! 5. Project config (`cinema.yaml`)
//! 6. User config (`~/.cinema/config.yaml`)
//! 7. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use cinema::config::{Config, ConfigBuilder, PricingConfig};
//!
//! let custom = Config {
//!     pricing: Some(PricingConfig {
//!         standard_price: Some(8),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! let policy = config.pricing_policy();
//! assert_eq!(policy.standard_price, 8);
//! assert_eq!(policy.premium_price, 12);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, PricingConfig, RoomConfig};
pub use validator::ConfigValidator;
