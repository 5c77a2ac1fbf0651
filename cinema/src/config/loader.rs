//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading cinema configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of a project configuration.
pub const PROJECT_CONFIG_FILE: &str = "cinema.yaml";

/// File name of a private (uncommitted) project configuration.
pub const LOCAL_CONFIG_FILE: &str = "cinema.local.yaml";

/// Precedence of the user configuration file.
pub const USER_PRECEDENCE: u8 = 1;

/// Precedence of `cinema.yaml`.
pub const PROJECT_PRECEDENCE: u8 = 2;

/// Precedence of `cinema.local.yaml`.
pub const LOCAL_PRECEDENCE: u8 = 3;

/// Precedence of a file named explicitly by the caller.
pub const EXPLICIT_PRECEDENCE: u8 = 4;

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use cinema::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new(".")).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.cinema/config.yaml` (precedence 1)
    /// 2. Project `cinema.yaml` walking up from `working_dir` (precedence 2)
    /// 3. Project `cinema.local.yaml` next to it (precedence 3)
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config()? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);

        // Higher precedence last for easier merging
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load the user configuration file, if the home directory has one.
    fn load_user_config() -> Result<Option<ConfigSource>> {
        let Some(config_path) = Self::user_config_path() else {
            log::debug!("no home directory, skipping user configuration");
            return Ok(None);
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: USER_PRECEDENCE,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either `cinema.yaml` or
    /// `cinema.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [
                (PROJECT_CONFIG_FILE, PROJECT_PRECEDENCE),
                (LOCAL_CONFIG_FILE, LOCAL_PRECEDENCE),
            ] {
                let path = current.join(name);
                if path.exists() {
                    let config = Self::load_file(&path)?;
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load a file named explicitly by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or the
    /// YAML is invalid.
    pub fn load_explicit(path: &Path) -> Result<ConfigSource> {
        let config = Self::load_file(path)?;
        Ok(ConfigSource {
            path: path.to_path_buf(),
            precedence: EXPLICIT_PRECEDENCE,
            config,
        })
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        log::debug!("loading configuration from {}", path.display());

        let contents = fs::read_to_string(path)?;

        // An empty file is a valid, empty configuration
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Get the user config file path, `~/.cinema/config.yaml`.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".cinema").join("config.yaml"))
    }
}
