//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read when none is named explicitly.
pub const DEFAULT_CONFIG_PATH: &str = "routle.toml";

/// Environment variable overriding the dataset path.
pub const DATA_ENV_VAR: &str = "ROUTLE_DATA";

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct RoutleConfig {
    /// Path to the route dataset (GeoJSON or JSON route list).
    #[serde(default = "default_data_path")]
    data_path: PathBuf,

    /// Feature property holding the route id.
    #[serde(default = "default_id_property")]
    id_property: String,

    /// Feature property holding the route display name.
    #[serde(default = "default_name_property")]
    name_property: String,

    /// Seed for the target draw; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Colour guess bars and messages.
    #[serde(default = "default_color")]
    color: bool,
}

#[instrument]
fn default_data_path() -> PathBuf {
    PathBuf::from("routes.geojson")
}

#[instrument]
fn default_id_property() -> String {
    "route".to_string()
}

#[instrument]
fn default_name_property() -> String {
    "name".to_string()
}

#[instrument]
fn default_color() -> bool {
    true
}

impl Default for RoutleConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            id_property: default_id_property(),
            name_property: default_name_property(),
            seed: None,
            color: default_color(),
        }
    }
}

impl RoutleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(data_path = %config.data_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads the named config file, or the default one if it exists.
    ///
    /// An explicitly named file must exist. Without one, a missing
    /// [`DEFAULT_CONFIG_PATH`] means built-in defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies the [`DATA_ENV_VAR`] override, if set.
    #[instrument(skip(self))]
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(DATA_ENV_VAR) {
            Ok(path) if !path.is_empty() => {
                debug!(%path, "Data path overridden from environment");
                self.with_data_path(PathBuf::from(path))
            }
            _ => self,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
