//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `PLATEMATCH_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::catalog::CatalogCache;

/// Dataset locations and cache sizing loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PLATEMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Raw restaurant CSV. Default: `./data/restaurants_raw.csv`.
    pub raw_path: PathBuf,

    /// Canonical CSV produced by preprocessing. Default: `./data/restaurants_processed.csv`.
    pub processed_path: PathBuf,

    /// Max canonical datasets kept in memory. Default: `8`.
    pub cache_capacity: u64,
}

/// Default raw dataset path used when `PLATEMATCH_RAW_PATH` is not set.
pub const DEFAULT_RAW_PATH: &str = "./data/restaurants_raw.csv";

/// Default canonical dataset path used when `PLATEMATCH_PROCESSED_PATH` is not set.
pub const DEFAULT_PROCESSED_PATH: &str = "./data/restaurants_processed.csv";

impl Default for Config {
    fn default() -> Self {
        Self {
            raw_path: PathBuf::from(DEFAULT_RAW_PATH),
            processed_path: PathBuf::from(DEFAULT_PROCESSED_PATH),
            cache_capacity: CatalogCache::DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    const ENV_RAW_PATH: &'static str = "PLATEMATCH_RAW_PATH";
    const ENV_PROCESSED_PATH: &'static str = "PLATEMATCH_PROCESSED_PATH";
    const ENV_CACHE_CAPACITY: &'static str = "PLATEMATCH_CACHE_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let raw_path = parse_path_from_env(Self::ENV_RAW_PATH, defaults.raw_path);
        let processed_path =
            parse_path_from_env(Self::ENV_PROCESSED_PATH, defaults.processed_path);
        let cache_capacity =
            parse_u64_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity)?;

        Ok(Self {
            raw_path,
            processed_path,
            cache_capacity,
        })
    }

    /// Validates paths (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.raw_path.exists() && !self.raw_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.raw_path.clone(),
            });
        }

        if self.processed_path.exists() && !self.processed_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.processed_path.clone(),
            });
        }

        if self.cache_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_CACHE_CAPACITY,
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }

        Ok(())
    }
}

pub(crate) fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
    env::var(var_name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or(default)
}

pub(crate) fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
    env::var(var_name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn parse_string_from_env(var_name: &str, default: String) -> String {
    parse_optional_string_from_env(var_name).unwrap_or(default)
}

pub(crate) fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
    match parse_optional_u64_from_env(var_name)? {
        Some(value) => Ok(value),
        None => Ok(default),
    }
}

pub(crate) fn parse_optional_u64_from_env(
    var_name: &'static str,
) -> Result<Option<u64>, ConfigError> {
    parse_optional_string_from_env(var_name)
        .map(|value| {
            value.parse().map_err(|e| ConfigError::IntParseError {
                name: var_name,
                value: value.clone(),
                source: e,
            })
        })
        .transpose()
}

pub(crate) fn parse_f64_from_env(var_name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match parse_optional_string_from_env(var_name) {
        Some(value) => value.parse().map_err(|e| ConfigError::FloatParseError {
            name: var_name,
            value: value.clone(),
            source: e,
        }),
        None => Ok(default),
    }
}

pub(crate) fn flag_from_env(var_name: &str) -> bool {
    parse_optional_string_from_env(var_name).is_some()
}
