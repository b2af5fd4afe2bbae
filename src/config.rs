//! Application configuration
//!
//! A single TOML file holds the order options and the logging setup. Every
//! section is optional, a missing file means defaults.

use crate::error::{Error, Result};
use cupcake_order::OrderConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name searched in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cupcake.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CupcakeConfig {
    /// Quantities, flavors and pickup window on offer
    #[serde(default)]
    pub order: OrderConfig,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Filter level, EnvFilter syntax (e.g. "info,cupcake_order=debug")
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_filter_level")]
    pub filter_level: String,

    #[serde(default)]
    pub log: LogConfig,
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log target:
    /// - "console": stderr (default)
    /// - "file": files under `path`
    #[serde(default = "default_log_output")]
    pub output: String,

    /// Rotate the log file daily when output = "file"
    #[serde(default)]
    pub rotate: bool,

    /// Log directory when output = "file"
    #[serde(default = "default_log_path")]
    pub path: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter_level: default_filter_level(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            output: default_log_output(),
            rotate: false,
            path: default_log_path(),
        }
    }
}

fn default_filter_level() -> String {
    "warn".to_string()
}

fn default_log_output() -> String {
    "console".to_string()
}

fn default_log_path() -> String {
    "logs/".to_string()
}

impl CupcakeConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.is_file() {
            return Err(Error::custom(format!(
                "Config file not found: {path_ref:?}"
            )));
        }

        let content = std::fs::read_to_string(path_ref)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate the configuration, collecting every problem found
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(order_errors) = self.order.validate() {
            errors.extend(order_errors);
        }

        let main_level = self
            .observability
            .filter_level
            .split(',')
            .next()
            .unwrap_or("")
            .trim();
        if !["trace", "debug", "info", "warn", "error", "off"].contains(&main_level) {
            errors.push(format!(
                "Invalid filter level '{}', must start with one of: trace, debug, info, warn, error, off",
                self.observability.filter_level
            ));
        }

        if !["console", "file"].contains(&self.observability.log.output.as_str()) {
            errors.push(format!(
                "Invalid log output '{}', must be one of: console, file",
                self.observability.log.output
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Resolve the config file to use
///
/// An explicit path must exist. Otherwise `./cupcake.toml` and then the user
/// config directory are tried; `Ok(None)` means run with defaults.
pub fn find_config_file(provided: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = provided {
        if path.is_file() {
            return Ok(Some(path.to_path_buf()));
        }
        return Err(Error::custom(format!("Config file not found: {path:?}")));
    }

    Ok(fallback_paths().into_iter().find(|path| path.is_file()))
}

/// Default locations, in lookup order
pub fn fallback_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("cupcake").join("config.toml"));
    }
    paths
}
