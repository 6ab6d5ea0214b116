//! # Configuration
//!
//! Runtime knobs of the storefront, loaded from TOML. Every field has a default, so an
//! empty file (or no file at all) yields the standard storefront behaviour.
//!
//! ```toml
//! tax_rate = 0.10
//! notification_display_ms = 3000
//! settlement_delay_ms = 2000
//! search_debounce_ms = 300
//! mailbox_capacity = 32
//! storage_dir = "/var/lib/storefront"
//! default_theme = "dark"
//! ```

use crate::model::ThemePreference;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "STOREFRONT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed, but a value is out of range.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Fraction added on top of the cart total, e.g. `0.10` for 10%.
    pub tax_rate: Decimal,
    pub notification_display_ms: u64,
    pub settlement_delay_ms: u64,
    pub search_debounce_ms: u64,
    /// Mailbox size of every actor.
    pub mailbox_capacity: usize,
    /// Directory for the file backend. In-memory storage when unset.
    pub storage_dir: Option<PathBuf>,
    /// Theme used until the visitor picks one.
    pub default_theme: ThemePreference,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(10, 2),
            notification_display_ms: 3000,
            settlement_delay_ms: 2000,
            search_debounce_ms: 300,
            mailbox_capacity: 32,
            storage_dir: None,
            default_theme: ThemePreference::Dark,
        }
    }
}

impl StorefrontConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Load from the file named by `STOREFRONT_CONFIG`, or defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tax_rate.is_sign_negative() {
            return Err(ConfigError::Invalid(format!(
                "tax_rate must not be negative, got {}",
                self.tax_rate
            )));
        }
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::Invalid(
                "mailbox_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn notification_display(&self) -> Duration {
        Duration::from_millis(self.notification_display_ms)
    }

    pub fn settlement_delay(&self) -> Duration {
        Duration::from_millis(self.settlement_delay_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
