//! Configuration for the BeerXML import
//!
//! Options are plain values handed to [`crate::BeerXmlParser::new`] and
//! threaded down to every handler. [`BrewdayConfig::default`] loads them from
//! environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! - `BREWDAY_FIX_EXPORTER_BUGS`: Compensate for known exporter bugs (true|false) - default: "false"
//! - `BREWDAY_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use brewday::{BeerXmlParser, BrewdayConfig};
//!
//! let config = BrewdayConfig::default();
//! config.validate().expect("Invalid configuration");
//!
//! let parser = BeerXmlParser::new(config.import);
//! ```

use std::env;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_FIX_EXPORTER_BUGS: bool = false;
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Valid options: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Options that change how BeerXML is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportOptions {
    /// Compensate for bugs observed in a popular exporter: all fermentable
    /// colours are SRM, a missing tertiary temperature is defaulted and the
    /// forced carbonation flag is inverted.
    pub fix_known_exporter_bugs: bool,
}

impl ImportOptions {
    pub fn fixing_exporter_bugs() -> Self {
        Self {
            fix_known_exporter_bugs: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrewdayConfig {
    pub import: ImportOptions,
    pub log_level: String,
}

impl Default for BrewdayConfig {
    fn default() -> Self {
        let fix_known_exporter_bugs = env::var("BREWDAY_FIX_EXPORTER_BUGS")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_FIX_EXPORTER_BUGS);

        let log_level = env::var("BREWDAY_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            import: ImportOptions {
                fix_known_exporter_bugs,
            },
            log_level,
        }
    }
}

impl BrewdayConfig {
    /// Builds a configuration, failing on values that are set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default();

        if let Ok(raw) = env::var("BREWDAY_FIX_EXPORTER_BUGS") {
            raw.parse::<bool>().map_err(|e| ConfigError::ParseError {
                field: "BREWDAY_FIX_EXPORTER_BUGS".to_string(),
                error: e.to_string(),
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}
