//! Structured logging for brewday
//!
//! Import progress is reported through `tracing`: one `info` line per file,
//! `debug` timings per synthesis phase and a `warn` for every record the
//! import has to drop or reinterpret. Library code never installs a
//! subscriber itself; applications call one of the `init_*` functions once.
//!
//! # Example
//!
//! ```no_run
//! use brewday::util::logging;
//!
//! // BREWDAY_LOG_LEVEL=debug BREWDAY_LOG_JSON=true
//! logging::init_from_env();
//!
//! tracing::info!("Importing recipes");
//! ```

use crate::config::BrewdayConfig;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for `brewday` targets. `RUST_LOG` still applies to others.
    pub level: Level,

    /// Emit JSON lines instead of human readable output
    pub use_json: bool,

    pub include_target: bool,

    /// Include file and line number
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// JSON output with source locations, for batch imports run unattended.
    pub fn batch() -> Self {
        Self {
            level: Level::INFO,
            use_json: true,
            include_target: true,
            include_location: true,
        }
    }

    /// Uses the log level of an already validated [`BrewdayConfig`].
    pub fn from_config(config: &BrewdayConfig) -> Self {
        Self::with_level(parse_level(&config.log_level))
    }

    fn directive(&self) -> Option<Directive> {
        format!("brewday={}", self.level).parse().ok()
    }
}

/// Parses a level name case-insensitively, falling back to INFO.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Some(directive) = config.directive() {
            filter = filter.add_directive(directive);
        }

        let layer = fmt::layer()
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Reads `BREWDAY_LOG_LEVEL` and `BREWDAY_LOG_JSON`.
pub fn init_from_env() {
    init_logging(config_from_env());
}

fn config_from_env() -> LoggingConfig {
    let level = env::var("BREWDAY_LOG_LEVEL")
        .map(|raw| parse_level(&raw))
        .unwrap_or(Level::INFO);

    let use_json = env::var("BREWDAY_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    LoggingConfig {
        level,
        use_json,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("Debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_invalid() {
        assert_eq!(parse_level("chatty"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn test_directive_targets_crate() {
        let config = LoggingConfig::with_level(Level::DEBUG);
        let directive = config.directive().unwrap();
        assert_eq!(directive.to_string().to_lowercase(), "brewday=debug");
    }

    #[test]
    fn test_batch_config() {
        let config = LoggingConfig::batch();
        assert!(config.use_json);
        assert!(config.include_location);
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        env::set_var("BREWDAY_LOG_LEVEL", "debug");
        env::set_var("BREWDAY_LOG_JSON", "true");
        let config = config_from_env();
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.use_json);

        env::remove_var("BREWDAY_LOG_LEVEL");
        env::remove_var("BREWDAY_LOG_JSON");
        let config = config_from_env();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.use_json);
    }

    #[test]
    #[serial]
    fn test_from_config_uses_log_level() {
        env::set_var("BREWDAY_LOG_LEVEL", "warn");
        let config = LoggingConfig::from_config(&BrewdayConfig::default());
        assert_eq!(config.level, Level::WARN);
        env::remove_var("BREWDAY_LOG_LEVEL");
    }
}
