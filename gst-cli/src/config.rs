//! TOML configuration for the command-line calculator.
//!
//! Every key is optional:
//!
//! ```toml
//! currency_symbol = "₹"
//! default_mode = "add"
//! preset_rates = ["0", "0.25", "3", "5", "12", "18", "28"]
//! log_level = "warn"
//! log_file = "gst-calc.log"
//! ```

use std::path::{Path, PathBuf};

use gst_core::{DEFAULT_CURRENCY_SYMBOL, GstMode, standard_rates};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub currency_symbol: String,
    pub default_mode: GstMode,
    /// Rates offered by the `rates` command, in percent.
    pub preset_rates: Vec<Decimal>,
    /// Any `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub log_level: String,
    /// Log records are appended here in addition to stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            default_mode: GstMode::default(),
            preset_rates: standard_rates(),
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(
        contents: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn parse(contents: &str) -> Result<Config, ConfigError> {
        Config::from_toml_str(contents, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn defaults_use_rupee_and_add_mode() {
        let config = Config::default();

        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.default_mode, GstMode::Add);
        assert_eq!(config.preset_rates.len(), 7);
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = parse("default_mode = \"remove\"\npreset_rates = [\"5\", \"18\"]\n").unwrap();

        assert_eq!(config.default_mode, GstMode::Remove);
        assert_eq!(config.preset_rates, vec![dec!(5), dec!(18)]);
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = parse("colour = \"blue\"").unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn bad_mode_is_rejected() {
        assert!(parse("default_mode = \"double\"").is_err());
    }

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }

    #[test]
    fn unreadable_path_is_read_error() {
        let err = Config::load(Path::new("/this/path/does/not/exist.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
