//! Default configuration files written by `simpletoc init`.
use crate::error::ConfigError;

pub const DEFAULT_TOML: &str = include_str!("../templates/simpletoc.toml");
pub const DEFAULT_JSON: &str = include_str!("../templates/simpletoc.json");

/// Default configuration file contents for `format` (`toml` or `json`).
///
/// # Errors
///
/// Returns an error for any other format.
pub fn get_template(format: &str) -> Result<&'static str, ConfigError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML),
    "json" => Ok(DEFAULT_JSON),
    other => {
      Err(ConfigError::Config(format!(
        "Unsupported config format: '{other}'. Expected toml or json"
      )))
    },
  }
}
