//! Loading driver configuration (sample set + reporting options) from TOML.
//!
//! Example file:
//! ```toml
//! fail_on_error = true
//!
//! [[samples]]
//! text = "cat dog"
//! op = { spoonerize = { first_len = 1, second_len = 1 } }
//!
//! [[samples]]
//! text = "abcd"
//! op = "reverse_all"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::Sample;

pub const CONFIG_PATH_ENV: &str = "STRCT_CONFIG_PATH";

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("failed to read config file: {0}")]
  Io(#[from] std::io::Error),

  #[error("failed to parse TOML config: {0}")]
  Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Deserialize)]
pub struct DriverConfig {
  /// Samples to run. Empty means "use the built-in seeds".
  #[serde(default)]
  pub samples: Vec<Sample>,
  /// Exit non-zero if any sample reports an error.
  #[serde(default)]
  pub fail_on_error: bool,
  /// Inputs longer than this many chars are truncated in log lines.
  #[serde(default = "default_max_log_len")]
  pub max_log_len: usize,
}

fn default_max_log_len() -> usize {
  64
}

impl Default for DriverConfig {
  fn default() -> Self {
    Self { samples: Vec::new(), fail_on_error: false, max_log_len: default_max_log_len() }
  }
}

pub fn load_config_from_path(path: &Path) -> Result<DriverConfig, ConfigError> {
  let raw = std::fs::read_to_string(path)?;
  Ok(toml::from_str::<DriverConfig>(&raw)?)
}

/// Attempt to load `DriverConfig` from STRCT_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_config_from_env() -> Option<DriverConfig> {
  let path = std::env::var(CONFIG_PATH_ENV).ok()?;
  match load_config_from_path(Path::new(&path)) {
    Ok(cfg) => {
      info!(target: "strct", %path, samples = cfg.samples.len(), "Loaded driver config (TOML)");
      Some(cfg)
    }
    Err(e) => {
      error!(target: "strct", %path, error = %e, "Failed to load driver config");
      None
    }
  }
}
