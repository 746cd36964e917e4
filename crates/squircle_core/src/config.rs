//! Pattern configuration save/load.
//!
//! A config file is JSON holding the parameter set and the gradient:
//!
//! ```json
//! {
//!   "params": { "bump_count": 20, "ring_count": 40, "rotation_period": 20,
//!               "rotation_offset": 0.1, "radial_step": 0.05, "bump_width": 0.1 },
//!   "gradient": { "stops": [ { "position": 0.0, "color": "#FFFF0028" },
//!                            { "position": 1.0, "color": "#FFFF00BF" } ] }
//! }
//! ```
//!
//! Missing parameter fields take their defaults, and a missing gradient is
//! the rainbow preset.
//!
//! # Example
//!
//! ```ignore
//! use squircle_core::{load_config, save_config, PatternConfig};
//!
//! save_config(&PatternConfig::default(), "assets/squircle.json")?;
//! let config = load_config("assets/squircle.json")?;
//! ```

use bevy::log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::PatternError;
use crate::gradient::Gradient;
use crate::params::PatternParams;

/// Default config location, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/squircle.json";

/// Everything needed to reproduce a pattern.
///
/// Gradient colours are stored as 8-bit hex, so a reloaded config matches
/// the saved one exactly only when every colour component is a multiple of
/// 1/255 (true of the built-in presets). Other components come back within
/// 1/510 of their original value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub params: PatternParams,
    pub gradient: Gradient,
}

/// Errors that can occur while reading or writing a config.
#[derive(Debug)]
pub enum ConfigError {
    /// File system error
    Io(std::io::Error),
    /// Malformed JSON, or a gradient that failed validation while parsing
    Json(String),
    /// Well-formed file with parameters that cannot produce a pattern
    Invalid(PatternError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<PatternError> for ConfigError {
    fn from(e: PatternError) -> Self {
        ConfigError::Invalid(e)
    }
}

/// Result type for config I/O.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load and validate a config.
pub fn load_config<P: AsRef<Path>>(path: P) -> ConfigResult<PatternConfig> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let config: PatternConfig =
        serde_json::from_reader(reader).map_err(|e| ConfigError::Json(e.to_string()))?;
    config.params.validate()?;

    info!(
        "Loaded pattern config from {} ({} rings, {} gradient stops)",
        path.display(),
        config.params.ring_count,
        config.gradient.stops().len()
    );
    Ok(config)
}

/// Write a config as pretty-printed JSON.
///
/// Invalid parameters are rejected rather than written. Colours are rounded
/// to 8 bits per channel.
pub fn save_config<P: AsRef<Path>>(config: &PatternConfig, path: P) -> ConfigResult<()> {
    let path = path.as_ref();
    config.params.validate()?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, config)
        .map_err(|e| ConfigError::Json(e.to_string()))?;
    writer.flush()?;

    info!("Saved pattern config to {}", path.display());
    Ok(())
}
