use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::EditorConfig;

/// Name of the settings file, looked up next to the pipelines being edited
pub const CONFIG_FILE: &str = "pipewright.toml";

/// Error type for settings I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse pipewright.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("could not serialize pipewright.toml: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Read editor settings from `pipewright.toml` in `dir`. A missing file
/// yields the defaults; a malformed one is an error, not a silent reset.
pub fn read_config(dir: &Path) -> Result<EditorConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(EditorConfig::default());
    }
    let config_text = fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&config_text)?)
}

/// Write editor settings to `pipewright.toml` in `dir`
pub fn write_config(dir: &Path, config: &EditorConfig) -> Result<(), ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    let config_text = toml::to_string_pretty(config)?;
    fs::write(&config_path, config_text).map_err(|e| ConfigError::WriteError {
        path: config_path,
        source: e,
    })?;
    Ok(())
}
