//! Configuration file support.
//!
//! Parameters are resolved in three layers: `ReassemblyParams::default()`,
//! then an optional TOML file, then explicit command-line flags.
//!
//! ```toml
//! [reassembly]
//! parallel = true
//! parallel_threshold = 64
//! record_steps = true
//! ```

use crate::models::ReassemblyParams;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Top-level layout of a configuration file.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub reassembly: ReassemblyParams,
}

/// Parse configuration from TOML text. Missing keys take their defaults.
pub fn parse_params(content: &str) -> Result<ReassemblyParams, ConfigError> {
    let file: ConfigFile = toml::from_str(content)?;
    Ok(file.reassembly)
}

/// Load parameters from a TOML configuration file.
pub fn load_params(path: &Path) -> Result<ReassemblyParams, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let params = parse_params(&content)?;
    log::debug!("Loaded configuration from {}: {:?}", path.display(), params);
    Ok(params)
}

/// Load parameters from `path` if given, otherwise use the defaults.
pub fn resolve_base_params(path: Option<&Path>) -> Result<ReassemblyParams, ConfigError> {
    match path {
        Some(path) => load_params(path),
        None => Ok(ReassemblyParams::default()),
    }
}
