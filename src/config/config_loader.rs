use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::patch_config::PatchConfig;
use crate::error::{PatchError, PatchResult};

/// The configuration loader
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader that yields the built-in drive skill patch
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set a custom config path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    /// Load the configuration.
    ///
    /// Without a path this returns the defaults. With a path the file must
    /// exist and parse as TOML; fields it omits keep their defaults.
    pub fn load(&self) -> PatchResult<PatchConfig> {
        let Some(path) = &self.config_path else {
            return Ok(PatchConfig::default());
        };

        debug!("Loading patch config from {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|e| PatchError::config(path, format!("failed to read: {}", e)))?;

        let config: PatchConfig = toml::from_str(&content)
            .map_err(|e| PatchError::config(path, format!("failed to parse: {}", e)))?;

        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
