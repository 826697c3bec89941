//! Battle configuration loader.

use std::path::Path;

use arena_core::{BattleConfig, ConfigError};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
///
/// ```toml
/// max_rounds = 150
/// seed = 2024
/// ```
///
/// Missing keys fall back to [`BattleConfig::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config from a TOML file.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;
        debug!(path = %path.display(), ?config, "battle config loaded");
        Ok(config)
    }

    /// Parse and validate a config from TOML text.
    pub fn parse(content: &str) -> Result<BattleConfig, ConfigError> {
        let config: BattleConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_owned(),
            message: e.message().to_owned(),
        })?;
        config.validate()?;
        Ok(config)
    }
}
