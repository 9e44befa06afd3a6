//! Game configuration loader.

use std::path::Path;

use crawl_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a [`GameConfig`] from a TOML file.
    ///
    /// Missing tables and keys fall back to their defaults, so an empty file
    /// yields `GameConfig::default()`.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;

        tracing::debug!(
            sight_radius = config.sight_radius,
            auto_heal = config.auto_heal.is_some(),
            "game config loaded"
        );
        Ok(config)
    }
}
