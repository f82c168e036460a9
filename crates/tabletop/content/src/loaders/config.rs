//! Table configuration loader.

use std::env;
use std::path::Path;

use tabletop_core::TableConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for table configuration from TOML files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Environment variable overriding [`TableConfig::seed`].
    pub const SEED_VAR: &'static str = "TABLETOP_SEED";
    /// Environment variable overriding [`TableConfig::registry_overwrite`].
    pub const OVERWRITE_VAR: &'static str = "TABLETOP_REGISTRY_OVERWRITE";

    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<TableConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<TableConfig> {
        let config: TableConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TABLETOP_SEED` - Seed for the random source (default: unset, entropy)
    /// - `TABLETOP_REGISTRY_OVERWRITE` - Replace duplicate catalog names (default: false)
    pub fn from_env() -> TableConfig {
        Self::apply_overrides(TableConfig::default(), |key| env::var(key).ok())
    }

    /// Loads `path` and then applies environment overrides on top.
    pub fn load_with_env(path: &Path) -> LoadResult<TableConfig> {
        let config = Self::load(path)?;
        Ok(Self::apply_overrides(config, |key| env::var(key).ok()))
    }

    fn apply_overrides(
        mut config: TableConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> TableConfig {
        if let Some(seed) = lookup(Self::SEED_VAR).and_then(|raw| raw.trim().parse().ok()) {
            config.seed = Some(seed);
        }
        if let Some(overwrite) = lookup(Self::OVERWRITE_VAR).as_deref().and_then(parse_bool) {
            config.registry_overwrite = overwrite;
        }
        tracing::debug!(?config, "applied environment overrides");
        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
