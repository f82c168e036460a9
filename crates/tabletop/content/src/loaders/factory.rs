//! Content factory for building registries from a data directory.

use std::path::{Path, PathBuf};

use tabletop_core::{Card, Dice, Player, Registry, Step, TableConfig};

use crate::loaders::{CardLoader, ConfigLoader, DiceLoader, LoadResult, PlayerLoader, StepLoader};

/// Content factory that loads all table content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── dice.ron
/// ├── cards.ron
/// ├── steps.ron
/// └── players.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
    overwrite: bool,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// Catalogs are loaded strictly (duplicate names fail) until
    /// [`with_config`](Self::with_config) says otherwise.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            overwrite: TableConfig::DEFAULT_REGISTRY_OVERWRITE,
        }
    }

    /// Applies the catalog policy of `config`.
    pub fn with_config(mut self, config: &TableConfig) -> Self {
        self.overwrite = config.registry_overwrite;
        self
    }

    /// Load table configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<TableConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the dice catalog from `dice.ron`.
    pub fn load_dice(&self) -> LoadResult<Registry<Dice>> {
        DiceLoader::load(&self.data_dir.join("dice.ron"), self.overwrite)
    }

    /// Load the card catalog from `cards.ron`.
    pub fn load_cards(&self) -> LoadResult<Registry<Card>> {
        CardLoader::load(&self.data_dir.join("cards.ron"), self.overwrite)
    }

    /// Load the turn steps from `steps.ron`.
    pub fn load_steps(&self) -> LoadResult<Registry<Step>> {
        StepLoader::load(&self.data_dir.join("steps.ron"), self.overwrite)
    }

    /// Load the player roster from `players.ron`.
    pub fn load_players(&self) -> LoadResult<Registry<Player>> {
        PlayerLoader::load(&self.data_dir.join("players.ron"), self.overwrite)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_files_report_their_path() {
        let factory = ContentFactory::new("/nonexistent/tabletop");
        let err = factory.load_cards().unwrap_err();
        assert!(err.to_string().contains("cards.ron"));
    }
}
