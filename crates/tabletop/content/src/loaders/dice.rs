//! Dice catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tabletop_core::{Dice, Registry};

use crate::defs::DiceDef;
use crate::loaders::{LoadResult, build_registry, read_file};

/// Dice catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiceCatalog {
    pub dice: Vec<DiceDef>,
}

/// Loader for dice catalogs from RON files.
pub struct DiceLoader;

impl DiceLoader {
    /// Load a dice catalog from a RON file into a registry.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a DiceCatalog
    /// * `overwrite` - Let later definitions replace earlier ones with the same name
    pub fn load(path: &Path, overwrite: bool) -> LoadResult<Registry<Dice>> {
        let content = read_file(path)?;
        Self::parse(&content, overwrite)
    }

    /// Parse RON text holding a DiceCatalog.
    pub fn parse(content: &str, overwrite: bool) -> LoadResult<Registry<Dice>> {
        let catalog: DiceCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse dice catalog RON: {}", e))?;
        build_registry(catalog.dice, overwrite)
    }
}
