//! Player roster loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tabletop_core::{Player, Registry};

use crate::defs::PlayerDef;
use crate::loaders::{LoadResult, build_registry, read_file};

/// Player roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCatalog {
    pub players: Vec<PlayerDef>,
}

/// Loader for player rosters from RON files.
pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load(path: &Path, overwrite: bool) -> LoadResult<Registry<Player>> {
        let content = read_file(path)?;
        Self::parse(&content, overwrite)
    }

    pub fn parse(content: &str, overwrite: bool) -> LoadResult<Registry<Player>> {
        let catalog: PlayerCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse player roster RON: {}", e))?;
        build_registry(catalog.players, overwrite)
    }
}
