//! Card catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tabletop_core::{Card, Registry};

use crate::defs::CardDef;
use crate::loaders::{LoadResult, build_registry, read_file};

/// Card catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCatalog {
    pub cards: Vec<CardDef>,
}

/// Loader for card catalogs from RON files.
pub struct CardLoader;

impl CardLoader {
    pub fn load(path: &Path, overwrite: bool) -> LoadResult<Registry<Card>> {
        let content = read_file(path)?;
        Self::parse(&content, overwrite)
    }

    pub fn parse(content: &str, overwrite: bool) -> LoadResult<Registry<Card>> {
        let catalog: CardCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card catalog RON: {}", e))?;
        build_registry(catalog.cards, overwrite)
    }
}
