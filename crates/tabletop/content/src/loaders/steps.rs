//! Step catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tabletop_core::{Registry, Step};

use crate::defs::StepDef;
use crate::loaders::{LoadResult, build_registry, read_file};

/// Step catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepCatalog {
    pub steps: Vec<StepDef>,
}

/// Loader for turn-step catalogs from RON files.
pub struct StepLoader;

impl StepLoader {
    pub fn load(path: &Path, overwrite: bool) -> LoadResult<Registry<Step>> {
        let content = read_file(path)?;
        Self::parse(&content, overwrite)
    }

    pub fn parse(content: &str, overwrite: bool) -> LoadResult<Registry<Step>> {
        let catalog: StepCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse step catalog RON: {}", e))?;
        build_registry(catalog.steps, overwrite)
    }
}
