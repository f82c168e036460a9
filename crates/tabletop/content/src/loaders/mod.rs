//! Content loaders for reading catalogs and configuration from files.
//!
//! Catalogs are RON files holding a list of [`crate::defs`] definitions;
//! configuration is TOML.

pub mod cards;
pub mod config;
pub mod dice;
pub mod factory;
pub mod players;
pub mod standard;
pub mod steps;

pub use cards::{CardCatalog, CardLoader};
pub use config::ConfigLoader;
pub use dice::{DiceCatalog, DiceLoader};
pub use factory::ContentFactory;
pub use players::{PlayerCatalog, PlayerLoader};
pub use standard::StandardSets;
pub use steps::{StepCatalog, StepLoader};

use std::path::Path;

use tabletop_core::{Component, Registry};

use crate::defs::Definition;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Builds every definition and registers it in file order.
///
/// With `overwrite`, a later definition replaces an earlier one stored under
/// the same key; otherwise the duplicate is an error.
pub(crate) fn build_registry<D>(
    defs: Vec<D>,
    overwrite: bool,
) -> LoadResult<Registry<D::Output>>
where
    D: Definition,
{
    let kind = <D::Output as Component>::KIND;
    let mut registry = Registry::new();
    for def in defs {
        let entity = def
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid {} definition '{}': {}", kind, def.id(), e))?;
        if overwrite {
            if registry.replace(entity, def.name())?.is_some() {
                tracing::warn!(kind, id = def.id(), "definition replaced an earlier one");
            }
        } else {
            registry.add(entity, def.name())?;
        }
    }
    tracing::info!(kind, count = registry.len(), "loaded catalog");
    Ok(registry)
}
