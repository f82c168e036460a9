//! Data-driven content definitions and loaders.
//!
//! This crate turns data files into `tabletop-core` registries:
//! - Dice, card, step and player catalogs (RON)
//! - Table configuration (TOML, with environment overrides)
//! - Embedded standard sets (polyhedral dice, generic turn phases)
//!
//! Definitions are plain serde structs; validation happens when they are
//! built into components, so a bad entry is reported with its id.

pub mod defs;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use defs::{CardDef, Definition, DiceDef, PlayerDef, StepDef};

#[cfg(feature = "loaders")]
pub use loaders::{
    CardCatalog, CardLoader, ConfigLoader, ContentFactory, DiceCatalog, DiceLoader, LoadResult,
    PlayerCatalog, PlayerLoader, StandardSets, StepCatalog, StepLoader,
};
