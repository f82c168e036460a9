//! Embedded standard sets.

use tabletop_core::{Dice, Registry, Step};

use crate::loaders::{DiceLoader, LoadResult, StepLoader};

/// Catalogs compiled into the crate: polyhedral dice and a generic turn.
pub struct StandardSets;

impl StandardSets {
    /// d4, d6, d8, d10, d12, d20, d100 and four Fate dice (-1/0/+1).
    pub fn dice() -> LoadResult<Registry<Dice>> {
        DiceLoader::parse(include_str!("../../data/dice.ron"), false)
    }

    /// Generic turn phases from `untap` (first) to `end` (last).
    pub fn steps() -> LoadResult<Registry<Step>> {
        StepLoader::parse(include_str!("../../data/steps.ron"), false)
    }
}
