use crate::rng::{RandSource, RandomSource};

/// Table-wide tunables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TableConfig {
    /// Seed for the table's random source. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// When loading catalogs, let a later definition replace an earlier one
    /// with the same name instead of failing.
    pub registry_overwrite: bool,
}

impl TableConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: Option<u64> = None;
    pub const DEFAULT_REGISTRY_OVERWRITE: bool = false;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            registry_overwrite: Self::DEFAULT_REGISTRY_OVERWRITE,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new()
        }
    }

    /// Random source for this table: reproducible when a seed is set.
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => {
                tracing::debug!(seed, "using seeded random source");
                Box::new(RandSource::seeded(seed))
            }
            None => Box::new(RandSource::from_entropy()),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}
