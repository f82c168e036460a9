use std::cmp::Ordering;

use super::{Component, Identity};
use crate::name::NameError;
use crate::tool::Prioritized;

/// A turn or phase scheduled by priority (lower runs first).
///
/// Equality and ordering compare `priority` only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    #[cfg_attr(feature = "serde", serde(flatten))]
    identity: Identity,
    pub priority: u32,
}

impl Step {
    pub fn new(id: impl AsRef<str>, priority: u32) -> Result<Self, NameError> {
        let identity = Identity::new(id)?;
        tracing::trace!(kind = Self::KIND, id = %identity.id(), priority, "created");
        Ok(Self { identity, priority })
    }
}

impl Component for Step {
    const KIND: &'static str = "step";

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
}

impl Prioritized for Step {
    fn priority(&self) -> u32 {
        self.priority
    }
}

impl PartialEq for Step {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for Step {}

impl PartialOrd for Step {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Step {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}
