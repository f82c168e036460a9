//! Identity-bearing game objects.
//!
//! Every component composes an [`Identity`] (validated id plus a free-form
//! [`Counter`]) and implements [`Component`]. The same type serves as a
//! registry template and as a live instance inside a tool: `copy()` is the
//! only step between the two.
mod card;
mod dice;
mod player;
mod step;

pub use card::{Card, CardBuilder};
pub use dice::{Dice, DiceBuilder, Face};
pub use player::Player;
pub use step::Step;

use std::fmt;

use crate::counter::Counter;
use crate::error::{ErrorKind, PieceError};
use crate::name::{Name, NameError};

/// Id and per-instance tallies shared by every component.
///
/// Equality looks at the id only; the counter never takes part.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Identity {
    id: Name,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub counter: Counter,
}

impl Identity {
    pub fn new(id: impl AsRef<str>) -> Result<Self, NameError> {
        Ok(Self::from_name(Name::new(id)?))
    }

    pub fn from_name(id: Name) -> Self {
        Self {
            id,
            counter: Counter::new(),
        }
    }

    pub fn id(&self) -> &Name {
        &self.id
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Identity {}

/// Common contract of dice, cards, steps and players.
pub trait Component: Clone + fmt::Debug {
    /// Kind label attached to log events (e.g. `"dice"`).
    const KIND: &'static str;

    fn identity(&self) -> &Identity;

    fn identity_mut(&mut self) -> &mut Identity;

    fn id(&self) -> &Name {
        self.identity().id()
    }

    fn counter(&self) -> &Counter {
        &self.identity().counter
    }

    fn counter_mut(&mut self) -> &mut Counter {
        &mut self.identity_mut().counter
    }

    /// Independent duplicate with identical fields and an empty counter.
    ///
    /// A freshly materialized instance never inherits the tallies of the
    /// template (or instance) it was copied from.
    fn copy(&self) -> Self {
        let mut copy = self.clone();
        copy.counter_mut().clear();
        copy
    }
}

/// Errors raised when a component is built from an invalid field combination.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    /// The id failed normalization/validation.
    #[error(transparent)]
    Name(#[from] NameError),

    /// `count` must be at least 1.
    #[error("{kind} '{id}': count must be positive")]
    ZeroCount { kind: &'static str, id: String },

    /// Dice need at least two sides.
    #[error("dice '{id}': sides must be at least 2, got {sides}")]
    TooFewSides { id: String, sides: u32 },

    /// A non-empty face mapping must cover exactly `1..=sides`.
    #[error("dice '{id}': mapping must cover faces 1..={sides} (missing {missing:?}, unexpected {unexpected:?})")]
    MappingMismatch {
        id: String,
        sides: u32,
        missing: Vec<u32>,
        unexpected: Vec<u32>,
    },
}

impl PieceError for DefinitionError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Name(inner) => inner.kind(),
            _ => ErrorKind::Definition,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Name(inner) => inner.error_code(),
            Self::ZeroCount { .. } => "DEFINITION_ZERO_COUNT",
            Self::TooFewSides { .. } => "DEFINITION_TOO_FEW_SIDES",
            Self::MappingMismatch { .. } => "DEFINITION_MAPPING_MISMATCH",
        }
    }
}
