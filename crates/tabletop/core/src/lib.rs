//! Composable game-state primitives for tabletop games.
//!
//! `tabletop-core` models game pieces (dice, cards, steps, players) as
//! [`Component`]s, stores their templates in name-keyed [`Registry`]s and
//! plays with fresh copies of them inside [`Tool`]s: a [`Sequence`] (dice
//! shaker), a [`Deque`] (deck of cards) and a priority [`Schedule`] (turn
//! steps). Randomness is always passed in as a [`RandomSource`], so any call
//! can be made deterministic by handing it a seeded source.
pub mod component;
pub mod config;
pub mod counter;
pub mod error;
pub mod name;
pub mod registry;
pub mod rng;
pub mod tool;

pub use component::{
    Card, CardBuilder, Component, DefinitionError, Dice, DiceBuilder, Face, Identity, Player, Step,
};
pub use config::TableConfig;
pub use counter::Counter;
pub use error::{ErrorKind, PieceError};
pub use name::{Name, NameError, is_valid, normalize};
pub use registry::Registry;
pub use rng::{PcgSource, RandSource, RandomSource};
pub use tool::{
    ArrangeError, Deck, Deque, Prioritized, Schedule, Sequence, Shaker, Steps, Tool, ToolError,
};
