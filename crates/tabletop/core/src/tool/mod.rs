//! Stateful working collections built from registry templates.
//!
//! A tool owns `current` (its live instances) and `last` (the most recently
//! popped instance). Three flavours share the [`Tool`] contract:
//!
//! | Tool | `current` | Typical use |
//! |---|---|---|
//! | [`Sequence`] | list | dice shaker, seating order |
//! | [`Deque`] | double-ended queue | deck of cards |
//! | [`Schedule`] | min-heap on priority | turn/phase order |
//!
//! Every entity entering `current` is a `copy()` of its source, so mutating
//! an instance never affects the registry template or any other instance.
mod arrange;
mod deque;
mod schedule;
mod sequence;

pub use arrange::ArrangeError;
pub use deque::{Deck, Deque};
pub use schedule::{Prioritized, Schedule, Steps};
pub use sequence::{Sequence, Shaker};

use crate::component::Component;
use crate::error::{ErrorKind, PieceError};
use crate::registry::Registry;

/// Errors raised by tool operations.
///
/// Every operation validates before mutating, so `current` and `last` are
/// unchanged whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    /// No entity with this id within the searched range.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// Removal from an empty collection.
    #[error("cannot {operation} from an empty {tool}")]
    Empty {
        tool: &'static str,
        operation: &'static str,
    },

    /// A reorder request does not fit `current`.
    #[error(transparent)]
    Arrange(#[from] ArrangeError),

    /// Operation has no meaning for this tool (e.g. `insert` on a schedule).
    #[error("{tool} does not support {operation}")]
    Unsupported {
        tool: &'static str,
        operation: &'static str,
    },
}

impl ToolError {
    pub(crate) fn not_found<T: Component>(id: &str) -> Self {
        Self::NotFound {
            kind: T::KIND,
            id: id.to_owned(),
        }
    }
}

impl PieceError for ToolError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Empty { .. } => ErrorKind::Empty,
            Self::Arrange(inner) => inner.kind(),
            Self::Unsupported { .. } => ErrorKind::UnsupportedOperation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "TOOL_NOT_FOUND",
            Self::Empty { .. } => "TOOL_EMPTY",
            Self::Arrange(inner) => inner.error_code(),
            Self::Unsupported { .. } => "TOOL_UNSUPPORTED",
        }
    }
}

/// Common contract of every tool.
///
/// Sequence-only operations (`append`, `insert`, `index`, ...) are part of
/// the contract so callers can treat tools uniformly; a tool whose ordering
/// forbids them returns [`ToolError::Unsupported`].
pub trait Tool {
    type Item: Component;

    /// Tool label attached to log events and errors.
    const NAME: &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most recently popped instance.
    fn last(&self) -> Option<&Self::Item>;

    /// Places an already-copied instance where this tool naturally puts new
    /// entries (end of a list, priority slot of a heap).
    fn admit(&mut self, instance: Self::Item);

    /// Empties `current` and forgets `last`.
    fn clear(&mut self);

    /// Rebuilds `current` from `registry`.
    ///
    /// Without `ids`, every template is copied in registry order. With `ids`,
    /// each id is looked up with [`Registry::by_id`] and a fresh copy is
    /// admitted per occurrence; unknown ids are skipped.
    fn deal(&mut self, registry: &Registry<Self::Item>, ids: Option<&[&str]>) -> &mut Self
    where
        Self: Sized,
    {
        self.clear();
        match ids {
            None => {
                for template in registry.values() {
                    self.admit(template.copy());
                }
            }
            Some(ids) => {
                for id in ids {
                    match registry.by_id(id) {
                        Some(template) => self.admit(template.copy()),
                        None => tracing::debug!(
                            tool = Self::NAME,
                            kind = <Self::Item as Component>::KIND,
                            id,
                            "skipping unknown id while dealing"
                        ),
                    }
                }
            }
        }
        tracing::debug!(tool = Self::NAME, dealt = self.len(), "dealt from registry");
        self
    }

    /// Copies `entity` onto the end of `current`.
    fn append(&mut self, entity: &Self::Item) -> Result<(), ToolError>;

    /// Copies every entity onto the end of `current`, preserving their order.
    fn extend<'a, I>(&mut self, entities: I) -> Result<(), ToolError>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: 'a,
    {
        for entity in entities {
            self.append(entity)?;
        }
        Ok(())
    }

    /// Copies `entity` into position `pos` (clamped to the end).
    fn insert(&mut self, pos: usize, entity: &Self::Item) -> Result<(), ToolError>;

    /// First position of `id` within `[start, end)`.
    fn index(&self, id: &str, start: usize, end: Option<usize>) -> Result<usize, ToolError>;

    /// Removes and returns the first instance with `id`.
    fn remove(&mut self, id: &str) -> Result<Self::Item, ToolError>;

    fn count(&self, id: &str) -> usize;

    fn reverse(&mut self) -> Result<(), ToolError>;

    /// Removes the next instance (the end of a list, the lowest priority of a
    /// heap), remembers it as `last` and returns it.
    fn pop(&mut self) -> Result<Self::Item, ToolError>;

    /// All instances with `id`, in storage order.
    fn by_id(&self, id: &str) -> Vec<&Self::Item>;
}

/// First position in `[start, end)` holding `id`; `end` is clamped to the
/// collection length.
fn position_in<'a, T, I>(items: I, id: &str, start: usize, end: Option<usize>) -> Option<usize>
where
    T: Component + 'a,
    I: ExactSizeIterator<Item = &'a T>,
{
    let len = items.len();
    let end = end.map_or(len, |end| end.min(len));
    if start >= end {
        return None;
    }
    items
        .enumerate()
        .skip(start)
        .take(end - start)
        .find(|(_, item)| item.id() == id)
        .map(|(pos, _)| pos)
}
