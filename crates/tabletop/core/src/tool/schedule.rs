use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{Tool, ToolError};
use crate::component::{Component, Step};

/// Components that can be ordered in a [`Schedule`].
pub trait Prioritized {
    /// Lower values come out first.
    fn priority(&self) -> u32;
}

/// Heap slot: lowest priority first, then first-pushed first.
#[derive(Clone, Debug)]
struct Scheduled<T> {
    priority: u32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Scheduled<T> {}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Scheduled<T> {
    // `BinaryHeap` is a max-heap, so both keys are reversed.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue of instances.
///
/// `pop` always yields the lowest priority; equal priorities come out in the
/// order they were pushed. Positional operations (`append`, `insert`,
/// `index`, `remove`, `reverse`) are unsupported.
#[derive(Clone, Debug)]
pub struct Schedule<T> {
    current: BinaryHeap<Scheduled<T>>,
    next_seq: u64,
    last: Option<T>,
}

/// A schedule of turn steps.
pub type Steps = Schedule<Step>;

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self {
            current: BinaryHeap::new(),
            next_seq: 0,
            last: None,
        }
    }
}

impl<T: Component + Prioritized> Schedule<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `entity` into its priority slot.
    pub fn push(&mut self, entity: &T) {
        self.admit(entity.copy());
    }

    /// Next instance `pop` would return.
    pub fn peek(&self) -> Option<&T> {
        self.current.peek().map(|slot| &slot.item)
    }

    /// Instances in pop order.
    pub fn to_sorted_vec(&self) -> Vec<&T> {
        let mut slots: Vec<&Scheduled<T>> = self.current.iter().collect();
        slots.sort_by(|a, b| b.cmp(a));
        slots.into_iter().map(|slot| &slot.item).collect()
    }

    /// Instances in arbitrary (heap) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.current.iter().map(|slot| &slot.item)
    }

    fn unsupported(operation: &'static str) -> ToolError {
        ToolError::Unsupported {
            tool: Self::NAME,
            operation,
        }
    }
}

impl<T: Component + Prioritized> Tool for Schedule<T> {
    type Item = T;
    const NAME: &'static str = "schedule";

    fn len(&self) -> usize {
        self.current.len()
    }

    fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    fn admit(&mut self, instance: T) {
        let slot = Scheduled {
            priority: instance.priority(),
            seq: self.next_seq,
            item: instance,
        };
        self.next_seq += 1;
        self.current.push(slot);
    }

    fn clear(&mut self) {
        self.current.clear();
        self.next_seq = 0;
        self.last = None;
    }

    fn append(&mut self, _entity: &T) -> Result<(), ToolError> {
        Err(Self::unsupported("append"))
    }

    fn extend<'a, I>(&mut self, _entities: I) -> Result<(), ToolError>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        Err(Self::unsupported("extend"))
    }

    fn insert(&mut self, _pos: usize, _entity: &T) -> Result<(), ToolError> {
        Err(Self::unsupported("insert"))
    }

    fn index(&self, _id: &str, _start: usize, _end: Option<usize>) -> Result<usize, ToolError> {
        Err(Self::unsupported("index"))
    }

    fn remove(&mut self, _id: &str) -> Result<T, ToolError> {
        Err(Self::unsupported("remove"))
    }

    fn count(&self, id: &str) -> usize {
        self.iter().filter(|item| item.id() == id).count()
    }

    fn reverse(&mut self) -> Result<(), ToolError> {
        Err(Self::unsupported("reverse"))
    }

    fn pop(&mut self) -> Result<T, ToolError> {
        let Scheduled { item, priority, .. } = self.current.pop().ok_or(ToolError::Empty {
            tool: Self::NAME,
            operation: "pop",
        })?;
        tracing::debug!(tool = Self::NAME, id = %item.id(), priority, "popped");
        self.last = Some(item.clone());
        Ok(item)
    }

    /// Matches in storage order; use [`to_sorted_vec`](Schedule::to_sorted_vec)
    /// for pop order.
    fn by_id(&self, id: &str) -> Vec<&T> {
        self.iter().filter(|item| item.id() == id).collect()
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Schedule<T>
where
    T: Component + Prioritized + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Schedule", 2)?;
        state.serialize_field("current", &self.to_sorted_vec())?;
        state.serialize_field("last", &self.last)?;
        state.end()
    }
}
