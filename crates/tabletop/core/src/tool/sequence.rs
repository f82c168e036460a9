use super::{Tool, ToolError, position_in};
use crate::component::{Component, Dice, Face};
use crate::rng::RandomSource;

/// Ordered list of instances (a dice shaker, a seating order, ...).
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(bound(serialize = "T: serde::Serialize"))
)]
pub struct Sequence<T> {
    current: Vec<T>,
    last: Option<T>,
}

/// A sequence of dice rolled together.
pub type Shaker = Sequence<Dice>;

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self {
            current: Vec::new(),
            last: None,
        }
    }
}

impl<T: Component> Sequence<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &[T] {
        &self.current
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        self.current.get(pos)
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.current.get_mut(pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.current.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.current.iter_mut()
    }

    /// Stable sort by the component's natural order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.current.sort();
    }
}

impl<T: Component> Tool for Sequence<T> {
    type Item = T;
    const NAME: &'static str = "sequence";

    fn len(&self) -> usize {
        self.current.len()
    }

    fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    fn admit(&mut self, instance: T) {
        self.current.push(instance);
    }

    fn clear(&mut self) {
        self.current.clear();
        self.last = None;
    }

    fn append(&mut self, entity: &T) -> Result<(), ToolError> {
        tracing::trace!(tool = Self::NAME, id = %entity.id(), "append");
        self.current.push(entity.copy());
        Ok(())
    }

    fn insert(&mut self, pos: usize, entity: &T) -> Result<(), ToolError> {
        let pos = pos.min(self.current.len());
        self.current.insert(pos, entity.copy());
        Ok(())
    }

    fn index(&self, id: &str, start: usize, end: Option<usize>) -> Result<usize, ToolError> {
        position_in(self.current.iter(), id, start, end).ok_or_else(|| ToolError::not_found::<T>(id))
    }

    fn remove(&mut self, id: &str) -> Result<T, ToolError> {
        let pos = self
            .current
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| ToolError::not_found::<T>(id))?;
        Ok(self.current.remove(pos))
    }

    fn count(&self, id: &str) -> usize {
        self.current.iter().filter(|item| item.id() == id).count()
    }

    fn reverse(&mut self) -> Result<(), ToolError> {
        self.current.reverse();
        Ok(())
    }

    fn pop(&mut self) -> Result<T, ToolError> {
        let item = self.current.pop().ok_or(ToolError::Empty {
            tool: Self::NAME,
            operation: "pop",
        })?;
        tracing::debug!(tool = Self::NAME, id = %item.id(), "popped");
        self.last = Some(item.clone());
        Ok(item)
    }

    fn by_id(&self, id: &str) -> Vec<&T> {
        self.current.iter().filter(|item| item.id() == id).collect()
    }
}

impl Sequence<Dice> {
    /// Rolls every dice group once, in order, and returns each group's raw
    /// results.
    pub fn roll(&mut self, rng: &mut dyn RandomSource) -> Vec<Vec<u32>> {
        self.current
            .iter_mut()
            .map(|dice| dice.roll(rng).to_vec())
            .collect()
    }

    /// Rolls every dice group once and returns each group's mapped faces.
    pub fn roll_mapped(&mut self, rng: &mut dyn RandomSource) -> Vec<Vec<Face>> {
        self.current
            .iter_mut()
            .map(|dice| dice.roll_mapped(rng).to_vec())
            .collect()
    }

    /// Sum of every group's last roll.
    pub fn total(&self) -> u64 {
        self.current.iter().map(Dice::total).sum()
    }
}
