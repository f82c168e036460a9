use std::collections::{HashMap, VecDeque};

use super::arrange::{self, ArrangeError};
use super::{Tool, ToolError, position_in};
use crate::component::{Card, Component};
use crate::registry::Registry;
use crate::rng::{self, RandomSource};

/// Double-ended queue of instances.
///
/// The right end is the "top": `append`, `pop` and `draw` work there, while
/// the `*left` variants work on the bottom.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(bound(serialize = "T: serde::Serialize"))
)]
pub struct Deque<T> {
    current: VecDeque<T>,
    last: Option<T>,
}

/// A deque of cards.
pub type Deck = Deque<Card>;

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self {
            current: VecDeque::new(),
            last: None,
        }
    }
}

impl<T: Component> Deque<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &VecDeque<T> {
        &self.current
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        self.current.get(pos)
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.current.get_mut(pos)
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.current.iter()
    }

    pub fn iter_mut(&mut self) -> std::collections::vec_deque::IterMut<'_, T> {
        self.current.iter_mut()
    }

    /// Uniformly permutes `current`.
    pub fn shuffle(&mut self, rng: &mut dyn RandomSource) {
        rng::shuffle(rng, self.current.make_contiguous());
        tracing::debug!(tool = Self::NAME, len = self.current.len(), "shuffled");
    }

    /// Copies `entity` onto the left end.
    pub fn appendleft(&mut self, entity: &T) {
        self.current.push_front(entity.copy());
    }

    /// Copies each entity onto the left end in turn, so the last one given
    /// ends up leftmost.
    pub fn extendleft<'a>(&mut self, entities: impl IntoIterator<Item = &'a T>)
    where
        T: 'a,
    {
        for entity in entities {
            self.current.push_front(entity.copy());
        }
    }

    /// Removes the leftmost instance, remembers it as `last` and returns it.
    pub fn popleft(&mut self) -> Result<T, ToolError> {
        let item = self.current.pop_front().ok_or(ToolError::Empty {
            tool: Self::NAME,
            operation: "popleft",
        })?;
        tracing::debug!(tool = Self::NAME, id = %item.id(), "popped left");
        self.last = Some(item.clone());
        Ok(item)
    }

    /// Pops up to `n` instances from the right, in pop order.
    pub fn draw(&mut self, n: usize) -> Vec<T> {
        let mut drawn = Vec::with_capacity(n.min(self.current.len()));
        while drawn.len() < n {
            match self.pop() {
                Ok(item) => drawn.push(item),
                Err(_) => break,
            }
        }
        drawn
    }

    /// Rotates `n` steps to the right (negative `n` rotates left).
    pub fn rotate(&mut self, n: isize) {
        let len = self.current.len();
        if len == 0 {
            return;
        }
        let steps = n.rem_euclid(len as isize) as usize;
        self.current.rotate_right(steps);
    }

    /// Rearranges the rightmost `order.len()` instances so that, read left to
    /// right, their ids equal `order`.
    pub fn reorder(&mut self, order: &[&str]) -> Result<(), ToolError> {
        let len = self.current.len();
        if order.len() > len {
            return Err(ArrangeError::OrderTooLong {
                order: order.len(),
                len,
            }
            .into());
        }
        self.arrange(len - order.len(), order)
    }

    /// Same as [`reorder`](Self::reorder) for the leftmost instances.
    pub fn reorderleft(&mut self, order: &[&str]) -> Result<(), ToolError> {
        let len = self.current.len();
        if order.len() > len {
            return Err(ArrangeError::OrderTooLong {
                order: order.len(),
                len,
            }
            .into());
        }
        self.arrange(0, order)
    }

    /// Same as [`reorder`](Self::reorder) for the segment starting at `start`.
    pub fn reorderfrom(&mut self, order: &[&str], start: usize) -> Result<(), ToolError> {
        let len = self.current.len();
        if !order.is_empty() && start.saturating_add(order.len()) > len {
            return Err(ArrangeError::OutOfBounds {
                start,
                order: order.len(),
                len,
            }
            .into());
        }
        self.arrange(start, order)
    }

    fn arrange(&mut self, start: usize, order: &[&str]) -> Result<(), ToolError> {
        if order.is_empty() {
            return Err(ArrangeError::EmptyOrder.into());
        }
        let end = start + order.len();
        let sources = arrange::plan(self.current.range(start..end), order)?;

        let tail = self.current.split_off(end);
        let mut slots: Vec<Option<T>> = self.current.drain(start..).map(Some).collect();
        self.current
            .extend(sources.iter().filter_map(|&source| slots[source].take()));
        self.current.extend(tail);

        tracing::debug!(tool = Self::NAME, start, ?order, "reordered");
        Ok(())
    }

    /// Finds up to `n` instances per requested id, scanning left to right.
    ///
    /// With `remove`, the matches are taken out of `current` (the rest keep
    /// their order); otherwise copies of the matches are returned and
    /// `current` is untouched. Ids that are missing, or present fewer times
    /// than requested, are simply under-filled.
    pub fn search<S>(&mut self, query: impl IntoIterator<Item = (S, usize)>, remove: bool) -> Vec<T>
    where
        S: AsRef<str>,
    {
        let mut wanted: HashMap<String, usize> = HashMap::new();
        for (id, n) in query {
            *wanted.entry(id.as_ref().to_owned()).or_insert(0) += n;
        }

        let mut found = Vec::new();
        if remove {
            let mut kept = VecDeque::with_capacity(self.current.len());
            for item in self.current.drain(..) {
                match wanted.get_mut(item.id().as_str()) {
                    Some(n) if *n > 0 => {
                        *n -= 1;
                        found.push(item);
                    }
                    _ => kept.push_back(item),
                }
            }
            self.current = kept;
        } else {
            for item in &self.current {
                if let Some(n) = wanted.get_mut(item.id().as_str()).filter(|n| **n > 0) {
                    *n -= 1;
                    found.push(item.clone());
                }
            }
        }

        tracing::debug!(tool = Self::NAME, found = found.len(), remove, "searched");
        found
    }

    /// Picks `count` instances uniformly at random.
    ///
    /// With `remove`, each pick is taken out of `current` before the next one
    /// (no repeats, stops early once empty). Without it, picks are independent
    /// and may repeat; an empty deque yields nothing.
    pub fn get_random(&mut self, rng: &mut dyn RandomSource, count: usize, remove: bool) -> Vec<T> {
        let mut picked = Vec::with_capacity(count);
        for _ in 0..count {
            if self.current.is_empty() {
                break;
            }
            let pos = rng.below(self.current.len());
            let item = if remove {
                self.current.remove(pos)
            } else {
                self.current.get(pos).cloned()
            };
            picked.extend(item);
        }
        tracing::debug!(tool = Self::NAME, picked = picked.len(), remove, "random pick");
        picked
    }
}

impl<T: Component> Tool for Deque<T> {
    type Item = T;
    const NAME: &'static str = "deque";

    fn len(&self) -> usize {
        self.current.len()
    }

    fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    fn admit(&mut self, instance: T) {
        self.current.push_back(instance);
    }

    fn clear(&mut self) {
        self.current.clear();
        self.last = None;
    }

    fn append(&mut self, entity: &T) -> Result<(), ToolError> {
        tracing::trace!(tool = Self::NAME, id = %entity.id(), "append");
        self.current.push_back(entity.copy());
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
        let pos = self.current.iter().position(|item| item.id() == id);
        pos.and_then(|pos| self.current.remove(pos))
            .ok_or_else(|| ToolError::not_found::<T>(id))
    }

    fn count(&self, id: &str) -> usize {
        self.current.iter().filter(|item| item.id() == id).count()
    }

    fn reverse(&mut self) -> Result<(), ToolError> {
        self.current.make_contiguous().reverse();
        Ok(())
    }

    fn pop(&mut self) -> Result<T, ToolError> {
        let item = self.current.pop_back().ok_or(ToolError::Empty {
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

impl Deque<Card> {
    /// Like `deal(registry, None)`, but each template contributes `count`
    /// copies (a template with count 3 yields three cards).
    pub fn deal_stacked(&mut self, registry: &Registry<Card>) -> &mut Self {
        self.clear();
        for template in registry.values() {
            for _ in 0..template.count() {
                self.current.push_back(template.copy());
            }
        }
        tracing::debug!(tool = Self::NAME, dealt = self.current.len(), "dealt stacked");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, PieceError};
    use crate::rng::PcgSource;

    fn deck(ids: &[&str]) -> Deck {
        let mut deck = Deck::new();
        for id in ids {
            deck.append(&Card::new(id).unwrap()).unwrap();
        }
        deck
    }

    fn ids(deck: &Deck) -> Vec<&str> {
        deck.iter().map(|card| card.id().as_str()).collect()
    }

    #[test]
    fn left_and_right_ends() {
        let mut deck = deck(&["b"]);
        deck.appendleft(&Card::new("a").unwrap());
        deck.extendleft([&Card::new("y").unwrap(), &Card::new("z").unwrap()]);
        assert_eq!(ids(&deck), vec!["z", "y", "a", "b"]);

        assert_eq!(deck.popleft().unwrap().id(), "z");
        assert_eq!(deck.pop().unwrap().id(), "b");
        assert_eq!(deck.last().map(|c| c.id().as_str()), Some("b"));
        assert_eq!(ids(&deck), vec!["y", "a"]);
    }

    #[test]
    fn popleft_on_empty_fails() {
        let mut deck = Deck::new();
        let err = deck.popleft().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Empty);
    }

    #[test]
    fn rotate_both_ways() {
        let mut deck = deck(&["a", "b", "c", "d"]);
        deck.rotate(1);
        assert_eq!(ids(&deck), vec!["d", "a", "b", "c"]);
        deck.rotate(-2);
        assert_eq!(ids(&deck), vec!["b", "c", "d", "a"]);
        deck.rotate(8);
        assert_eq!(ids(&deck), vec!["b", "c", "d", "a"]);
        Deck::new().rotate(3);
    }

    #[test]
    fn reorder_rightmost() {
        let mut deck = deck(&["a", "b", "c", "d"]);
        deck.reorder(&["d", "b", "c"]).unwrap();
        assert_eq!(ids(&deck), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn reorder_left_and_from() {
        let mut deck = deck(&["a", "b", "c", "d"]);
        deck.reorderleft(&["b", "a"]).unwrap();
        assert_eq!(ids(&deck), vec!["b", "a", "c", "d"]);

        deck.reorderfrom(&["d", "a", "c"], 1).unwrap();
        assert_eq!(ids(&deck), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn invalid_reorders_leave_deque_untouched() {
        let mut deck = deck(&["a", "b", "c"]);

        let err = deck.reorder(&["a", "b", "c", "d"]).unwrap_err();
        assert_eq!(
            err,
            ToolError::Arrange(ArrangeError::OrderTooLong { order: 4, len: 3 })
        );
        assert!(matches!(
            deck.reorder(&[]).unwrap_err(),
            ToolError::Arrange(ArrangeError::EmptyOrder)
        ));
        assert!(matches!(
            deck.reorder(&["a", "c"]).unwrap_err(),
            ToolError::Arrange(ArrangeError::Mismatch { .. })
        ));
        assert!(matches!(
            deck.reorderfrom(&["b", "c"], 2).unwrap_err(),
            ToolError::Arrange(ArrangeError::OutOfBounds { .. })
        ));
        assert_eq!(err.kind(), ErrorKind::Arrange);
        assert_eq!(ids(&deck), vec!["a", "b", "c"]);
    }

    #[test]
    fn search_without_removal_copies() {
        let mut deck = deck(&["x", "y", "x", "z", "x"]);
        let found = deck.search([("x", 2), ("q", 1)], false);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|card| card.id() == "x"));
        assert_eq!(deck.len(), 5);
    }

    #[test]
    fn search_with_removal_takes_leftmost() {
        let mut deck = deck(&["x", "y", "x", "z", "x"]);
        let mut query = HashMap::new();
        query.insert("x", 2);
        query.insert("z", 3);
        let found = deck.search(query, true);
        assert_eq!(found.len(), 3);
        assert_eq!(ids(&deck), vec!["y", "x"]);
    }

    #[test]
    fn get_random_respects_removal() {
        let mut rng = PcgSource::new(17);
        let mut deck = deck(&["a", "b", "c"]);

        let picks = deck.get_random(&mut rng, 10, false);
        assert_eq!(picks.len(), 10);
        assert_eq!(deck.len(), 3);

        let picks = deck.get_random(&mut rng, 5, true);
        assert_eq!(picks.len(), 3);
        assert!(deck.is_empty());
        let mut seen: Vec<&str> = picks.iter().map(|c| c.id().as_str()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["a", "b", "c"]);

        assert!(deck.get_random(&mut rng, 2, false).is_empty());
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut rng = PcgSource::new(23);
        let mut deck = deck(&["a", "b", "c", "d", "e", "f"]);
        deck.shuffle(&mut rng);
        let mut after = ids(&deck);
        after.sort_unstable();
        assert_eq!(after, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn deal_stacked_expands_counts() {
        let mut registry = Registry::new();
        registry
            .add(Card::builder("pawn").count(3).build().unwrap(), None)
            .unwrap();
        registry.add(Card::new("king").unwrap(), None).unwrap();

        let mut deck = Deck::new();
        deck.deal_stacked(&registry);
        assert_eq!(ids(&deck), vec!["pawn", "pawn", "pawn", "king"]);

        deck.deal(&registry, None);
        assert_eq!(ids(&deck), vec!["pawn", "king"]);
    }

    #[test]
    fn draw_pops_from_the_top() {
        let mut deck = deck(&["a", "b", "c"]);
        let hand = deck.draw(2);
        assert_eq!(
            hand.iter().map(|c| c.id().as_str()).collect::<Vec<_>>(),
            vec!["c", "b"]
        );
        assert_eq!(deck.draw(5).len(), 1);
        assert_eq!(deck.last().map(|c| c.id().as_str()), Some("a"));
    }

    #[test]
    fn remove_and_index() {
        let mut deck = deck(&["a", "b", "a"]);
        assert_eq!(deck.index("a", 1, None).unwrap(), 2);
        assert_eq!(deck.remove("a").unwrap().id(), "a");
        assert_eq!(ids(&deck), vec!["b", "a"]);
        assert!(matches!(
            deck.remove("q").unwrap_err(),
            ToolError::NotFound { kind: "card", .. }
        ));
    }
}
