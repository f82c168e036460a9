//! Free-form per-instance tallies.

use std::collections::BTreeMap;

/// Named integer tallies attached to every entity instance.
///
/// Not part of an entity's identity: equality ignores it and `copy()` starts
/// the new instance with an empty counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Counter(BTreeMap<String, i64>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for `key`, 0 when unset.
    pub fn get(&self, key: &str) -> i64 {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn set(&mut self, key: impl Into<String>, value: i64) {
        self.0.insert(key.into(), value);
    }

    /// Adds `delta` to `key` (starting from 0) and returns the new value.
    pub fn add(&mut self, key: impl Into<String>, delta: i64) -> i64 {
        let slot = self.0.entry(key.into()).or_insert(0);
        *slot += delta;
        *slot
    }

    pub fn remove(&mut self, key: &str) -> Option<i64> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_keys_read_as_zero() {
        let counter = Counter::new();
        assert_eq!(counter.get("wins"), 0);
        assert!(!counter.contains("wins"));
    }

    #[test]
    fn add_accumulates_from_zero() {
        let mut counter = Counter::new();
        assert_eq!(counter.add("rolls", 1), 1);
        assert_eq!(counter.add("rolls", 2), 3);
        assert_eq!(counter.add("debt", -4), -4);
        assert_eq!(counter.len(), 2);
    }

    #[test]
    fn set_remove_and_clear() {
        let mut counter = Counter::new();
        counter.set("hp", 10);
        assert_eq!(counter.remove("hp"), Some(10));
        assert_eq!(counter.remove("hp"), None);

        counter.set("a", 1);
        counter.set("b", 2);
        assert_eq!(counter.iter().collect::<Vec<_>>(), vec![("a", 1), ("b", 2)]);
        counter.clear();
        assert!(counter.is_empty());
    }
}
