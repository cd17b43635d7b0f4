//! Insertion-ordered string-to-string map.
//!
//! Every formatter in this crate takes a [`FlatMap`]. Keys and values are
//! `String` by construction, and iteration follows insertion order so the
//! rendered header and build arguments are deterministic.

use std::collections::BTreeMap;

/// Single-level map of textual keys to textual values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatMap {
    entries: Vec<(String, String)>,
}

impl FlatMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`.
    ///
    /// An existing key keeps its position and has its value replaced; the
    /// previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Lexicographically sorted copy, used for JSON output.
    pub fn to_sorted(&self) -> BTreeMap<String, String> {
        self.entries.iter().cloned().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FlatMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for FlatMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for FlatMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let map: FlatMap = [("zeta", "1"), ("alpha", "2"), ("mid", "3")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn insert_existing_key_replaces_in_place() {
        let mut map: FlatMap = [("a", "1"), ("b", "2")].into_iter().collect();
        let old = map.insert("a", "9");
        assert_eq!(old.as_deref(), Some("1"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().next(), Some(("a", "9")));
    }

    #[test]
    fn to_sorted_orders_keys() {
        let map: FlatMap = [("b", "2"), ("a", "1")].into_iter().collect();
        let sorted: Vec<String> = map.to_sorted().into_keys().collect();
        assert_eq!(sorted, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn empty_map() {
        let map = FlatMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get("missing"), None);
    }
}
