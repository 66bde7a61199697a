#![deny(missing_docs)]

//! # Collection Utilities
//!
//! Type-parametric helpers behind every container field in the tree. The
//! containers are `Option`-wrapped so an absent collection stays
//! distinguishable from an empty one, with one law throughout: only adding a
//! present value may materialize a collection; reads and no-ops never do.

use indexmap::IndexMap;

/// Inserts `value` under `key`, creating the map on first use.
///
/// A `None` value is a no-op: an absent map stays absent and an existing
/// entry is never cleared.
pub fn add_entry<V>(
    map: &mut Option<IndexMap<String, V>>,
    key: impl Into<String>,
    value: Option<V>,
) {
    if let Some(value) = value {
        map.get_or_insert_with(IndexMap::new).insert(key.into(), value);
    }
}

/// Removes `key` from the map; a no-op when the map or the key is absent.
pub fn remove_entry<V>(map: &mut Option<IndexMap<String, V>>, key: &str) {
    if let Some(map) = map.as_mut() {
        map.shift_remove(key);
    }
}

/// Applies `factory` to a present map, producing a transformed copy without
/// touching the original. Absent input stays absent.
pub fn replace_map<V, R>(
    map: Option<&IndexMap<String, V>>,
    factory: impl FnOnce(&IndexMap<String, V>) -> R,
) -> Option<R> {
    map.map(factory)
}

/// Takes a read-only snapshot of the map, or `None` when absent.
pub fn unmodifiable_map<V: Clone>(map: Option<&IndexMap<String, V>>) -> Option<FrozenMap<V>> {
    replace_map(map, |entries| FrozenMap {
        entries: entries.clone(),
    })
}

/// Appends `value` to the list, creating the list on first use.
///
/// A `None` value is a no-op: an absent list stays absent.
pub fn add_item<V>(list: &mut Option<Vec<V>>, value: Option<V>) {
    if let Some(value) = value {
        list.get_or_insert_with(Vec::new).push(value);
    }
}

/// Removes the first item equal to `value`; a no-op when the list is absent
/// or holds no such item.
pub fn remove_item<V: PartialEq>(list: &mut Option<Vec<V>>, value: &V) {
    if let Some(list) = list.as_mut() {
        if let Some(index) = list.iter().position(|item| item == value) {
            list.remove(index);
        }
    }
}

/// Applies `factory` to a present list, producing a transformed copy without
/// touching the original. Absent input stays absent.
pub fn replace_list<V, R>(
    list: Option<&[V]>,
    factory: impl FnOnce(&[V]) -> R,
) -> Option<R> {
    list.map(factory)
}

/// Takes a read-only snapshot of the list, or `None` when absent.
pub fn unmodifiable_list<V: Clone>(list: Option<&[V]>) -> Option<FrozenList<V>> {
    replace_list(list, |items| FrozenList {
        items: items.to_vec(),
    })
}

/// An ordered, read-only snapshot of a string-keyed map.
///
/// There is no mutating access; the snapshot owns its entries, so later
/// mutation of the source map is not reflected here.
#[derive(Debug, Clone, PartialEq)]
pub struct FrozenMap<V> {
    entries: IndexMap<String, V>,
}

impl<V> FrozenMap<V> {
    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Whether the snapshot holds `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// An ordered, read-only snapshot of a list.
///
/// Same ownership rule as [`FrozenMap`]: later mutation of the source list
/// is not reflected.
#[derive(Debug, Clone, PartialEq)]
pub struct FrozenList<V> {
    items: Vec<V>,
}

impl<V> FrozenList<V> {
    /// Item at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.items.get(index)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_entry_none_value_keeps_map_absent() {
        // Case: add(key, None) on an absent map.
        // Expect: map stays absent, not empty.
        let mut map: Option<IndexMap<String, u32>> = None;
        add_entry(&mut map, "a", None);
        assert!(map.is_none());
    }

    #[test]
    fn test_add_entry_none_value_keeps_existing_entry() {
        let mut map: Option<IndexMap<String, u32>> = None;
        add_entry(&mut map, "a", Some(1));
        add_entry(&mut map, "a", None);
        assert_eq!(map.as_ref().unwrap().get("a"), Some(&1));
    }

    #[test]
    fn test_add_entry_creates_and_overwrites() {
        let mut map: Option<IndexMap<String, u32>> = None;
        add_entry(&mut map, "a", Some(1));
        add_entry(&mut map, "b", Some(2));
        add_entry(&mut map, "a", Some(3));

        let map = map.unwrap();
        assert_eq!(map.get("a"), Some(&3));
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_remove_entry_absent_map_is_noop() {
        let mut map: Option<IndexMap<String, u32>> = None;
        remove_entry(&mut map, "a");
        assert!(map.is_none());
    }

    #[test]
    fn test_remove_entry_preserves_order() {
        let mut map: Option<IndexMap<String, u32>> = None;
        add_entry(&mut map, "a", Some(1));
        add_entry(&mut map, "b", Some(2));
        add_entry(&mut map, "c", Some(3));
        remove_entry(&mut map, "b");

        let keys: Vec<&str> = map.as_ref().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn test_replace_map_absent_is_noop() {
        let replaced = replace_map(None::<&IndexMap<String, u32>>, |m| m.len());
        assert!(replaced.is_none());
    }

    #[test]
    fn test_unmodifiable_map_is_snapshot() {
        // The frozen view owns its entries; mutating the source afterwards
        // must not show up in the snapshot.
        let mut map: Option<IndexMap<String, u32>> = None;
        add_entry(&mut map, "a", Some(1));

        let frozen = unmodifiable_map(map.as_ref()).unwrap();
        add_entry(&mut map, "b", Some(2));

        assert_eq!(frozen.len(), 1);
        assert!(frozen.contains_key("a"));
        assert!(!frozen.contains_key("b"));
    }

    #[test]
    fn test_unmodifiable_map_absent() {
        assert!(unmodifiable_map(None::<&IndexMap<String, u32>>).is_none());
    }

    #[test]
    fn test_add_item_none_value_keeps_list_absent() {
        let mut list: Option<Vec<u32>> = None;
        add_item(&mut list, None);
        assert!(list.is_none());
    }

    #[test]
    fn test_remove_item_first_match_only() {
        let mut list: Option<Vec<u32>> = None;
        add_item(&mut list, Some(1));
        add_item(&mut list, Some(2));
        add_item(&mut list, Some(1));
        remove_item(&mut list, &1);
        assert_eq!(list.unwrap(), vec![2, 1]);
    }

    #[test]
    fn test_remove_item_absent_list_is_noop() {
        let mut list: Option<Vec<u32>> = None;
        remove_item(&mut list, &1);
        assert!(list.is_none());
    }

    #[test]
    fn test_unmodifiable_list_is_snapshot() {
        let mut list: Option<Vec<u32>> = None;
        add_item(&mut list, Some(1));

        let frozen = unmodifiable_list(list.as_deref()).unwrap();
        add_item(&mut list, Some(2));

        assert_eq!(frozen.len(), 1);
        assert_eq!(frozen.get(0), Some(&1));
        assert_eq!(frozen.get(1), None);
    }
}
