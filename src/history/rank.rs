//! # Rank Engine
//!
//! Merges the persisted selection counts with a live listing into one
//! ordered sequence: counted items first (most selected on top), then
//! items that have never been selected, in enumeration order.

use std::collections::{BTreeMap, HashSet};

use super::store::HistoryStore;

/// Ordered outcome of merging the history with a live listing.
#[derive(Debug)]
pub struct RankedList {
    /// Items ordered most-selected first, with never-selected live items
    /// appended in enumeration order.
    pub items: Vec<String>,
    /// Number of stale history entries dropped while ranking. The caller
    /// persists the store when nonzero to keep the backing file in sync.
    pub evicted: usize,
}

/// Rank the live items against the store's selection counts.
///
/// Stale history entries are evicted first. The remaining entries are
/// grouped by count and emitted from the highest count down; ties within
/// a count group are broken lexicographically so repeated runs print a
/// stable order. Live items with no history follow, in the order the
/// enumerator produced them.
pub fn rank(store: &mut HistoryStore, live: &[String]) -> RankedList {
    let canonical: Vec<String> = live.iter().map(|item| store.canonicalize(item)).collect();
    let live_set: HashSet<String> = canonical.iter().cloned().collect();

    let evicted = store.evict_stale(&live_set);

    let mut groups: BTreeMap<u64, Vec<&str>> = BTreeMap::new();
    for (id, count) in store.items() {
        groups.entry(*count).or_default().push(id);
    }

    let mut items: Vec<String> = Vec::with_capacity(canonical.len());
    for (_, mut group) in groups.into_iter().rev() {
        group.sort_unstable();
        items.extend(group.into_iter().map(ToString::to_string));
    }

    for id in canonical {
        if !store.items().contains_key(&id) {
            items.push(id);
        }
    }

    RankedList { items, evicted }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryStore;
    use tempfile::TempDir;

    fn store_with_counts(dir: &TempDir, counts: &[(&str, u64)]) -> HistoryStore {
        let path = dir.path().join("history.json");
        let mut store = HistoryStore::load(path, String::new()).expect("load store");
        for (item, count) in counts {
            for _ in 0..*count {
                store.record(item).expect("record");
            }
        }
        store
    }

    fn live(items: &[&str]) -> Vec<String> {
        items.iter().map(|i| (*i).to_string()).collect()
    }

    #[test]
    fn test_orders_by_count_descending_with_lexicographic_ties() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut store = store_with_counts(
            &temp_dir,
            &[("bar", 12), ("foo", 6), ("baz", 6), ("qux", 1)],
        );

        let ranked = rank(&mut store, &live(&["foo", "bar", "baz", "qux"]));

        assert_eq!(ranked.items, vec!["bar", "baz", "foo", "qux"]);
        assert_eq!(ranked.evicted, 0);
    }

    #[test]
    fn test_new_items_follow_counted_ones_in_enumeration_order() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut store = store_with_counts(&temp_dir, &[("old", 3)]);

        let ranked = rank(&mut store, &live(&["zeta", "old", "alpha"]));

        assert_eq!(ranked.items, vec!["old", "zeta", "alpha"]);
    }

    #[test]
    fn test_stale_entries_are_evicted_and_not_ranked() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut store = store_with_counts(&temp_dir, &[("kept", 2), ("gone", 9)]);

        let ranked = rank(&mut store, &live(&["kept", "fresh"]));

        assert_eq!(ranked.items, vec!["kept", "fresh"]);
        assert_eq!(ranked.evicted, 1);
        assert!(!store.items().contains_key("gone"));
    }

    #[test]
    fn test_empty_store_preserves_enumeration_order() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut store = store_with_counts(&temp_dir, &[]);

        let ranked = rank(&mut store, &live(&["c", "a", "b"]));

        assert_eq!(ranked.items, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_empty_listing_evicts_everything() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let mut store = store_with_counts(&temp_dir, &[("a", 1), ("b", 2)]);

        let ranked = rank(&mut store, &[]);

        assert!(ranked.items.is_empty());
        assert_eq!(ranked.evicted, 2);
    }
}
