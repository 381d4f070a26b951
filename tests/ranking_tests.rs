//! End-to-end listing flow: enumerate real directories, merge with
//! recorded history, and check the ranked ordering.

use std::collections::HashSet;
use std::fs;

use frecent::history::{rank, HistoryStore};
use frecent::listing;
use frecent::prefix;
use tempfile::TempDir;

/// Build a root directory with the given entry names.
fn seed_root(dir: &TempDir, name: &str, entries: &[&str]) -> String {
    let root = dir.path().join(name);
    fs::create_dir_all(&root).expect("create root");
    for entry in entries {
        fs::write(root.join(entry), "").expect("seed entry");
    }
    root.to_string_lossy().into_owned()
}

/// Frequently selected entries lead the listing; the rest follow.
#[test]
fn test_selected_entries_rank_above_unselected_ones() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let root = seed_root(&temp_dir, "docs", &["alpha", "beta", "gamma"]);
    let history_file = temp_dir.path().join("history.json");

    let roots = vec![root.clone()];
    let common = prefix::longest_common_prefix(&roots).expect("prefix");
    let mut store = HistoryStore::load(history_file, common).expect("load store");

    let beta = format!("{}/beta", root);
    for _ in 0..3 {
        store.record(&beta).expect("record");
    }
    let gamma = format!("{}/gamma", root);
    store.record(&gamma).expect("record");

    let live = listing::list_root_contents(&roots);
    let ranked = rank(&mut store, &live);

    assert_eq!(ranked.items[0], beta);
    assert_eq!(ranked.items[1], gamma);
    assert_eq!(ranked.items.len(), 3);
    assert!(ranked.items[2].ends_with("/alpha"));
    assert_eq!(ranked.evicted, 0);
}

/// Entries under several roots are merged into one listing, keyed
/// against the roots' common prefix.
#[test]
fn test_multiple_roots_are_merged() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let work = seed_root(&temp_dir, "work", &["report"]);
    let play = seed_root(&temp_dir, "play", &["game"]);
    let history_file = temp_dir.path().join("history.json");

    let roots = vec![work.clone(), play.clone()];
    let common = prefix::longest_common_prefix(&roots).expect("prefix");
    let mut store = HistoryStore::load(history_file, common).expect("load store");

    let game = format!("{}/game", play);
    store.record(&game).expect("record");

    let live = listing::list_root_contents(&roots);
    let ranked = rank(&mut store, &live);

    assert_eq!(ranked.items[0], game);
    let all: HashSet<&str> = ranked.items.iter().map(String::as_str).collect();
    assert!(all.contains(format!("{}/report", work).as_str()));
    assert_eq!(ranked.items.len(), 2);
}

/// A recorded entry that disappears from disk is evicted from the
/// ranking and from the backing file once the store is persisted.
#[test]
fn test_deleted_entries_are_evicted_from_ranking_and_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let root = seed_root(&temp_dir, "docs", &["kept", "doomed"]);
    let history_file = temp_dir.path().join("history.json");

    let roots = vec![root.clone()];
    let common = prefix::longest_common_prefix(&roots).expect("prefix");
    let kept = format!("{}/kept", root);
    let doomed = format!("{}/doomed", root);

    {
        let mut store =
            HistoryStore::load(history_file.clone(), common.clone()).expect("load store");
        store.record(&kept).expect("record");
        store.record(&doomed).expect("record");
    }

    fs::remove_file(&doomed).expect("delete entry");

    {
        let mut store =
            HistoryStore::load(history_file.clone(), common.clone()).expect("reload store");
        let live = listing::list_root_contents(&roots);
        let ranked = rank(&mut store, &live);

        assert_eq!(ranked.evicted, 1);
        assert!(!ranked.items.iter().any(|i| i == &doomed));
        store.persist().expect("persist after eviction");
    }

    let store = HistoryStore::load(history_file, common).expect("final load");
    assert!(store.items().contains_key(&kept));
    assert!(!store.items().contains_key(&doomed));
}

/// History recorded while listing two roots still applies when only one
/// of them is listed later.
#[test]
fn test_history_survives_changing_root_combinations() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let work = seed_root(&temp_dir, "work", &["report", "draft"]);
    let play = seed_root(&temp_dir, "play", &["game"]);
    let history_file = temp_dir.path().join("history.json");

    let report = format!("{}/report", work);

    {
        let both = vec![work.clone(), play];
        let common = prefix::longest_common_prefix(&both).expect("prefix");
        let mut store = HistoryStore::load(history_file.clone(), common).expect("load store");
        store.record(&report).expect("record");
        store.record(&report).expect("record");
    }

    let only_work = vec![work];
    let common = prefix::longest_common_prefix(&only_work).expect("prefix");
    let mut store = HistoryStore::load(history_file, common).expect("reload store");

    let live = listing::list_root_contents(&only_work);
    let ranked = rank(&mut store, &live);

    assert_eq!(ranked.items[0], report);
    assert_eq!(ranked.evicted, 0);
}
