//! # History Storage
//!
//! Owns the backing file and the in-memory selection counts.
//!
//! A selection is durable only after [`HistoryStore::persist`] succeeds;
//! everything else mutates memory only. Persisting an empty store is a
//! no-op so that a pre-existing file is never clobbered with an empty
//! map.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::listing::expand_home;

/// Selection counts as serialized to the backing file.
///
/// Keys are canonical item ids, values the number of times each item has
/// been selected. An entry only exists once the item has been selected at
/// least once; a zero count is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelectionHistory {
    /// Canonical item id -> selection count.
    #[serde(default)]
    pub items: HashMap<String, u64>,
    /// Common prefix of the configured roots the ids were canonicalized
    /// against.
    #[serde(default)]
    pub prefix: String,
}

impl SelectionHistory {
    /// Create an empty history canonicalizing against `prefix`.
    pub fn new(prefix: String) -> Self {
        Self {
            items: HashMap::new(),
            prefix,
        }
    }

    /// Canonical form of a raw selection: home expansion applied, then
    /// the id joined with the prefix unless it already lies under it.
    pub fn canonicalize(&self, raw: &str) -> String {
        let expanded = expand_home(raw);
        if expanded.starts_with(&self.prefix) {
            expanded
        } else {
            format!("{}{}", self.prefix, expanded)
        }
    }

    /// Record one selection, creating the entry at 1 if absent.
    pub fn record_selection(&mut self, raw: &str) {
        let id = self.canonicalize(raw);
        *self.items.entry(id).or_insert(0) += 1;
    }

    /// Drop every entry whose id is not in the live set.
    ///
    /// Returns the number of entries removed, so callers know whether the
    /// backing file needs to be rewritten.
    pub fn evict_stale(&mut self, live: &HashSet<String>) -> usize {
        let before = self.items.len();
        self.items.retain(|id, _| live.contains(id));
        before - self.items.len()
    }
}

/// Durable handle on the selection history.
#[derive(Debug)]
pub struct HistoryStore {
    /// The backing file holding the serialized history.
    path: PathBuf,
    /// Current in-memory history.
    history: SelectionHistory,
}

impl HistoryStore {
    /// Load the history at `path`, canonicalizing against `prefix`.
    ///
    /// A missing backing file is not an error: parent directories and an
    /// empty file are created eagerly, which doubles as a writability
    /// check so a later persist cannot fail for lack of access. An
    /// existing file that cannot be read fails with [`Error::Io`]; one
    /// that cannot be parsed fails with [`Error::Parse`]. A zero-length
    /// file deserializes as the empty history.
    pub fn load(path: PathBuf, prefix: String) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
            }
            fs::File::create(&path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            return Ok(Self {
                path,
                history: SelectionHistory::new(prefix),
            });
        }

        let contents = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let mut history = if contents.trim().is_empty() {
            SelectionHistory::default()
        } else {
            serde_json::from_str(&contents).map_err(|source| Error::Parse {
                path: path.clone(),
                source,
            })?
        };
        // Stored ids are full canonical ids, so a prefix change between
        // runs only affects how future selections are canonicalized.
        history.prefix = prefix;

        Ok(Self { path, history })
    }

    /// Record a selection and persist it.
    ///
    /// The selection is durable only once this returns `Ok`; a failed
    /// persist after the in-memory increment is surfaced to the caller.
    pub fn record(&mut self, raw: &str) -> Result<()> {
        self.history.record_selection(raw);
        self.persist()
    }

    /// Drop entries absent from the live set. See
    /// [`SelectionHistory::evict_stale`].
    pub fn evict_stale(&mut self, live: &HashSet<String>) -> usize {
        self.history.evict_stale(live)
    }

    /// Canonical form of a raw item id. See
    /// [`SelectionHistory::canonicalize`].
    pub fn canonicalize(&self, raw: &str) -> String {
        self.history.canonicalize(raw)
    }

    /// Write the history to the backing file.
    ///
    /// A store with zero entries is not written at all, so an existing
    /// file is never overwritten with an empty map. Parent directories
    /// are created as needed.
    pub fn persist(&self) -> Result<()> {
        if self.history.items.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: self.path.clone(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.history).map_err(|source| Error::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }

    /// The recorded selection counts.
    pub fn items(&self) -> &HashMap<String, u64> {
        &self.history.items
    }

    /// The prefix ids are canonicalized against.
    pub fn prefix(&self) -> &str {
        &self.history.prefix
    }

    /// The backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether any selections have been recorded.
    pub fn has_selections(&self) -> bool {
        !self.history.items.is_empty()
    }
}
