//! # Selection History Module
//!
//! Records how often items are selected from a listing, persists the
//! counts, and merges them with a fresh listing into one ranked
//! ordering: frequently chosen items first, never-chosen items last.
//!
//! ## Storage
//!
//! History lives in a single JSON document, by default under the
//! platform data directory:
//! - Linux: `~/.local/share/frecent/history.json`
//! - macOS: `~/Library/Application Support/frecent/history.json`
//! - Windows: `%APPDATA%\frecent\history.json`
//!
//! ## Data Format
//!
//! ```json
//! {
//!   "Items": {
//!     "/home/user/work/notes": 12,
//!     "/home/user/work/src": 6
//!   },
//!   "Prefix": "/home/user/"
//! }
//! ```
//!
//! Item ids are canonicalized against the common prefix of the
//! configured roots, so the same history file keeps working when the
//! directories are listed under varying root combinations.

mod rank;
mod store;

pub use rank::{rank, RankedList};
pub use store::{HistoryStore, SelectionHistory};
