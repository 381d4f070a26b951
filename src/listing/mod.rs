//! # Candidate Listing
//!
//! Enumerates the items currently present under the configured root
//! locations. The listing is ephemeral: it is produced once per
//! invocation, merged with the selection history and thrown away.
//!
//! ## Behavior
//!
//! - One directory level per root; no recursion.
//! - Enumeration order is preserved verbatim and used for items that have
//!   never been selected.
//! - A root that does not exist or cannot be listed is skipped so that a
//!   conditionally mounted location does not fail the whole run.

mod roots;

pub use roots::{expand_home, list_root_contents, split_roots};
