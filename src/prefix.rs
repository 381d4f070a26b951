//! # Common Prefix
//!
//! Computes the longest common prefix of the configured root locations.
//! The prefix is stored alongside the history so that entries can be
//! keyed relative to it and stay valid when the same directories are
//! listed under different root combinations.

use crate::error::{Error, Result};

/// Longest common prefix of a list of root locations.
///
/// Splits the list in half, computes the prefix of each half and combines
/// the two results pairwise, keeping the recursion depth logarithmic in
/// the number of roots. A single root is returned unchanged. The result
/// is not guaranteed to end on a path separator.
///
/// Fails with [`Error::Configuration`] when the list is empty.
pub fn longest_common_prefix(roots: &[String]) -> Result<String> {
    if roots.is_empty() {
        return Err(Error::Configuration(
            "at least one root location is required".to_string(),
        ));
    }
    Ok(prefix_of_range(roots, 0, roots.len() - 1).to_string())
}

/// Prefix of `roots[left..=right]`, divide and conquer over the index range.
fn prefix_of_range(roots: &[String], left: usize, right: usize) -> &str {
    if left == right {
        return &roots[left];
    }
    let mid = (left + right) / 2;
    let left_prefix = prefix_of_range(roots, left, mid);
    let right_prefix = prefix_of_range(roots, mid + 1, right);
    common_prefix(left_prefix, right_prefix)
}

/// Pairwise prefix of two strings, stopping at the first mismatch or at
/// the end of the shorter one.
fn common_prefix<'a>(left: &'a str, right: &str) -> &'a str {
    let mut end = 0;
    for (l, r) in left.chars().zip(right.chars()) {
        if l != r {
            break;
        }
        end += l.len_utf8();
    }
    &left[..end]
}
