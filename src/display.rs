//! # Display Stripping
//!
//! Output formatting helper that keeps only the trailing path components
//! of an item. Carries no state; listings are stored and ranked with
//! their full identifiers regardless of how they are displayed.

/// Keep only the last `keep` path components of `item`.
///
/// With `keep == 0` the item is returned unchanged. Empty components
/// (leading or doubled separators) are not counted, and an item with
/// `keep` or fewer components is returned as-is rather than re-padded.
pub fn strip(item: &str, keep: usize) -> String {
    if keep == 0 {
        return item.to_string();
    }
    let components: Vec<&str> = item.split('/').filter(|c| !c.is_empty()).collect();
    if components.len() > keep {
        components[components.len() - keep..].join("/")
    } else {
        item.to_string()
    }
}
