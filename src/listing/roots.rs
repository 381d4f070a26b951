use std::path::Path;

use walkdir::WalkDir;

/// Expand a leading `~` to the user's home directory.
///
/// Only the first occurrence is substituted; paths without a tilde are
/// returned unchanged.
pub fn expand_home(path: &str) -> String {
    if !path.starts_with('~') {
        return path.to_string();
    }
    let home = std::env::var("HOME").unwrap_or_default();
    path.replacen('~', &home, 1)
}

/// Split a comma-separated root spec into individual root locations.
pub fn split_roots(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// List the immediate contents of every root, in enumeration order.
///
/// Roots that do not exist are skipped silently; entries that cannot be
/// read are skipped with a warning. Either way the remaining roots are
/// still listed.
pub fn list_root_contents(roots: &[String]) -> Vec<String> {
    let mut items = Vec::new();
    for root in roots {
        if !Path::new(root).exists() {
            continue;
        }
        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    eprintln!("Warning: failed to read directory entry: {}", err);
                    None
                }
            })
        {
            items.push(entry.path().to_string_lossy().into_owned());
        }
    }
    items
}
