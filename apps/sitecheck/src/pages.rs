//! Public page discovery.
//!
//! Globs are evaluated relative to the site root; results are deduplicated,
//! sorted, limited to regular files, and filtered by exclusion fragments.

use crate::error::CheckError;
use crate::utils::rel_posix;
use glob::{glob, Pattern};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// An excluded path contains any of `excludes` in its forward-slash form.
pub fn is_excluded(rel: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|frag| rel.contains(frag.as_str()))
}

/// Collect the sorted set of public HTML pages under `root`.
///
/// An empty result is valid. Only a malformed glob pattern is an error.
pub fn collect_pages(
    root: &Path,
    patterns: &[String],
    excludes: &[String],
) -> Result<Vec<PathBuf>, CheckError> {
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let mut pages: BTreeSet<PathBuf> = BTreeSet::new();
    for pat in patterns {
        let full = format!("{}/{}", escaped_root.trim_end_matches('/'), pat);
        let entries = glob(&full).map_err(|source| CheckError::Glob {
            pattern: pat.clone(),
            source,
        })?;
        // unreadable directory entries are skipped, like a plain glob walk
        for p in entries.flatten() {
            if !p.is_file() {
                continue;
            }
            if is_excluded(&rel_posix(root, &p), excludes) {
                continue;
            }
            pages.insert(p);
        }
    }
    Ok(pages.into_iter().collect())
}
