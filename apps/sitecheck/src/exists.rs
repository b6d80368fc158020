//! Existence checks that mirror static web server URL resolution.
//!
//! Candidates, in order: the path as given; `<path>/index.html` when the
//! path ends in a separator; `<path>.html` and `<path>/index.html` when the
//! path has no extension. Only regular files count, so a bare directory is
//! never a valid target.

use std::path::{Path, PathBuf};

/// Candidate files a target may resolve to.
pub fn candidate_paths(target: &Path) -> Vec<PathBuf> {
    let mut out = vec![target.to_path_buf()];
    let text = target.to_string_lossy();
    if text.ends_with('/') || text.ends_with(std::path::MAIN_SEPARATOR) {
        out.push(target.join("index.html"));
    } else if target.extension().is_none() {
        out.push(PathBuf::from(format!("{}.html", text)));
        out.push(target.join("index.html"));
    }
    out
}

/// True if any candidate is an existing regular file.
pub fn target_exists(target: &Path) -> bool {
    candidate_paths(target).iter().any(|c| c.is_file())
}
