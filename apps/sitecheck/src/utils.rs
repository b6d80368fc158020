//! Small helpers shared by the binary and printers.

use owo_colors::OwoColorize;
use std::path::Path;

/// Colors are on unless `NO_COLOR` is set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if use_colors() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Forward-slash form of a path, used for exclusion matching and issue sources.
pub fn to_posix(p: &Path) -> String {
    let s = p.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Path relative to `root` in forward-slash form; falls back to the full path.
pub fn rel_posix(root: &Path, p: &Path) -> String {
    to_posix(p.strip_prefix(root).unwrap_or(p))
}

/// Path relative to the current working directory, for console display.
pub fn rel_to_wd(p: &Path) -> String {
    let cwd = match std::env::current_dir() {
        Ok(c) => c,
        Err(_) => return p.to_string_lossy().to_string(),
    };
    match pathdiff::diff_paths(p, &cwd) {
        Some(rel) if !rel.as_os_str().is_empty() => rel.to_string_lossy().to_string(),
        _ => p.to_string_lossy().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_rel_posix_strips_root() {
        let root = PathBuf::from("/srv/site");
        let page = root.join("news").join("a.html");
        assert_eq!(rel_posix(&root, &page), "news/a.html");
        assert_eq!(rel_posix(&root, Path::new("/elsewhere/x.html")), "/elsewhere/x.html");
    }
}
