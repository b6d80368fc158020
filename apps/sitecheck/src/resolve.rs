//! Classification of extracted links.
//!
//! Every link lands in exactly one `LinkTarget` case so that host matching
//! happens once, here, and callers only ever see a path to check.

use std::path::{Path, PathBuf};
use url::Url;

const IGNORED_SCHEMES: &[&str] = &["mailto:", "tel:", "javascript:", "data:"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Empty, fragment-only, or a non-navigational scheme.
    Ignorable,
    /// Absolute URL on a host that is not the site's own.
    OutOfScope,
    /// Filesystem location to check for existence.
    Internal(PathBuf),
}

#[derive(Debug, Clone)]
/// Resolves links against the site root and the site's canonical hostnames.
pub struct Resolver {
    root: PathBuf,
    domains: Vec<String>,
}

impl Resolver {
    pub fn new(root: &Path, domains: &[String]) -> Self {
        Resolver {
            root: root.to_path_buf(),
            domains: domains.iter().map(|d| bare_host(d)).collect(),
        }
    }

    /// Whether `host` is one of the site's own hostnames, with or without `www.`.
    pub fn is_own_host(&self, host: &str) -> bool {
        let h = bare_host(host);
        self.domains.iter().any(|d| *d == h)
    }

    /// Classify `raw` as found on `page` (an absolute page path).
    pub fn classify(&self, raw: &str, page: &Path) -> LinkTarget {
        let link = raw.trim();
        if is_ignorable(link) {
            return LinkTarget::Ignorable;
        }

        let path_part = if link.starts_with("//") {
            match Url::parse(&format!("https:{link}")) {
                Ok(u) => match self.own_path(&u) {
                    Some(p) => p,
                    None => return LinkTarget::OutOfScope,
                },
                Err(_) => return LinkTarget::OutOfScope,
            }
        } else if has_uri_scheme(link) {
            match Url::parse(link) {
                Ok(u) if matches!(u.scheme(), "http" | "https") => match self.own_path(&u) {
                    Some(p) => p,
                    None => return LinkTarget::OutOfScope,
                },
                _ => return LinkTarget::OutOfScope,
            }
        } else {
            strip_query_and_fragment(link).to_string()
        };

        // "?q=1" and similar point back at the page itself
        if path_part.is_empty() {
            return LinkTarget::Ignorable;
        }
        let decoded = match urlencoding::decode(&path_part) {
            Ok(c) => c.into_owned(),
            Err(_) => path_part.clone(),
        };

        let target = match decoded.strip_prefix('/') {
            Some(rest) => self.root.join(rest.trim_start_matches('/')),
            None => page.parent().unwrap_or(&self.root).join(&decoded),
        };
        LinkTarget::Internal(target)
    }

    /// Path of `u` when it points at the site itself. An explicit
    /// non-default port is a different origin.
    fn own_path(&self, u: &Url) -> Option<String> {
        let host = u.host_str()?;
        if u.port().is_none() && self.is_own_host(host) {
            Some(u.path().to_string())
        } else {
            None
        }
    }
}

/// Empty, `#fragment`, or one of the ignored schemes.
pub fn is_ignorable(link: &str) -> bool {
    if link.is_empty() || link.starts_with('#') {
        return true;
    }
    let lower = link.to_ascii_lowercase();
    IGNORED_SCHEMES.iter().any(|s| lower.starts_with(s))
}

fn bare_host(host: &str) -> String {
    let h = host.trim().trim_end_matches('.').to_ascii_lowercase();
    match h.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => h,
    }
}

fn strip_query_and_fragment(link: &str) -> &str {
    let end = link.find(|c: char| c == '?' || c == '#').unwrap_or(link.len());
    &link[..end]
}

fn has_uri_scheme(target: &str) -> bool {
    let Some((scheme, _)) = target.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    // "news/a:b.html" has a slash before the colon, so it is a path
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}
