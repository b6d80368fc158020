//! Detection of unfinished-content markers in raw page text.
//!
//! The list is deliberately narrow. A page yields at most one issue per
//! pattern, however many times the pattern occurs.

use crate::error::CheckError;
use crate::models::{Issue, Level};
use regex::Regex;

pub const DEFAULT_PATTERNS: &[&str] = &[
    r"(?i)\blorem ipsum\b",
    r"\bTODO\b",
    r"\bTBD\b",
    r"(?i)\bplaceholder\b",
    r"(?i)\[\s*insert[^\]]*\]",
];

#[derive(Debug, Clone)]
pub struct PlaceholderScanner {
    patterns: Vec<Regex>,
    level: Level,
}

impl PlaceholderScanner {
    /// Compile `patterns`; `strict` promotes findings from WARN to ERROR.
    pub fn new(patterns: &[String], strict: bool) -> Result<Self, CheckError> {
        let compiled = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|source| CheckError::Pattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PlaceholderScanner {
            patterns: compiled,
            level: if strict { Level::Error } else { Level::Warn },
        })
    }

    pub fn scan(&self, source: &str, text: &str) -> Vec<Issue> {
        self.patterns
            .iter()
            .filter(|re| re.is_match(text))
            .map(|re| Issue {
                level: self.level,
                source: source.to_string(),
                message: format!(
                    "Possible unfinished content marker found ({})",
                    re.as_str()
                ),
            })
            .collect()
    }
}
