//! Shared data models for check findings and the aggregated report.

pub mod schema;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Finding severity. Only `Error` affects the exit status.
pub enum Level {
    Error,
    Warn,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single finding: a page path or `collection[index]` plus a message.
pub struct Issue {
    pub level: Level,
    pub source: String,
    pub message: String,
}

impl Issue {
    pub fn error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Issue {
            level: Level::Error,
            source: source.into(),
            message: message.into(),
        }
    }

    pub fn warn(source: impl Into<String>, message: impl Into<String>) -> Self {
        Issue {
            level: Level::Warn,
            source: source.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Aggregated counts used by printers and the exit status.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub pages: usize,
}

#[derive(Debug)]
/// Issues in discovery order plus their summary.
pub struct Report {
    pub issues: Vec<Issue>,
    pub summary: Summary,
}

impl Report {
    /// Build a report, partitioning issues by severity for the counts.
    pub fn new(issues: Vec<Issue>, pages: usize) -> Self {
        let errors = issues.iter().filter(|i| i.level == Level::Error).count();
        let warnings = issues.len() - errors;
        Report {
            issues,
            summary: Summary {
                errors,
                warnings,
                pages,
            },
        }
    }

    /// Non-zero exactly when at least one `ERROR` exists.
    pub fn exit_code(&self) -> i32 {
        if self.summary.errors > 0 {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_never_fail_the_run() {
        let rep = Report::new(
            vec![Issue::warn("index.html", "a"), Issue::warn("about.html", "b")],
            2,
        );
        assert_eq!(rep.summary.errors, 0);
        assert_eq!(rep.summary.warnings, 2);
        assert_eq!(rep.exit_code(), 0);
    }

    #[test]
    fn test_single_error_fails_the_run() {
        let rep = Report::new(
            vec![
                Issue::warn("index.html", "a"),
                Issue::error("news/news.json[0]", "b"),
            ],
            1,
        );
        assert_eq!(rep.summary.errors, 1);
        assert_eq!(rep.summary.warnings, 1);
        assert_eq!(rep.exit_code(), 1);
        // discovery order is preserved
        assert_eq!(rep.issues[0].source, "index.html");
    }

    #[test]
    fn test_level_display_matches_report_tags() {
        assert_eq!(Level::Error.to_string(), "ERROR");
        assert_eq!(Level::Warn.to_string(), "WARN");
    }
}
