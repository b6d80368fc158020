//! Report rendering: the Markdown report file and the console summary.

use crate::error::CheckError;
use crate::models::{Level, Report};
use crate::utils::{rel_to_wd, use_colors};
use chrono::{DateTime, SecondsFormat, Utc};
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

/// Render the Markdown report (pure, for testing).
pub fn render_report(res: &Report, generated: DateTime<Utc>) -> String {
    let mut lines = vec![
        "# Site Quality Report".to_string(),
        String::new(),
        format!(
            "Generated: {}",
            generated.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        String::new(),
        format!("- Errors: {}", res.summary.errors),
        format!("- Warnings: {}", res.summary.warnings),
        String::new(),
    ];
    if res.issues.is_empty() {
        lines.push("No issues found.".to_string());
    } else {
        lines.push("## Findings".to_string());
        lines.push(String::new());
        for is in &res.issues {
            lines.push(format!("- [{}] `{}`: {}", is.level, is.source, is.message));
        }
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Write the report, creating parent directories as needed.
pub fn write_report(path: &Path, res: &Report) -> Result<(), CheckError> {
    let wrap = |source: std::io::Error| CheckError::WriteReport {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(wrap)?;
        }
    }
    fs::write(path, render_report(res, Utc::now())).map_err(wrap)
}

/// Print the run summary to stdout.
pub fn print_summary(res: &Report, report_path: &Path) {
    let color = use_colors();
    println!("Checked {} public HTML page(s).", res.summary.pages);
    println!("Report: {}", rel_to_wd(report_path));
    let errors = format!("Errors: {}", res.summary.errors);
    let warnings = format!("Warnings: {}", res.summary.warnings);
    if color {
        let errors = if res.summary.errors > 0 {
            errors.red().bold().to_string()
        } else {
            errors.green().to_string()
        };
        let warnings = if res.summary.warnings > 0 {
            warnings.yellow().to_string()
        } else {
            warnings
        };
        println!("{} | {}", errors, warnings);
    } else {
        println!("{} | {}", errors, warnings);
    }
}

/// Print each finding to stderr, one line per issue.
pub fn print_issues(res: &Report) {
    let color = use_colors();
    for is in &res.issues {
        let (icon, sev) = match is.level {
            Level::Error => ("✖", "⟦error⟧"),
            Level::Warn => ("▲", "⟦warn⟧"),
        };
        if color {
            let (icon, sev) = match is.level {
                Level::Error => (icon.red().to_string(), sev.red().bold().to_string()),
                Level::Warn => (icon.yellow().to_string(), sev.yellow().bold().to_string()),
            };
            eprintln!("{} {} {} — {}", icon, sev, is.source.bold(), is.message);
        } else {
            eprintln!("{} {} {} — {}", icon, sev, is.source, is.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Issue;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 27, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_render_empty_report() {
        let out = render_report(&Report::new(vec![], 0), at());
        assert_eq!(
            out,
            "# Site Quality Report\n\nGenerated: 2025-10-27T12:30:00Z\n\n- Errors: 0\n- Warnings: 0\n\nNo issues found.\n"
        );
    }

    #[test]
    fn test_render_findings_in_order() {
        let rep = Report::new(
            vec![
                Issue::error("index.html", "Broken internal link: /x.html"),
                Issue::warn("about.html", "Possible unfinished content marker found (\\bTODO\\b)"),
            ],
            2,
        );
        let out = render_report(&rep, at());
        assert!(out.contains("- Errors: 1\n- Warnings: 1\n"));
        assert!(out.contains("## Findings\n\n- [ERROR] `index.html`: Broken internal link: /x.html\n- [WARN] `about.html`:"));
        assert!(!out.contains("No issues found."));
    }

    #[test]
    fn test_write_report_creates_parents() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("reports/site.md");
        write_report(&path, &Report::new(vec![], 0)).unwrap();
        let s = fs::read_to_string(&path).unwrap();
        assert!(s.starts_with("# Site Quality Report\n"));
        assert!(s.contains("No issues found."));
    }
}
