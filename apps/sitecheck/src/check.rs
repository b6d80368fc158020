//! Check runner: pages first, then news records, then event records.
//!
//! Produces a `Report` with issues in discovery order. Findings accumulate;
//! only fatal input problems (`CheckError`) stop a run.

use crate::config::Settings;
use crate::error::CheckError;
use crate::exists::target_exists;
use crate::links::extract_links;
use crate::models::schema::CollectionSchema;
use crate::models::{Issue, Report};
use crate::pages::collect_pages;
use crate::placeholders::PlaceholderScanner;
use crate::records::{load_collection, validate_collection};
use crate::resolve::{LinkTarget, Resolver};
use crate::utils::rel_posix;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub struct SiteChecker {
    settings: Settings,
    resolver: Resolver,
    placeholders: PlaceholderScanner,
}

impl SiteChecker {
    /// Build a checker from resolved settings. Fails on bad placeholder regexes.
    pub fn new(settings: Settings) -> Result<Self, CheckError> {
        let resolver = Resolver::new(&settings.repo_root, &settings.domains);
        let placeholders =
            PlaceholderScanner::new(&settings.placeholders, settings.strict_placeholders)?;
        Ok(SiteChecker {
            settings,
            resolver,
            placeholders,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fail fast when a record collection is missing, before any validation.
    pub fn require_inputs(&self) -> Result<(), CheckError> {
        for schema in [&self.settings.news, &self.settings.events] {
            let path = self.settings.repo_root.join(&schema.path);
            if !path.is_file() {
                return Err(CheckError::MissingInput { path });
            }
        }
        Ok(())
    }

    /// Run every check and aggregate the findings.
    pub fn run(&self) -> Result<Report, CheckError> {
        self.require_inputs()?;
        let root = &self.settings.repo_root;

        let pages = collect_pages(root, &self.settings.pages, &self.settings.exclude)?;
        info!(pages = pages.len(), "Collected public pages");

        let mut issues: Vec<Issue> = Vec::new();
        for page in &pages {
            issues.extend(self.check_page(page)?);
        }
        issues.extend(self.check_collection(&self.settings.news)?);
        issues.extend(self.check_collection(&self.settings.events)?);

        let report = Report::new(issues, pages.len());
        info!(
            errors = report.summary.errors,
            warnings = report.summary.warnings,
            "Check finished"
        );
        Ok(report)
    }

    /// Read one page and check its links and placeholder markers.
    pub fn check_page(&self, page: &Path) -> Result<Vec<Issue>, CheckError> {
        let rel = rel_posix(&self.settings.repo_root, page);
        let text = fs::read_to_string(page).map_err(|source| CheckError::Read {
            path: page.to_path_buf(),
            source,
        })?;
        let mut issues = self.check_links(&rel, page, &text);
        issues.extend(self.placeholders.scan(&rel, &text));
        debug!(page = %rel, issues = issues.len(), "Checked page");
        Ok(issues)
    }

    /// One ERROR per internal link whose target does not exist.
    pub fn check_links(&self, rel: &str, page: &Path, text: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        for link in extract_links(text) {
            match self.resolver.classify(&link, page) {
                LinkTarget::Ignorable | LinkTarget::OutOfScope => continue,
                LinkTarget::Internal(target) => {
                    if !target_exists(&target) {
                        issues.push(Issue::error(
                            rel,
                            format!("Broken internal link: {}", link),
                        ));
                    }
                }
            }
        }
        issues
    }

    fn check_collection(&self, schema: &CollectionSchema) -> Result<Vec<Issue>, CheckError> {
        let root = &self.settings.repo_root;
        let records = load_collection(root, schema)?;
        Ok(validate_collection(root, schema, &records))
    }
}
