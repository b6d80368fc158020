//! Configuration discovery and effective settings resolution.
//!
//! Sitecheck reads `sitecheck.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce `Settings`.
//! Defaults:
//! - `report`: `site-quality-report.md`
//! - `strict_placeholders`: false
//! - `domains`: `local083.org` (a leading `www.` always matches too)
//! - `pages`: the public page globs below
//! - `exclude`: template, scratch and draft path fragments
//! - `news.path` / `events.path`: `news/news.json` / `events/events.json`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::CheckError;
use crate::models::schema::CollectionSchema;
use crate::placeholders::DEFAULT_PATTERNS;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPORT: &str = "site-quality-report.md";

pub const DEFAULT_DOMAINS: &[&str] = &["local083.org"];

pub const DEFAULT_PAGE_GLOBS: &[&str] = &[
    "*.html",
    "news/*.html",
    "events/*.html",
    "resources/*.html",
    "2026-bargaining/*.html",
];

pub const DEFAULT_EXCLUDES: &[&str] = &[
    "test-pages/",
    "jules-scratch/",
    "/template.html",
    "redirect-time-change-template.html",
    "news/ba-template.html",
    "news/spotlight-template.html",
    "marketing/",
];

const CONFIG_NAMES: &[&str] = &["sitecheck.toml", "sitecheck.yaml", "sitecheck.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// `[news]` / `[events]` overrides.
pub struct CollectionCfg {
    pub path: Option<String>,
    pub required: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `sitecheck.toml|yaml`.
pub struct SiteCheckConfig {
    pub report: Option<String>,
    pub strict_placeholders: Option<bool>,
    pub domains: Option<Vec<String>>,
    pub pages: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub placeholders: Option<Vec<String>>,
    #[serde(default)]
    pub news: Option<CollectionCfg>,
    #[serde(default)]
    pub events: Option<CollectionCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration handed to the checker.
pub struct Settings {
    pub repo_root: PathBuf,
    pub report: PathBuf,
    pub strict_placeholders: bool,
    pub domains: Vec<String>,
    pub pages: Vec<String>,
    pub exclude: Vec<String>,
    pub placeholders: Vec<String>,
    pub news: CollectionSchema,
    pub events: CollectionSchema,
    pub config_found: bool,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Settings {
    /// Built-in defaults rooted at `repo_root`, with no config file applied.
    pub fn defaults(repo_root: &Path) -> Self {
        Settings {
            repo_root: repo_root.to_path_buf(),
            report: repo_root.join(DEFAULT_REPORT),
            strict_placeholders: false,
            domains: owned(DEFAULT_DOMAINS),
            pages: owned(DEFAULT_PAGE_GLOBS),
            exclude: owned(DEFAULT_EXCLUDES),
            placeholders: owned(DEFAULT_PATTERNS),
            news: CollectionSchema::news(None, None),
            events: CollectionSchema::events(None, None),
            config_found: false,
        }
    }
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `sitecheck.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `SiteCheckConfig` from `sitecheck.toml` or `sitecheck.yaml|yml` if present.
///
/// A present but unreadable or malformed file is an error.
pub fn load_config(root: &Path) -> Result<Option<SiteCheckConfig>, CheckError> {
    let toml_path = root.join("sitecheck.toml");
    if toml_path.exists() {
        let s = read(&toml_path)?;
        let cfg: SiteCheckConfig = toml::from_str(&s).map_err(|e| CheckError::Config {
            path: toml_path.clone(),
            message: e.to_string(),
        })?;
        return Ok(Some(cfg));
    }
    for yml in ["sitecheck.yaml", "sitecheck.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read(&p)?;
            let cfg: SiteCheckConfig = serde_yaml::from_str(&s).map_err(|e| CheckError::Config {
                path: p.clone(),
                message: e.to_string(),
            })?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

fn read(p: &Path) -> Result<String, CheckError> {
    fs::read_to_string(p).map_err(|source| CheckError::Read {
        path: p.to_path_buf(),
        source,
    })
}

/// Resolve `Settings` by merging CLI flags, discovered config, and defaults.
///
/// `cli_repo_root` is the directory discovery starts from, joined onto the
/// working directory when relative. The binary exposes no flag for it and
/// passes `None`; tests pass a fixture root.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_report: Option<&str>,
    cli_strict: Option<bool>,
) -> Result<Settings, CheckError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let start = match cli_repo_root {
        Some(s) => cwd.join(s),
        None => cwd,
    };
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();
    let defaults = Settings::defaults(&repo_root);

    // absolute report paths are kept; relative ones hang off the repo root
    let report = cli_report
        .map(|s| s.to_string())
        .or(cfg.report)
        .map(|s| repo_root.join(s))
        .unwrap_or(defaults.report);

    let strict_placeholders = cli_strict
        .filter(|s| *s)
        .or(cfg.strict_placeholders)
        .unwrap_or(false);

    let news_cfg = cfg.news.unwrap_or_default();
    let events_cfg = cfg.events.unwrap_or_default();

    Ok(Settings {
        report,
        strict_placeholders,
        domains: cfg.domains.unwrap_or(defaults.domains),
        pages: cfg.pages.unwrap_or(defaults.pages),
        exclude: cfg.exclude.unwrap_or(defaults.exclude),
        placeholders: cfg.placeholders.unwrap_or(defaults.placeholders),
        news: CollectionSchema::news(news_cfg.path, news_cfg.required),
        events: CollectionSchema::events(events_cfg.path, events_cfg.required),
        config_found,
        repo_root,
    })
}
