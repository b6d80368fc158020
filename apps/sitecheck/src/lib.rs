//! Sitecheck core library.
//!
//! Validates a static site's content before deployment: broken internal
//! links, leftover placeholder text, and the news/events record collections.
//! Everything is aggregated into one Markdown report and an exit status.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective settings resolution.
//! - `pages`: Public page collection by glob with exclusions.
//! - `links`: Tolerant `href`/`src` extraction.
//! - `resolve`: Ignorable / out-of-scope / internal link classification.
//! - `exists`: Web-server-style existence checks.
//! - `placeholders`: Unfinished-content markers.
//! - `records`: News and events record validation.
//! - `check`: Runs everything and builds the report.
//! - `output`: Markdown report and console printers.
//! - `models`: Issue, report, and collection schema types.
pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod exists;
pub mod links;
pub mod models;
pub mod output;
pub mod pages;
pub mod placeholders;
pub mod records;
pub mod resolve;
pub mod utils;
