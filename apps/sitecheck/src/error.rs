//! Fatal errors that abort a check run.
//!
//! Findings about site content are never errors; they are collected as
//! `Issue`s. A `CheckError` means the run could not produce a trustworthy
//! report at all.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code when a required input file is missing.
pub const EXIT_MISSING_INPUT: i32 = 2;
/// Exit code for any other fatal condition.
pub const EXIT_FATAL: i32 = 3;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("required input not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON array of records", .path.display())]
    NotAnArray { path: PathBuf },

    #[error("invalid page glob '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("invalid placeholder pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to write report {}: {source}", .path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::MissingInput { .. } => EXIT_MISSING_INPUT,
            _ => EXIT_FATAL,
        }
    }
}
