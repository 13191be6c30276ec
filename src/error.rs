//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, config, and template errors, and provides semantic
//! variants for parameter validation and subprocess failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] crate::io::TemplateError),

    #[error("Missing required parameter: {param}")]
    MissingParameter { param: &'static str },

    #[error("Invalid parameter: {param}={value}: {reason}")]
    InvalidParameter {
        param: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Parameter {param} has {actual} entries, expected {expected} (one per descriptor)")]
    LengthMismatch {
        param: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Dakota executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("Dakota exited with {status}; see run log {run_log:?}")]
    ExecutionFailed { status: String, run_log: PathBuf },

    #[error("Expected output file missing or empty after run: {path:?}")]
    MissingOutput { path: PathBuf },
}
