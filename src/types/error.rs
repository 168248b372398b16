//! Crate-wide error types.
//!
//! Only a small set of failures is allowed to surface from an analysis run:
//! a missing or unreadable root path, configuration errors, and an expired
//! deadline. Everything else (an unreadable file, a file that fails to parse,
//! a scorer that panics) is absorbed at its call site, logged, and reflected
//! in the report as an omission rather than an error.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArchError>;

#[derive(Debug, Error)]
pub enum ArchError {
    /// The root path does not exist or cannot be read. Fatal: the scan never
    /// starts and no report is produced.
    #[error("root path not found or unreadable: {path}")]
    RootNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A single file failed lightweight parsing. Absorbed at the extraction
    /// batch boundary; never surfaces from [`crate::Analyzer::analyze`].
    #[error("parse error in {path}: {message}")]
    Parse { message: String, path: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The analysis deadline elapsed mid-run.
    #[error("analysis deadline exceeded after {elapsed:?}")]
    DeadlineExceeded { elapsed: Duration },
}

impl ArchError {
    /// Whether this error aborts the whole run when it reaches the pipeline.
    ///
    /// `Parse` errors are recoverable: the extraction loop downgrades them to
    /// an empty per-file result and continues.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ArchError::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_are_recoverable() {
        let err = ArchError::Parse {
            message: "unexpected token".into(),
            path: "src/app.ts".into(),
        };
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_root_not_found_is_fatal() {
        let err = ArchError::RootNotFound {
            path: PathBuf::from("/nope"),
        };
        assert!(err.is_fatal());
        assert!(err.to_string().contains("/nope"));
    }
}
