//! Error types for hard failures.
//!
//! Anything a document author can fix is reported as a diagnostic instead.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop validation without producing a verdict
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
