//! Domain-specific errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    /// None of the requested language tokens resolved to a known extension.
    #[error("No valid languages selected")]
    NoValidLanguages,
    /// The output path points into a directory that does not exist.
    #[error("file path is not valid: {}", .0.display())]
    InvalidOutputPath(PathBuf),
}
