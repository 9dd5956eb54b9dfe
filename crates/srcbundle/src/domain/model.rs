//! Domain models for bundle options and candidate files.

use std::path::PathBuf;
use std::str::FromStr;

/// Ordering applied to candidate files before bundling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Order by file name.
    #[default]
    Name,
    /// Order by lower-cased extension, then file name.
    Type,
}

impl FromStr for SortMode {
    type Err = std::convert::Infallible;

    /// Lenient parse: the exact literal `type` selects type ordering, any
    /// other value falls back to name ordering.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "type" => Ok(SortMode::Type),
            _ => Ok(SortMode::Name),
        }
    }
}

/// Options controlling a single bundle run.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Requested language tokens; may include the sentinel `all`.
    pub languages: Vec<String>,
    /// Destination file, resolved against the working directory when relative.
    pub output: PathBuf,
    /// Prepend a `# Source:` comment before each file's content.
    pub note: bool,
    pub sort: SortMode,
    /// Drop blank and whitespace-only lines before writing.
    pub remove_empty_lines: bool,
    /// Author name written as a `# Author:` header when non-empty.
    pub author: Option<String>,
}

/// A file in the working directory whose extension matched the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub file_name: String,
    /// Lower-cased extension including the leading dot.
    pub extension: String,
}
