//! Candidate file discovery and ordering.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use ignore::WalkBuilder;

use crate::domain::model::{CandidateFile, SortMode};

/// List the immediate files of `dir` whose extension belongs to `extensions`,
/// ordered per `sort`.
///
/// Only direct children are considered; directories and extension-less
/// entries never qualify. Hidden files receive no special treatment beyond
/// what the extension filter naturally excludes.
pub fn collect_candidates(
    dir: &Path,
    extensions: &BTreeSet<String>,
    sort: SortMode,
) -> Result<Vec<CandidateFile>> {
    let mut candidates = Vec::new();

    let mut builder = WalkBuilder::new(dir);
    builder.max_depth(Some(1)).standard_filters(false);

    for entry in builder.build() {
        let entry =
            entry.with_context(|| format!("failed to list directory {}", dir.display()))?;
        let path = entry.path();
        if path == dir {
            continue;
        }
        if !entry.file_type().is_some_and(|kind| kind.is_file()) {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            continue;
        };
        let extension = format!(".{}", extension.to_lowercase());
        if !extensions.contains(&extension) {
            continue;
        }
        candidates.push(CandidateFile {
            path: path.to_path_buf(),
            file_name: file_name.to_owned(),
            extension,
        });
    }

    sort_candidates(&mut candidates, sort);
    Ok(candidates)
}

/// Order candidates in place. Both modes use stable, ordinal comparisons.
pub fn sort_candidates(candidates: &mut [CandidateFile], sort: SortMode) {
    match sort {
        SortMode::Type => candidates.sort_by(|a, b| {
            a.extension
                .cmp(&b.extension)
                .then_with(|| a.file_name.cmp(&b.file_name))
        }),
        SortMode::Name => candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name)),
    }
}
