//! Bundle writer producing the concatenated output file.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::app::{languages, select};
use crate::domain::errors::BundleError;
use crate::domain::model::{BundleOptions, CandidateFile};

/// Outcome of a successful bundle run.
#[derive(Debug, Clone)]
pub struct BundleSummary {
    /// Absolute path of the written output file.
    pub output_path: PathBuf,
    pub files_bundled: usize,
}

/// Concatenate the matching files of `dir` into the configured output file.
///
/// The output is truncated if it already exists. Candidates are collected
/// before the output is opened, so no partially listed state can leak into
/// the selection.
pub fn write_bundle(dir: &Path, options: &BundleOptions) -> Result<BundleSummary> {
    let extensions = languages::resolve_extensions(&options.languages);
    if extensions.is_empty() {
        return Err(BundleError::NoValidLanguages.into());
    }

    let candidates = select::collect_candidates(dir, &extensions, options.sort)?;
    tracing::debug!(count = candidates.len(), "collected candidate files");

    let output_path = if options.output.is_absolute() {
        options.output.clone()
    } else {
        dir.join(&options.output)
    };

    let mut writer = BufWriter::new(open_output(&output_path)?);

    if let Some(author) = options
        .author
        .as_deref()
        .map(str::trim)
        .filter(|author| !author.is_empty())
    {
        writeln!(writer, "# Author: {author}")
            .with_context(|| format!("failed to write to {}", output_path.display()))?;
    }

    for candidate in &candidates {
        append_file(&mut writer, dir, candidate, options)
            .with_context(|| format!("failed to bundle {}", candidate.path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush {}", output_path.display()))?;

    let absolute = fs::canonicalize(&output_path).unwrap_or(output_path);
    tracing::info!(output = %absolute.display(), files = candidates.len(), "bundle written");

    Ok(BundleSummary {
        output_path: absolute,
        files_bundled: candidates.len(),
    })
}

/// Open the destination for truncating write, mapping a missing parent
/// directory to the distinct invalid-path condition.
fn open_output(path: &Path) -> Result<File> {
    match File::create(path) {
        Ok(file) => Ok(file),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(BundleError::InvalidOutputPath(path.to_path_buf()).into())
        }
        Err(err) => {
            Err(err).with_context(|| format!("failed to create output file {}", path.display()))
        }
    }
}

fn append_file(
    writer: &mut impl Write,
    dir: &Path,
    candidate: &CandidateFile,
    options: &BundleOptions,
) -> Result<()> {
    if options.note {
        let relative = candidate.path.strip_prefix(dir).unwrap_or(&candidate.path);
        writeln!(writer, "# Source: {}", relative.display())?;
    }

    let contents = fs::read_to_string(&candidate.path)?;
    for line in contents.lines() {
        if options.remove_empty_lines && is_blank(line) {
            continue;
        }
        writeln!(writer, "{line}")?;
    }

    // One separator line per file, even when blank lines are stripped.
    writeln!(writer)?;
    Ok(())
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use crate::domain::model::SortMode;

    fn options(languages: &[&str]) -> BundleOptions {
        BundleOptions {
            languages: languages.iter().map(|l| (*l).to_string()).collect(),
            output: "bundle.txt".into(),
            note: false,
            sort: SortMode::Name,
            remove_empty_lines: false,
            author: None,
        }
    }

    fn read_output(dir: &Path) -> String {
        fs::read_to_string(dir.join("bundle.txt")).expect("output file exists")
    }

    #[test]
    fn bundles_matching_files_in_name_order() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::write(temp.path().join("b.py"), "second\n")?;
        fs::write(temp.path().join("a.py"), "first\n")?;
        fs::write(temp.path().join("c.txt"), "excluded\n")?;

        let summary = write_bundle(temp.path(), &options(&["python"]))?;
        assert_eq!(summary.files_bundled, 2);

        let written = read_output(temp.path());
        assert_eq!(written, "first\n\nsecond\n\n");
        Ok(())
    }

    #[test]
    fn author_header_is_the_first_line() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::write(temp.path().join("a.py"), "pass\n")?;

        let mut opts = options(&["python"]);
        opts.author = Some("Ada".into());
        write_bundle(temp.path(), &opts)?;

        let written = read_output(temp.path());
        assert_eq!(written.lines().next(), Some("# Author: Ada"));
        Ok(())
    }

    #[test]
    fn blank_author_writes_no_header() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::write(temp.path().join("a.py"), "pass\n")?;

        let mut opts = options(&["python"]);
        opts.author = Some("   ".into());
        write_bundle(temp.path(), &opts)?;

        assert_eq!(read_output(temp.path()), "pass\n\n");
        Ok(())
    }

    #[test]
    fn note_line_precedes_each_file() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::write(temp.path().join("a.py"), "alpha\n")?;
        fs::write(temp.path().join("b.py"), "beta\n")?;

        let mut opts = options(&["python"]);
        opts.note = true;
        write_bundle(temp.path(), &opts)?;

        let written = read_output(temp.path());
        assert_eq!(
            written,
            "# Source: a.py\nalpha\n\n# Source: b.py\nbeta\n\n"
        );
        Ok(())
    }

    #[test]
    fn remove_empty_lines_keeps_only_non_blank_content() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::write(temp.path().join("a.py"), "one\n\n   \ntwo\n")?;

        let mut opts = options(&["python"]);
        opts.remove_empty_lines = true;
        write_bundle(temp.path(), &opts)?;

        // The trailing separator line is still written.
        assert_eq!(read_output(temp.path()), "one\ntwo\n\n");
        Ok(())
    }

    #[test]
    fn remove_empty_lines_is_idempotent_on_blank_free_input() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::write(temp.path().join("a.py"), "one\ntwo\n")?;

        let mut opts = options(&["python"]);
        opts.remove_empty_lines = true;
        write_bundle(temp.path(), &opts)?;
        let first = read_output(temp.path());

        opts.output = "again.txt".into();
        fs::write(temp.path().join("a.py"), &first[..first.len() - 1])?;
        write_bundle(temp.path(), &opts)?;
        let second = fs::read_to_string(temp.path().join("again.txt"))?;

        assert_eq!(second, "one\ntwo\n\n");
        Ok(())
    }

    #[test]
    fn all_sentinel_bundles_every_known_language() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::write(temp.path().join("a.py"), "python\n")?;
        fs::write(temp.path().join("b.cs"), "csharp\n")?;
        fs::write(temp.path().join("c.txt"), "plain\n")?;

        let summary = write_bundle(temp.path(), &options(&["all"]))?;
        assert_eq!(summary.files_bundled, 2);
        Ok(())
    }

    #[test]
    fn unknown_languages_only_is_a_validation_error() {
        let temp = tempfile::tempdir().unwrap();
        let err = write_bundle(temp.path(), &options(&["klingon"])).unwrap_err();
        assert_eq!(err.to_string(), "No valid languages selected");
        assert!(!temp.path().join("bundle.txt").exists());
    }

    #[test]
    fn missing_output_parent_is_an_invalid_path_error() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("a.py"), "pass\n").unwrap();

        let mut opts = options(&["python"]);
        opts.output = "no-such-dir/bundle.txt".into();
        let err = write_bundle(temp.path(), &opts).unwrap_err();
        assert!(err.to_string().starts_with("file path is not valid"));
    }

    #[test]
    fn overwrites_existing_output() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::write(temp.path().join("a.py"), "fresh\n")?;
        fs::write(temp.path().join("bundle.txt"), "stale content\n")?;

        write_bundle(temp.path(), &options(&["python"]))?;
        assert_eq!(read_output(temp.path()), "fresh\n\n");
        Ok(())
    }

    #[test]
    fn summary_reports_an_absolute_path() -> Result<()> {
        let temp = tempfile::tempdir()?;
        fs::write(temp.path().join("a.py"), "pass\n")?;

        let summary = write_bundle(temp.path(), &options(&["python"]))?;
        assert!(summary.output_path.is_absolute());
        Ok(())
    }
}
