//! Interactive response-file generation.
//!
//! Walks a fixed prompt sequence on the provided streams and serializes the
//! answers into `bundle.rsp`, one direct-mode option per line. The file is
//! inert data; replaying it is the caller's responsibility.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::app::languages;

/// Name of the response file written into the working directory.
pub const RESPONSE_FILE: &str = "bundle.rsp";

/// Answers gathered from the prompt sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseAnswers {
    pub output: String,
    pub languages: Vec<String>,
    pub remove_empty_lines: bool,
    /// Kept raw; only trimmed when deciding whether to serialize it.
    pub author: String,
    pub sort: String,
    pub note: bool,
}

/// Run the prompt sequence against the provided streams.
///
/// Returns `None` when the languages answer is blank; every other prompt
/// accepts any input, including empty.
pub fn collect_answers<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<ResponseAnswers>> {
    let output_name = prompt(input, output, "Output file name:")?;

    let known = languages::known_languages().collect::<Vec<_>>().join(", ");
    let languages_raw = prompt(
        input,
        output,
        &format!("Languages to include (comma separated; known: {known}):"),
    )?;
    if languages_raw.trim().is_empty() {
        writeln!(output, "No languages entered, aborting.")?;
        return Ok(None);
    }

    let remove_empty_lines = prompt(input, output, "Remove empty lines? (y/n):")?;
    let author = prompt(input, output, "Author (optional):")?;
    let sort = prompt(input, output, "Sort by name or type (default name):")?;
    let note = prompt(input, output, "Include source notes? (y/n):")?;

    let languages = languages_raw
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    let sort = sort.trim();
    Ok(Some(ResponseAnswers {
        output: output_name.trim().to_owned(),
        languages,
        remove_empty_lines: is_yes(&remove_empty_lines),
        author,
        sort: if sort.is_empty() {
            "name".to_owned()
        } else {
            sort.to_owned()
        },
        note: is_yes(&note),
    }))
}

/// Serialize answers into response-file lines.
///
/// Fixed order: output, language, remove-empty-lines, sort, author, note.
/// Valued options with a blank value are omitted; boolean options serialize
/// as the bare long flag and are omitted when answered no.
pub fn render(answers: &ResponseAnswers) -> String {
    let mut lines = Vec::new();
    push_valued(&mut lines, "--output", &answers.output);
    push_valued(&mut lines, "--language", &answers.languages.join(","));
    if answers.remove_empty_lines {
        lines.push("--remove-empty-lines".to_owned());
    }
    push_valued(&mut lines, "--sort", &answers.sort);
    push_valued(&mut lines, "--author", &answers.author);
    if answers.note {
        lines.push("--note".to_owned());
    }
    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

/// Prompt interactively and write `bundle.rsp` into `dir`.
///
/// Returns the written path, or `None` when the sequence aborted and no file
/// was created.
pub fn create_response_file<R: BufRead, W: Write>(
    dir: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<Option<PathBuf>> {
    let Some(answers) = collect_answers(input, output)? else {
        return Ok(None);
    };

    let path = dir.join(RESPONSE_FILE);
    fs::write(&path, render(&answers))
        .with_context(|| format!("failed to write response file to {}", path.display()))?;
    tracing::info!(path = %path.display(), "response file written");
    Ok(Some(path))
}

fn push_valued(lines: &mut Vec<String>, flag: &str, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    lines.push(format!("{flag} {value}"));
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{message} ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read prompt answer")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
