//! Command-line surface and dispatch.

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::app::{bundle, rsp};
use crate::domain::model::{BundleOptions, SortMode};

#[derive(Debug, Parser)]
#[command(
    name = "srcbundle",
    author,
    version,
    about = "Concatenate source files from the working directory into a single bundle"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Bundle matching source files into one output file.
    #[command(visible_alias = "b")]
    Bundle(BundleArgs),
    /// Interactively build a response file for later replay.
    #[command(name = "create-rsp", visible_alias = "c-rsp")]
    CreateRsp,
}

#[derive(Debug, Args)]
pub struct BundleArgs {
    /// Languages to include; "all" selects every known language.
    #[arg(
        short = 'l',
        long = "language",
        required = true,
        num_args = 1..,
        value_delimiter = ','
    )]
    pub language: Vec<String>,

    /// Destination file for the bundled output.
    #[arg(short = 'o', long = "output", default_value = "bundle.txt")]
    pub output: PathBuf,

    /// Prepend a source-path comment before each file's content.
    #[arg(short = 'n', long = "note")]
    pub note: bool,

    /// Sort order: "type" sorts by extension, anything else by file name.
    #[arg(
        short = 's',
        long = "sort",
        default_value = "name",
        value_parser = parse_sort_mode
    )]
    pub sort: SortMode,

    /// Strip blank lines before writing.
    #[arg(long = "remove-empty-lines", visible_alias = "rel")]
    pub remove_empty_lines: bool,

    /// Author name written as a header line.
    #[arg(short = 'a', long = "author")]
    pub author: Option<String>,
}

impl BundleArgs {
    pub fn into_options(self) -> BundleOptions {
        BundleOptions {
            languages: self.language,
            output: self.output,
            note: self.note,
            sort: self.sort,
            remove_empty_lines: self.remove_empty_lines,
            author: self.author,
        }
    }
}

fn parse_sort_mode(value: &str) -> Result<SortMode, std::convert::Infallible> {
    value.parse()
}

/// Parse arguments and run the selected command in the current directory.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = env::current_dir().context("failed to resolve working directory")?;

    match cli.command {
        Command::Bundle(args) => {
            let summary = bundle::write_bundle(&cwd, &args.into_options())?;
            println!("Bundle written to {}", summary.output_path.display());
        }
        Command::CreateRsp => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            if let Some(path) = rsp::create_response_file(&cwd, &mut input, &mut output)? {
                println!("Response file written to {}", path.display());
            }
        }
    }

    Ok(())
}
