//! Command-line interface for sift.

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sift::{
    Document, Extractor, Filter, KeywordSet, Result, DEFAULT_INPUT, DEFAULT_MIN_WORDS,
};

/// Print heading, paragraph and list text from a saved HTML page.
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// HTML file to read
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Which filter decides what gets printed
    #[arg(short, long, value_enum, default_value_t = FilterMode::Keywords)]
    pub filter: FilterMode,

    /// Keyword to match (repeatable, replaces the built-in list)
    #[arg(short, long = "keyword", value_name = "WORD")]
    pub keywords: Vec<String>,

    /// Print only texts with more than this many words (length filter)
    #[arg(short, long, default_value_t = DEFAULT_MIN_WORDS)]
    pub min_words: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FilterMode {
    /// Keep texts containing a keyword
    Keywords,
    /// Keep texts longer than --min-words
    Length,
}

impl Cli {
    /// Build the filter selected on the command line
    pub fn build_filter(&self) -> Filter {
        match self.filter {
            FilterMode::Keywords if self.keywords.is_empty() => Filter::keywords(),
            FilterMode::Keywords => Filter::Keywords(KeywordSet::new(&self.keywords)),
            FilterMode::Length => Filter::MinWords(self.min_words),
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.filter == FilterMode::Length && !cli.keywords.is_empty() {
        tracing::warn!("--keyword has no effect with the length filter");
    }

    let extractor = Extractor::new(cli.build_filter());
    let document = Document::load(&cli.input)?;

    let stdout = io::stdout();
    let count = extractor.write_to(&document, stdout.lock())?;
    tracing::info!(count, input = %cli.input.display(), "done");

    Ok(())
}
