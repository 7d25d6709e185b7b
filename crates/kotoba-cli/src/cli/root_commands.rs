use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use kotoba_core::enums::CounterKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API server.
    Serve(ServeArgs),
    /// Show the full progress document.
    Progress,
    /// Raw word sets.
    Sets {
        #[command(subcommand)]
        action: SetsCommands,
    },
    /// Import one whole set into the vocabulary.
    Import(ImportArgs),
    /// Import every not-yet-imported set in a numeric key range.
    ImportRange(ImportRangeArgs),
    /// Add words from a file of set lines.
    Add(AddArgs),
    /// Replace the vocabulary with a random sample.
    Random(RandomArgs),
    /// Prepend every set line containing a term.
    SearchAdd { term: String },
    /// Record an answer for a word.
    Mark {
        word_id: String,
        #[arg(value_enum)]
        answer: Answer,
    },
    /// Remove one word from the vocabulary.
    Delete { word_id: String },
    /// Shuffle the vocabulary order.
    Shuffle,
    /// Clear the vocabulary and imported sets (counters are kept).
    Clear,
}

#[derive(Clone, Debug, Subcommand)]
pub enum SetsCommands {
    /// List set keys, or unstudied counts with --threshold.
    List {
        #[arg(long)]
        threshold: Option<u32>,
    },
    /// Find sets whose content contains a term.
    Search { term: String },
    /// Create or replace a set from a file (`-` reads stdin).
    Register {
        key: String,
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Override `server.addr`.
    #[arg(long)]
    pub addr: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    pub key: String,
    /// Keep headwords that are already in the vocabulary.
    #[arg(long)]
    pub no_dedup: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ImportRangeArgs {
    /// Lowest set number; omit both bounds to import every set.
    #[arg(long)]
    pub start: Option<i64>,
    /// Highest set number.
    #[arg(long)]
    pub end: Option<i64>,
    #[arg(long)]
    pub no_dedup: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// File of set lines (`-` reads stdin).
    #[arg(long)]
    pub file: PathBuf,
    #[arg(long)]
    pub no_dedup: bool,
}

#[derive(Clone, Debug, Args)]
pub struct RandomArgs {
    #[arg(long)]
    pub count: i64,
    #[arg(long)]
    pub start: Option<i64>,
    #[arg(long)]
    pub end: Option<i64>,
    /// Only words answered at most this many times.
    #[arg(long)]
    pub max_attempts: Option<u32>,
    /// Only words at or below this accuracy percentage.
    #[arg(long)]
    pub max_accuracy: Option<f64>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Answer {
    Correct,
    Incorrect,
}

impl From<Answer> for CounterKind {
    fn from(answer: Answer) -> Self {
        match answer {
            Answer::Correct => Self::Correct,
            Answer::Incorrect => Self::Incorrect,
        }
    }
}
