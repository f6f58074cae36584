// crates/cli/src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
///
/// With no count flag at all, every count is reported; flags narrow the
/// output down but never change the lines/words/bytes field order.
#[derive(Parser, Debug)]
#[command(
    name = "count_text",
    version = crate::VERSION,
    about = "Line, word, and byte counts with optional //-comment exclusion"
)]
pub struct Args {
    /// Report the number of lines
    #[arg(short = 'l', long, help_heading = "Counts")]
    pub lines: bool,

    /// Report the number of words
    #[arg(short = 'w', long, help_heading = "Counts")]
    pub words: bool,

    /// Report the number of bytes
    #[arg(short = 'c', long, help_heading = "Counts")]
    pub bytes: bool,

    /// Exclude text inside single-line // comments from the word and byte
    /// counts (line counts keep the terminating newline)
    #[arg(short = 'C', long, help_heading = "Counts")]
    pub exclude_comments: bool,

    /// Input files; standard input when omitted
    #[arg(value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub paths: Vec<PathBuf>,
}
