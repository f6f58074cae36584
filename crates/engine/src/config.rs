// crates/engine/src/config.rs
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which of the three counts to report. Output order is always lines, words,
/// bytes regardless of the order flags were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub lines: bool,
    pub words: bool,
    pub bytes: bool,
}

impl Selection {
    #[must_use]
    pub const fn all() -> Self {
        Self { lines: true, words: true, bytes: true }
    }

    #[must_use]
    pub const fn any(self) -> bool {
        self.lines || self.words || self.bytes
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Input files; empty means spooled standard input.
    #[builder(default)]
    pub paths: Vec<PathBuf>,

    #[builder(default)]
    pub select: Selection,

    /// Exclude `//` comment content from word and byte counts.
    #[builder(default)]
    pub exclude_comments: bool,
}
