// crates/engine/src/stats.rs
use std::ops::AddAssign;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::exclusion::ExclusionDeltas;

/// Raw or corrected counts for one source: lines, words, and bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCounts {
    pub lines: usize,
    pub words: usize,
    pub bytes: usize,
}

impl SourceCounts {
    #[must_use]
    pub const fn new(lines: usize, words: usize, bytes: usize) -> Self {
        Self { lines, words, bytes }
    }

    /// Apply comment-exclusion deltas to the word and byte counts.
    ///
    /// Line counts are untouched: the newline terminating a comment stays in
    /// the stream. Correct deltas never exceed the raw counts; should they,
    /// the subtraction clamps to zero rather than wrapping.
    #[must_use]
    pub fn corrected(self, deltas: &ExclusionDeltas) -> Self {
        Self {
            lines: self.lines,
            words: self.words.saturating_sub(deltas.words),
            bytes: self.bytes.saturating_sub(deltas.bytes),
        }
    }
}

impl AddAssign for SourceCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.words += rhs.words;
        self.bytes += rhs.bytes;
    }
}

/// Corrected counts for one processed source, labeled with its path.
///
/// `path` is `None` for spooled standard input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReport {
    pub path: Option<PathBuf>,
    pub counts: SourceCounts,
}

/// Outcome of a full run over every input source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub reports: Vec<SourceReport>,
    /// Aggregate across all sources; present only when more than one source
    /// was given.
    pub total: Option<SourceCounts>,
}
