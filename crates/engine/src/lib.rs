// crates/engine/src/lib.rs
//! Counting engine: a `wc`-style scanner plus an optional pre-pass that
//! excludes `//` comment content from the word and byte counts (never the
//! line count).

pub mod config;
pub mod error;
pub mod exclusion;
pub mod scanner;
pub mod source;
pub mod stats;
pub mod whitespace;

use std::io;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::exclusion::ExclusionDeltas;
use crate::source::Input;
use crate::stats::{RunResult, SourceCounts, SourceReport};

/// Run the counting engine over every input source in order.
///
/// Each source is processed to completion before the next: the exclusion
/// pre-pass (when requested) over two fresh readers, then the scanner over a
/// third. Totals accumulate the corrected per-source counts and are reported
/// only when more than one source was given.
///
/// # Errors
///
/// The first unreadable source aborts the whole run; there is no partial
/// result.
pub fn run(config: &Config) -> Result<RunResult> {
    let inputs = gather_inputs(&config.paths)?;

    let mut reports = Vec::with_capacity(inputs.len());
    let mut total = SourceCounts::default();

    for input in &inputs {
        let counts = process_input(input, config.exclude_comments)?;
        total += counts;
        reports.push(SourceReport {
            path: input.path().map(PathBuf::from),
            counts,
        });
    }

    let total = (reports.len() > 1).then_some(total);
    Ok(RunResult { reports, total })
}

/// Resolve the configured paths, or spool standard input when none were
/// given.
fn gather_inputs(paths: &[PathBuf]) -> Result<Vec<Input>> {
    if paths.is_empty() {
        let stdin = io::stdin();
        let input = Input::spool(stdin.lock()).map_err(|source| {
            EngineError::SourceUnreadable { name: "standard input".to_string(), source }
        })?;
        return Ok(vec![input]);
    }

    Ok(paths.iter().cloned().map(Input::from_path).collect())
}

/// Corrected counts for one source: exclusion deltas first (two passes),
/// then the raw scan, then the subtraction.
fn process_input(input: &Input, exclude_comments: bool) -> Result<SourceCounts> {
    let deltas = if exclude_comments {
        exclusion::measure(input)?
    } else {
        ExclusionDeltas::default()
    };

    let unreadable = |source| EngineError::SourceUnreadable { name: input.describe(), source };
    let mut reader = input.open().map_err(unreadable)?;
    let raw = scanner::scan(&mut reader).map_err(unreadable)?;

    Ok(raw.corrected(&deltas))
}
