// crates/cli/src/presentation.rs
use count_text_engine::config::{Config, Selection};
use count_text_engine::stats::{RunResult, SourceCounts};
use std::fmt::Write;
use std::path::Path;

/// Print one row per source, then a `total` row when more than one source
/// was given. Fields appear in the fixed lines/words/bytes order.
pub fn print_results(result: &RunResult, config: &Config) {
    for report in &result.reports {
        println!("{}", format_row(&report.counts, config.select, report.path.as_deref(), false));
    }

    if let Some(total) = &result.total {
        println!("{}", format_row(total, config.select, None, true));
    }
}

fn format_row(
    counts: &SourceCounts,
    select: Selection,
    path: Option<&Path>,
    is_total: bool,
) -> String {
    let mut row = String::new();

    if select.lines {
        write!(row, "{:>8}", counts.lines).unwrap();
    }
    if select.words {
        write!(row, "{:>8}", counts.words).unwrap();
    }
    if select.bytes {
        write!(row, "{:>8}", counts.bytes).unwrap();
    }

    if let Some(path) = path {
        write!(row, " {}", path.display()).unwrap();
    } else if is_total {
        row.push_str(" total");
    }

    row
}
