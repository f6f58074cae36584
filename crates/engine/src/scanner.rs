// crates/engine/src/scanner.rs
use std::io::BufRead;

use crate::stats::SourceCounts;
use crate::whitespace::is_whitespace;

/// Count lines, words, and bytes in a single forward pass.
///
/// `bytes` is everything read, `lines` is the number of LF bytes (a final
/// unterminated line does not count), and `words` is the number of maximal
/// runs of non-whitespace bytes. A word still open at end-of-stream counts:
/// `"ab"` is one word on zero lines.
pub fn scan<R: BufRead>(reader: &mut R) -> std::io::Result<SourceCounts> {
    let mut counts = SourceCounts::default();
    let mut in_word = false;

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        counts.bytes += buf.len();
        counts.lines += bytecount::count(buf, b'\n');

        // Word boundaries may straddle chunk boundaries, so `in_word`
        // carries over between fills.
        for &byte in buf {
            if is_whitespace(byte) {
                in_word = false;
            } else if !in_word {
                in_word = true;
                counts.words += 1;
            }
        }

        let len = buf.len();
        reader.consume(len);
    }

    Ok(counts)
}
