// crates/engine/src/exclusion.rs
//! Pre-pass that measures how much of a stream sits inside `//` comments.
//!
//! Comment spans run from the `//` marker through (but not including) the
//! next newline or end-of-stream; the newline stays in the stream and still
//! terminates a line. Byte and word exclusion follow different boundary
//! rules, so they are two independent passes: bytes are removed wholesale,
//! while words need to know what sat immediately outside the span to avoid
//! subtracting a word that only partially overlaps a comment.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::source::Input;
use crate::whitespace::is_whitespace;

/// Corrections to subtract from raw scanner counts for one source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionDeltas {
    pub bytes: usize,
    pub words: usize,
}

/// Run both exclusion passes over `input`, opening it once per pass.
///
/// # Errors
///
/// Fails with [`EngineError::SourceUnreadable`] if the input cannot be opened
/// or read.
pub fn measure(input: &Input) -> Result<ExclusionDeltas> {
    let unreadable = |source| EngineError::SourceUnreadable { name: input.describe(), source };

    let mut reader = input.open().map_err(unreadable)?;
    let bytes = byte_delta(&mut reader).map_err(unreadable)?;

    let mut reader = input.open().map_err(unreadable)?;
    let words = word_delta(&mut reader).map_err(unreadable)?;

    Ok(ExclusionDeltas { bytes, words })
}

/// Count the bytes consumed by `//` markers and their spans.
///
/// `//` is two consecutive `/` bytes anywhere in the stream. Once a marker is
/// found, every byte up to the next newline or end-of-stream counts into the
/// delta, the two marker bytes included. Bytes inside an open span are not
/// re-examined for new markers, so adjacent or overlapping `//` sequences are
/// absorbed.
pub fn byte_delta<R: BufRead>(reader: &mut R) -> std::io::Result<usize> {
    let mut delta = 0;
    let mut in_span = false;
    let mut prev_slash = false;

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        for &byte in buf {
            if in_span {
                if byte == b'\n' {
                    in_span = false;
                } else {
                    delta += 1;
                }
            } else if byte == b'/' && prev_slash {
                delta += 2;
                in_span = true;
                prev_slash = false;
            } else {
                prev_slash = byte == b'/';
            }
        }

        let len = buf.len();
        reader.consume(len);
    }

    Ok(delta)
}

/// Word scanning state carried across buffer refills.
#[derive(Debug, Clone, Copy)]
enum WordState {
    /// In whitespace between runs.
    Gap,
    /// Inside a run of non-whitespace bytes, watching for a `//` marker.
    /// `glued` records that the run did not begin with `/`, i.e. the marker
    /// would cut an in-progress word short rather than open its own token.
    Run { glued: bool, prev_slash: bool },
    /// Inside a comment span; `prev_nonws` tracks word boundaries within the
    /// removed content.
    Span { glued: bool, prev_nonws: bool },
}

/// Count the word starts the scanner would have recognized inside comment
/// spans.
///
/// Each span contributes the number of whitespace-to-non-whitespace
/// transitions within its content (the marker itself opens the first run),
/// plus one if the span ends on non-whitespace. When the run carrying the
/// marker began with something other than `/`, that word survives the
/// exclusion as its pre-marker fragment, so the span's contribution drops by
/// one.
pub fn word_delta<R: BufRead>(reader: &mut R) -> std::io::Result<usize> {
    let mut delta = 0;
    let mut state = WordState::Gap;

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        for &byte in buf {
            state = match state {
                WordState::Gap => {
                    if is_whitespace(byte) {
                        WordState::Gap
                    } else {
                        WordState::Run { glued: byte != b'/', prev_slash: byte == b'/' }
                    }
                }
                WordState::Run { glued, prev_slash } => {
                    if is_whitespace(byte) {
                        WordState::Gap
                    } else if byte == b'/' && prev_slash {
                        // Marker found; the second `/` is the last byte seen,
                        // so the span starts on non-whitespace.
                        WordState::Span { glued, prev_nonws: true }
                    } else {
                        WordState::Run { glued, prev_slash: byte == b'/' }
                    }
                }
                WordState::Span { glued, prev_nonws } => {
                    if byte == b'\n' {
                        close_span(&mut delta, prev_nonws, glued);
                        WordState::Gap
                    } else {
                        if prev_nonws && is_whitespace(byte) {
                            delta += 1;
                        }
                        WordState::Span { glued, prev_nonws: !is_whitespace(byte) }
                    }
                }
            };
        }

        let len = buf.len();
        reader.consume(len);
    }

    // A span cut off by end-of-stream still closes.
    if let WordState::Span { glued, prev_nonws } = state {
        close_span(&mut delta, prev_nonws, glued);
    }

    Ok(delta)
}

/// Close out a span: count a final word left open, then drop one for the
/// surviving fragment of a glued marker. A span always contributes at least
/// one word before the glued decrement (the marker run itself ends either on
/// a whitespace transition or here), so the subtraction cannot wrap.
fn close_span(delta: &mut usize, ends_on_word: bool, glued: bool) {
    if ends_on_word {
        *delta += 1;
    }
    if glued {
        *delta -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn deltas(input: &[u8]) -> ExclusionDeltas {
        ExclusionDeltas {
            bytes: byte_delta(&mut Cursor::new(input)).unwrap(),
            words: word_delta(&mut Cursor::new(input)).unwrap(),
        }
    }

    #[test]
    fn stream_without_markers_has_zero_deltas() {
        assert_eq!(deltas(b"plain text / with lone slashes\n"), ExclusionDeltas::default());
    }

    #[test]
    fn standalone_comment() {
        // "//hello world" is 13 bytes; both words sit inside the span.
        assert_eq!(deltas(b"//hello world\n"), ExclusionDeltas { bytes: 13, words: 2 });
    }

    #[test]
    fn glued_comment_keeps_the_leading_word() {
        // "foo" survives, so the span's single word-end is cancelled out.
        assert_eq!(deltas(b"foo//bar\n"), ExclusionDeltas { bytes: 5, words: 0 });
    }

    #[test]
    fn multiple_words_in_comment() {
        assert_eq!(deltas(b"x //a b c\n"), ExclusionDeltas { bytes: 7, words: 3 });
    }

    #[test]
    fn comment_cut_off_by_end_of_stream() {
        assert_eq!(deltas(b"a //b"), ExclusionDeltas { bytes: 3, words: 1 });
    }

    #[test]
    fn glued_comment_ending_on_whitespace() {
        // Trailing space inside the span: the word-end fires on the space,
        // then the glued fragment cancels it.
        assert_eq!(deltas(b"foo//bar \n"), ExclusionDeltas { bytes: 6, words: 0 });
    }

    #[test]
    fn extra_slashes_are_absorbed_by_the_open_span() {
        assert_eq!(deltas(b"////\n"), ExclusionDeltas { bytes: 4, words: 1 });
    }

    #[test]
    fn separated_slashes_are_not_a_marker() {
        assert_eq!(deltas(b"/ /\n"), ExclusionDeltas::default());
    }

    #[test]
    fn scanning_resumes_after_a_span_ends() {
        let input = b"a //b\nc //d\n";
        assert_eq!(deltas(input), ExclusionDeltas { bytes: 6, words: 2 });
    }

    #[test]
    fn second_marker_on_the_same_line_is_absorbed() {
        // "a //b //c\n": one span from the first marker to the newline.
        assert_eq!(deltas(b"a //b //c\n"), ExclusionDeltas { bytes: 7, words: 2 });
    }

    #[test]
    fn marker_inside_a_slash_led_run_over_subtracts() {
        // The run "/x//y" begins with '/', so the pre-marker fragment "/x" is
        // not treated as a surviving word and the whole run is subtracted.
        assert_eq!(deltas(b"/x//y\n"), ExclusionDeltas { bytes: 3, words: 1 });
    }

    #[test]
    fn deltas_are_a_pure_function_of_the_bytes() {
        let input = b"foo//bar\nbaz //qux quux\n";
        assert_eq!(deltas(input), deltas(input));
    }

    #[test]
    fn span_state_survives_small_read_chunks() {
        let input = b"foo//bar\nx //a b c\n";
        let whole = deltas(input);
        let mut reader = BufReader::with_capacity(1, Cursor::new(input.as_slice()));
        let bytes = byte_delta(&mut reader).unwrap();
        let mut reader = BufReader::with_capacity(1, Cursor::new(input.as_slice()));
        let words = word_delta(&mut reader).unwrap();
        assert_eq!(ExclusionDeltas { bytes, words }, whole);
    }
}
