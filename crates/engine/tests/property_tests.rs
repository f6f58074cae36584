use std::io::Cursor;

use count_text_engine::exclusion::{byte_delta, word_delta};
use count_text_engine::scanner::scan;
use count_text_engine::stats::SourceCounts;
use proptest::prelude::*;

fn counts_of(content: &[u8]) -> SourceCounts {
    scan(&mut Cursor::new(content)).unwrap()
}

proptest! {
    #[test]
    fn counts_never_exceed_byte_count(content in proptest::collection::vec(any::<u8>(), 0..1000)) {
        let stats = counts_of(&content);
        prop_assert_eq!(stats.bytes, content.len());
        prop_assert!(stats.lines <= stats.bytes);
        prop_assert!(stats.words <= stats.bytes);
    }

    #[test]
    fn streams_without_markers_have_zero_deltas(content in "[^/]{0,500}") {
        let bytes = byte_delta(&mut Cursor::new(content.as_bytes())).unwrap();
        let words = word_delta(&mut Cursor::new(content.as_bytes())).unwrap();
        prop_assert_eq!((bytes, words), (0, 0));
    }

    #[test]
    fn deltas_are_idempotent(content in proptest::collection::vec(any::<u8>(), 0..1000)) {
        let first = byte_delta(&mut Cursor::new(&content)).unwrap();
        let second = byte_delta(&mut Cursor::new(&content)).unwrap();
        prop_assert_eq!(first, second);

        let first = word_delta(&mut Cursor::new(&content)).unwrap();
        let second = word_delta(&mut Cursor::new(&content)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn corrected_counts_never_exceed_raw_counts(content in proptest::collection::vec(any::<u8>(), 0..1000)) {
        let raw = counts_of(&content);
        let deltas = count_text_engine::exclusion::ExclusionDeltas {
            bytes: byte_delta(&mut Cursor::new(&content)).unwrap(),
            words: word_delta(&mut Cursor::new(&content)).unwrap(),
        };
        let fixed = raw.corrected(&deltas);
        prop_assert!(fixed.words <= raw.words);
        prop_assert!(fixed.bytes <= raw.bytes);
        prop_assert_eq!(fixed.lines, raw.lines);
    }

    #[test]
    fn deltas_never_exceed_raw_counts(content in proptest::collection::vec(any::<u8>(), 0..1000)) {
        let raw = counts_of(&content);
        let bytes = byte_delta(&mut Cursor::new(&content)).unwrap();
        let words = word_delta(&mut Cursor::new(&content)).unwrap();
        prop_assert!(bytes <= raw.bytes);
        prop_assert!(words <= raw.words);
    }
}
