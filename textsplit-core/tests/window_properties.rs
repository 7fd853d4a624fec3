//! Property tests for window construction, overlap clipping and assembly

use proptest::prelude::*;
use textsplit_core::{
    build_windows, ChunkAssembler, CountSplitCondition, FixedOverlap, NoOverlap, OverlapCondition,
    ParagraphMatcher, PercentageOverlap, SentenceMatcher, SplitCondition, SplitPoint,
    WordMatcher,
};

fn assert_partition(windows: &[SplitPoint], len: usize) {
    if len == 0 {
        assert_eq!(windows, &[SplitPoint::new(0, 0)]);
        return;
    }

    assert_eq!(windows.first().map(SplitPoint::start), Some(0));
    assert_eq!(windows.last().map(SplitPoint::end), Some(len));
    for window in windows {
        assert!(window.start() < window.end(), "empty window {window}");
    }
    for pair in windows.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start(), "gap or overlap at {}", pair[0]);
    }
}

proptest! {
    #[test]
    fn windows_partition_the_document(
        len in 0usize..500,
        boundaries in prop::collection::vec(0usize..600, 0..30),
    ) {
        let windows = build_windows(&boundaries, len);
        assert_partition(&windows, len);
    }

    #[test]
    fn no_overlap_is_identity(
        len in 1usize..500,
        boundaries in prop::collection::vec(0usize..500, 0..30),
    ) {
        let windows = build_windows(&boundaries, len);
        prop_assert_eq!(NoOverlap.apply(&windows).unwrap(), windows);
    }

    #[test]
    fn percentage_overlap_only_moves_starts_earlier(
        len in 1usize..500,
        boundaries in prop::collection::vec(0usize..500, 0..30),
        percent in 0.0f32..99.99f32,
    ) {
        let plain = build_windows(&boundaries, len);
        let overlapped = PercentageOverlap::new(percent).unwrap().apply(&plain).unwrap();

        prop_assert_eq!(overlapped.len(), plain.len());
        prop_assert_eq!(overlapped[0], plain[0]);
        for (i, (before, after)) in plain.iter().zip(&overlapped).enumerate() {
            prop_assert_eq!(before.end(), after.end());
            prop_assert!(after.start() <= before.start());
            prop_assert!(after.start() < after.end());
            if i > 0 {
                prop_assert!(after.start() > overlapped[i - 1].start());
            }
        }
    }

    #[test]
    fn smaller_percentage_never_borrows_more(
        len in 1usize..500,
        boundaries in prop::collection::vec(0usize..500, 0..30),
        low in 0.0f32..99.0f32,
        extra in 0.0f32..0.99f32,
    ) {
        let high = low + extra;
        let plain = build_windows(&boundaries, len);
        let less = PercentageOverlap::new(low).unwrap().apply(&plain).unwrap();
        let more = PercentageOverlap::new(high).unwrap().apply(&plain).unwrap();

        for (a, b) in less.iter().zip(&more) {
            prop_assert!(a.start() >= b.start());
        }
    }

    #[test]
    fn fixed_overlap_keeps_starts_increasing(
        len in 1usize..300,
        boundaries in prop::collection::vec(0usize..300, 0..30),
        chars in 0usize..400,
    ) {
        let plain = build_windows(&boundaries, len);
        let overlapped = FixedOverlap::new(chars).apply(&plain).unwrap();
        for pair in overlapped.windows(2) {
            prop_assert!(pair[0].start() < pair[1].start());
        }
    }

    #[test]
    fn plain_chunks_reconstruct_the_text(text in "\\PC{0,200}", budget in 1usize..5) {
        for condition in [
            CountSplitCondition::new(ParagraphMatcher),
            CountSplitCondition::new(SentenceMatcher),
            CountSplitCondition::new(WordMatcher),
        ] {
            let boundaries = condition.detect(&text, budget).unwrap();
            let windows = build_windows(&boundaries, text.chars().count());
            let count = windows.len();

            let chunks: Vec<String> = ChunkAssembler::new(text.as_str(), windows, false)
                .map(|chunk| chunk.into_contents())
                .collect();

            prop_assert_eq!(chunks.len(), count);
            prop_assert_eq!(chunks.concat(), text.clone());
        }
    }

    #[test]
    fn trimmed_chunks_are_substrings_of_their_window(
        text in "[a-z \\n\\t]{0,200}",
        percent in 0.0f32..90.0f32,
    ) {
        let condition = CountSplitCondition::new(WordMatcher);
        let boundaries = condition.detect(&text, 3).unwrap();
        let windows = build_windows(&boundaries, text.chars().count());
        let windows = PercentageOverlap::new(percent).unwrap().apply(&windows).unwrap();

        for chunk in ChunkAssembler::new(text.as_str(), windows, true) {
            let window = chunk.split_point();
            let raw = &text[window.start()..window.end()];
            prop_assert!(raw.contains(chunk.contents()));
            prop_assert_eq!(raw.trim(), chunk.contents());
        }
    }
}
