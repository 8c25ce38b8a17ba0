//! Property-based tests for the segment scanner and motion classifier.

use padtouch_slider::{DEBOUNCE_GAP, HandTracker, Motion, Segment, StickX, detect_motion, find_segments};
use proptest::prelude::*;

fn covered(segments: &[Segment]) -> u32 {
    segments.iter().fold(0u32, |bits, seg| {
        (seg.end..=seg.start).fold(bits, |acc, bit| acc | (1u32 << bit))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Segments are ordered left to right, never overlap, start and end on
    /// set bits, and together cover every set bit.
    #[test]
    fn prop_segments_cover_set_bits(bits in any::<u32>()) {
        let segments = find_segments(bits);
        for seg in &segments {
            prop_assert!(seg.start >= seg.end);
            prop_assert!(bits & (1 << seg.start) != 0);
            prop_assert!(bits & (1 << seg.end) != 0);
        }
        for pair in segments.windows(2) {
            if let [left, right] = pair {
                prop_assert!(left.end > right.start);
                // Separated by more than the debounce gap.
                prop_assert!(left.end - right.start > DEBOUNCE_GAP + 1);
            }
        }
        prop_assert_eq!(covered(&segments) & bits, bits);
    }

    /// Within a segment no run of clear bits is longer than the gap.
    #[test]
    fn prop_gaps_inside_segment_are_short(bits in any::<u32>()) {
        for seg in find_segments(bits) {
            let mut gap = 0u8;
            for bit in (seg.end..=seg.start).rev() {
                if bits & (1 << bit) == 0 {
                    gap += 1;
                    prop_assert!(gap <= DEBOUNCE_GAP);
                } else {
                    gap = 0;
                }
            }
        }
    }

    /// Swapping the frames flips the motion.
    #[test]
    fn prop_motion_antisymmetric(a in 0u8..32, b in 0u8..32, c in 0u8..32, d in 0u8..32) {
        let old = Segment::new(a.max(b), a.min(b));
        let new = Segment::new(c.max(d), c.min(d));
        let forward = detect_motion(&old, &new).signum();
        let backward = detect_motion(&new, &old).signum();
        prop_assert_eq!(forward, -backward);
        prop_assert_eq!(detect_motion(&old, &old), Motion::Still);
    }

    /// Stick values only ever take the three digital positions.
    #[test]
    fn prop_sticks_are_digital(frames in prop::collection::vec(any::<u32>(), 1..20)) {
        let mut tracker = HandTracker::new();
        for bits in frames {
            let StickX { left_x, right_x } = tracker.update(bits);
            prop_assert!([0u8, 128, 255].contains(&left_x));
            prop_assert!([0u8, 128, 255].contains(&right_x));
            if bits == 0 {
                prop_assert_eq!(StickX { left_x, right_x }, StickX::CENTERED);
            }
        }
    }
}
