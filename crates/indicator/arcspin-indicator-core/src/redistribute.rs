//! Target selection for the periodic segment-angle redistribution.
//!
//! Each round one randomly chosen segment sits out; of the remaining two
//! candidates the smaller grows and the larger shrinks, bounded so no
//! segment drops below the floor and no single round changes the layout too
//! violently. Gaps never change.

use crate::random::RandomSource;
use crate::segment::SegmentSet;

/// Default floor for any segment's angle after a redistribution.
pub const DEFAULT_MIN_SEGMENT_ANGLE_DEG: f32 = 30.0;

/// Smallest change a round will apply, in degrees.
const MIN_ANGLE_CHANGE_DEG: f32 = 10.0;

/// Cap on one round's change relative to the growing segment's current
/// angle, so a small segment cannot balloon in a single step.
const GROW_FRACTION_LIMIT: f32 = 0.7;

/// Picks new target angles for a segment set under safety bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Redistributor {
    pub max_angle_change_deg: f32,
    pub min_segment_angle_deg: f32,
}

impl Redistributor {
    pub fn new(max_angle_change_deg: f32) -> Self {
        Self {
            max_angle_change_deg,
            min_segment_angle_deg: DEFAULT_MIN_SEGMENT_ANGLE_DEG,
        }
    }

    /// Compute the next target set from `current`.
    ///
    /// `current` must hold at least three segments; that is a configuration
    /// invariant enforced when the indicator is built, not re-checked per
    /// call. The shrinking side is floored at `min_segment_angle_deg` while
    /// the growing side takes the full sampled change, so the total can
    /// drift within the warn tolerance — longstanding behavior the visuals
    /// depend on, corrected implicitly over later rounds.
    pub fn next_target(&self, current: &SegmentSet, rng: &mut dyn RandomSource) -> SegmentSet {
        let segments = &current.segments;
        debug_assert!(segments.len() >= 3, "redistribution needs 3+ segments");

        // One segment sits this round out.
        let fixed = ((rng.next_unit() * segments.len() as f32).floor() as usize)
            .min(segments.len() - 1);

        // First two non-fixed indices are the round's candidates.
        let mut candidates = (0..segments.len()).filter(|&i| i != fixed);
        let first = candidates.next().unwrap_or(0);
        let second = candidates.next().unwrap_or(first);

        // Smaller grows, larger shrinks; a tie keeps the earlier index on
        // the growing side.
        let (grow, shrink) = if segments[first].angle_deg <= segments[second].angle_deg {
            (first, second)
        } else {
            (second, first)
        };

        let max_decrease = (segments[shrink].angle_deg - self.min_segment_angle_deg).max(0.0);
        let safe_limit = max_decrease
            .min(segments[grow].angle_deg * GROW_FRACTION_LIMIT)
            .min(self.max_angle_change_deg);
        let angle_change = (rng.next_unit() * safe_limit).floor().max(MIN_ANGLE_CHANGE_DEG);

        let actual_decrease = angle_change.min(max_decrease);
        let actual_increase = angle_change;

        let mut target = current.clone();
        target.segments[grow].angle_deg += actual_increase;
        target.segments[shrink].angle_deg = self
            .min_segment_angle_deg
            .max(segments[shrink].angle_deg - actual_decrease);
        target
    }
}
