//! Segment data model: one ring's angular layout.

use serde::{Deserialize, Serialize};

/// Tolerance on the 360° tiling invariant. Rounding during interpolation is
/// expected; drift past this is a programming-error signal, never fatal.
pub const SUM_TOLERANCE_DEG: f32 = 1.0;

/// One colored wedge plus the empty space before the next segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Span of the wedge in degrees (> 0).
    pub angle_deg: f32,
    /// Opaque color token handed through to the renderer untouched.
    pub color: String,
    /// Gap to the next segment in degrees (≥ 0).
    #[serde(default)]
    pub gap_deg: f32,
}

impl Segment {
    pub fn new(angle_deg: f32, color: impl Into<String>, gap_deg: f32) -> Self {
        Self {
            angle_deg,
            color: color.into(),
            gap_deg,
        }
    }
}

/// Ordered segments; insertion order is angular order around the circle
/// starting from the set's local angle 0 (pre-rotation).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentSet {
    pub segments: Vec<Segment>,
}

impl SegmentSet {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Σ(angle + gap) across the set, in degrees.
    pub fn total_deg(&self) -> f32 {
        self.segments
            .iter()
            .map(|s| s.angle_deg + s.gap_deg)
            .sum()
    }

    /// Iterate segments paired with their running start angle in the
    /// un-rotated local frame.
    pub fn iter_with_start(&self) -> impl Iterator<Item = (f32, &Segment)> + '_ {
        self.segments.iter().scan(0.0f32, |start, segment| {
            let at = *start;
            *start += segment.angle_deg + segment.gap_deg;
            Some((at, segment))
        })
    }

    /// Warn-level diagnostic for the tiling invariant; never halts animation.
    pub fn warn_if_unbalanced(&self) {
        let total = self.total_deg();
        if (total - 360.0).abs() > SUM_TOLERANCE_DEG {
            log::warn!("segment angles and gaps should total 360°, currently {total}°");
        }
    }
}
