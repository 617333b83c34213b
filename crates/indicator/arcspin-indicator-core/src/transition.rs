//! Eased transition between a segment set and its redistribution target.

use serde::{Deserialize, Serialize};

use crate::easing::ease_in_out_cubic;
use crate::segment::SegmentSet;

/// Default wall-clock length of one transition.
pub const DEFAULT_TRANSITION_DURATION_MS: f32 = 2000.0;

/// Drives a segment set from `current` toward `target` over a fixed
/// duration. `progress == 1` means idle; a redistribution restarts it at 0.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionAnimator {
    current: SegmentSet,
    target: SegmentSet,
    progress: f32,
    duration_ms: f32,
    /// Interpolated view of the set as of the last tick.
    interpolated: SegmentSet,
}

impl TransitionAnimator {
    pub fn new(initial: SegmentSet, duration_ms: f32) -> Self {
        Self {
            interpolated: initial.clone(),
            target: initial.clone(),
            current: initial,
            progress: 1.0,
            duration_ms,
        }
    }

    /// Begin a transition toward `target`.
    ///
    /// Restarting mid-flight re-bases `current` on the interpolated state
    /// at this instant, so a redirect stays smooth instead of jumping to
    /// the abandoned target first.
    pub fn start(&mut self, target: SegmentSet) {
        self.current = self.interpolated.clone();
        self.target = target;
        self.progress = 0.0;
    }

    /// Advance by `dt_ms` and return the interpolated set.
    ///
    /// Reaching the end snaps `current` to `target` exactly, so no residual
    /// float error survives a completed transition.
    pub fn tick(&mut self, dt_ms: f32) -> &SegmentSet {
        if self.progress < 1.0 {
            self.progress = (self.progress + dt_ms / self.duration_ms).min(1.0);
            if self.progress >= 1.0 {
                self.current = self.target.clone();
                self.interpolated = self.target.clone();
            } else {
                let eased = ease_in_out_cubic(self.progress);
                for ((out, cur), tgt) in self
                    .interpolated
                    .segments
                    .iter_mut()
                    .zip(&self.current.segments)
                    .zip(&self.target.segments)
                {
                    out.angle_deg = cur.angle_deg + (tgt.angle_deg - cur.angle_deg) * eased;
                }
            }
        }
        &self.interpolated
    }

    /// Interpolated set as of the last tick (or restart point).
    #[inline]
    pub fn current(&self) -> &SegmentSet {
        &self.interpolated
    }

    #[inline]
    pub fn target(&self) -> &SegmentSet {
        &self.target
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.progress >= 1.0
    }
}
