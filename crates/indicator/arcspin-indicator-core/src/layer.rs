//! One concentric ring: segment animation plus rotation.

use crate::config::LayerConfig;
use crate::geometry::rounded_wedge;
use crate::outputs::{LayerFrame, WedgeDraw};
use crate::path::Point;
use crate::random::RandomSource;
use crate::redistribute::Redistributor;
use crate::rotation::RotationAccumulator;
use crate::segment::SegmentSet;
use crate::transition::TransitionAnimator;

/// Runtime state of one ring layer. Owns its segment set (inside the
/// animator) and its rotation accumulator exclusively.
#[derive(Clone, Debug)]
pub struct Layer {
    animator: TransitionAnimator,
    rotation: RotationAccumulator,
    redistributor: Redistributor,
    inner_radius: f32,
    outer_radius: f32,
}

impl Layer {
    pub(crate) fn new(
        cfg: &LayerConfig,
        redistributor: Redistributor,
        transition_duration_ms: f32,
    ) -> Self {
        Self {
            animator: TransitionAnimator::new(
                SegmentSet::new(cfg.segments.clone()),
                transition_duration_ms,
            ),
            rotation: RotationAccumulator::new(
                cfg.initial_rotation_deg,
                cfg.rotation_speed_deg_per_ms,
            ),
            redistributor,
            inner_radius: cfg.inner_radius,
            outer_radius: cfg.outer_radius,
        }
    }

    /// Tick both animations with the same elapsed time and rebuild this
    /// layer's wedges into `frame`. Geometry is built from local angle 0;
    /// the frame's `rotation_deg` is applied by the renderer afterwards.
    pub(crate) fn advance_into(
        &mut self,
        dt_ms: f32,
        center: Point,
        corner_radius: f32,
        fill_opacity: f32,
        frame: &mut LayerFrame,
    ) {
        frame.rotation_deg = self.rotation.tick(dt_ms);
        let segments = self.animator.tick(dt_ms);
        segments.warn_if_unbalanced();

        frame.wedges.clear();
        for (start_deg, segment) in segments.iter_with_start() {
            frame.wedges.push(WedgeDraw {
                path: rounded_wedge(
                    center,
                    self.inner_radius,
                    self.outer_radius,
                    start_deg,
                    segment.angle_deg,
                    corner_radius,
                ),
                color: segment.color.clone(),
                opacity: fill_opacity,
            });
        }
    }

    /// Pick a fresh target from the current interpolated set and restart
    /// the transition. A mid-flight call redirects smoothly: the new
    /// transition starts from whatever the ring currently shows.
    pub(crate) fn retarget(&mut self, rng: &mut dyn RandomSource) {
        let target = self.redistributor.next_target(self.animator.current(), rng);
        self.animator.start(target);
    }

    /// The segment set as currently shown (interpolated mid-transition).
    #[inline]
    pub fn segments(&self) -> &SegmentSet {
        self.animator.current()
    }

    /// The set the active transition is heading toward.
    #[inline]
    pub fn target_segments(&self) -> &SegmentSet {
        self.animator.target()
    }

    #[inline]
    pub fn rotation_deg(&self) -> f32 {
        self.rotation.angle_deg()
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        !self.animator.is_idle()
    }
}
