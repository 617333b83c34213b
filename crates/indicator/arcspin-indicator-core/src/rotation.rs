//! Per-layer rotation state.

use serde::{Deserialize, Serialize};

/// Accumulates a wrapped rotation angle at a fixed angular velocity.
///
/// Every layer owns exactly one accumulator; layers never read or write
/// each other's.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationAccumulator {
    angle_deg: f32,
    speed_deg_per_ms: f32,
}

impl RotationAccumulator {
    pub fn new(initial_deg: f32, speed_deg_per_ms: f32) -> Self {
        Self {
            angle_deg: initial_deg.rem_euclid(360.0),
            speed_deg_per_ms,
        }
    }

    /// Advance by `dt_ms` and return the new angle, normalized to [0, 360).
    #[inline]
    pub fn tick(&mut self, dt_ms: f32) -> f32 {
        self.angle_deg = (self.angle_deg + dt_ms * self.speed_deg_per_ms).rem_euclid(360.0);
        self.angle_deg
    }

    #[inline]
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }
}
