//! Indicator configuration: construction-time, immutable per instance.
//!
//! Invalid configurations are rejected here; once an indicator is built,
//! nothing in the animation path can fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::redistribute::DEFAULT_MIN_SEGMENT_ANGLE_DEG;
use crate::segment::Segment;
use crate::transition::DEFAULT_TRANSITION_DURATION_MS;

/// Errors produced while validating an indicator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("indicator needs at least one layer")]
    NoLayers,
    #[error("layer {layer} has {count} segments; redistribution needs at least 3")]
    TooFewSegments { layer: usize, count: usize },
    #[error("layer {layer} radii must be positive with inner < outer (inner={inner}, outer={outer})")]
    BadRadii { layer: usize, inner: f32, outer: f32 },
    #[error("transition duration must be positive, got {0} ms")]
    BadDuration(f32),
    #[error("redistribution interval must be positive, got {0} ms")]
    BadInterval(f32),
}

/// Static ring drawn behind all layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundStyle {
    pub radius: f32,
    pub color: String,
    pub stroke_width: f32,
}

/// Solid disc masking the center hole.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskStyle {
    pub radius: f32,
    pub color: String,
}

/// One concentric ring: its segments, radii, and rotation rate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub segments: Vec<Segment>,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Constant angular velocity of the whole ring.
    pub rotation_speed_deg_per_ms: f32,
    /// Starting rotation; multi-ring presets fan their layers out with it.
    #[serde(default)]
    pub initial_rotation_deg: f32,
}

/// Construction-time configuration for a
/// [`RingIndicator`](crate::indicator::RingIndicator).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Square view size; all geometry is centered at half of it.
    pub view_size: f32,
    pub corner_radius: f32,
    pub fill_opacity: f32,
    pub transition_duration_ms: f32,
    /// Redistribution cadence of layer 0.
    pub base_change_interval_ms: f32,
    /// Extra cadence per layer index, so layers never retarget in lockstep.
    pub change_stagger_ms: f32,
    pub max_angle_change_deg: f32,
    pub min_segment_angle_deg: f32,
    pub background: BackgroundStyle,
    pub center_mask: MaskStyle,
    pub layers: Vec<LayerConfig>,
}

impl Default for IndicatorConfig {
    /// The classic single-ring indicator: three 110° segments with 10° gaps
    /// on a 100-unit viewbox, one full revolution every 3.6 s.
    fn default() -> Self {
        Self {
            view_size: 100.0,
            corner_radius: 5.0,
            fill_opacity: 0.7,
            transition_duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            base_change_interval_ms: 1500.0,
            change_stagger_ms: 0.0,
            max_angle_change_deg: 40.0,
            min_segment_angle_deg: DEFAULT_MIN_SEGMENT_ANGLE_DEG,
            background: BackgroundStyle {
                radius: 48.0,
                color: "#f3f4f6".to_string(),
                stroke_width: 6.0,
            },
            center_mask: MaskStyle {
                radius: 28.0,
                color: "white".to_string(),
            },
            layers: vec![LayerConfig {
                segments: vec![
                    Segment::new(110.0, "#3b82f6", 10.0),
                    Segment::new(110.0, "#10b981", 10.0),
                    Segment::new(110.0, "#f97316", 10.0),
                ],
                inner_radius: 35.0,
                outer_radius: 49.0,
                rotation_speed_deg_per_ms: 0.1,
                initial_rotation_deg: 0.0,
            }],
        }
    }
}

impl IndicatorConfig {
    /// Check the construction-time invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layers.is_empty() {
            return Err(ConfigError::NoLayers);
        }
        if self.transition_duration_ms <= 0.0 {
            return Err(ConfigError::BadDuration(self.transition_duration_ms));
        }
        if self.base_change_interval_ms <= 0.0 {
            return Err(ConfigError::BadInterval(self.base_change_interval_ms));
        }
        for (index, layer) in self.layers.iter().enumerate() {
            // The fixed + grow + shrink selection needs two non-fixed candidates.
            if layer.segments.len() < 3 {
                return Err(ConfigError::TooFewSegments {
                    layer: index,
                    count: layer.segments.len(),
                });
            }
            if layer.inner_radius <= 0.0
                || layer.outer_radius <= 0.0
                || layer.inner_radius >= layer.outer_radius
            {
                return Err(ConfigError::BadRadii {
                    layer: index,
                    inner: layer.inner_radius,
                    outer: layer.outer_radius,
                });
            }
        }
        Ok(())
    }
}
