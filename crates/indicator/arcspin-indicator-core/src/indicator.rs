//! RingIndicator: the externally visible unit.
//!
//! Owns its layers and per-frame output; driven entirely from outside via
//! `advance` (the frame callback body) and `redistribute_layer` (the
//! interval callback body), so hosts and tests control time explicitly.

use crate::config::{ConfigError, IndicatorConfig};
use crate::layer::Layer;
use crate::outputs::{BackgroundRing, CenterMask, Frame, LayerFrame};
use crate::path::Point;
use crate::random::{RandomSource, ThreadRandom};
use crate::redistribute::Redistributor;

pub struct RingIndicator {
    layers: Vec<Layer>,
    rng: Box<dyn RandomSource>,
    base_change_interval_ms: f32,
    change_stagger_ms: f32,
    center: Point,
    corner_radius: f32,
    fill_opacity: f32,
    frame: Frame,
}

impl RingIndicator {
    /// Validate `cfg` and build the indicator. A rejected configuration is
    /// the only failure mode; the animation path itself cannot fail.
    pub fn new(cfg: IndicatorConfig) -> Result<Self, ConfigError> {
        Self::with_random_source(cfg, Box::new(ThreadRandom))
    }

    /// Like [`RingIndicator::new`] with an injected random source, for
    /// reproducible runs and tests.
    pub fn with_random_source(
        cfg: IndicatorConfig,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let center = Point::new(cfg.view_size / 2.0, cfg.view_size / 2.0);
        let redistributor = Redistributor {
            max_angle_change_deg: cfg.max_angle_change_deg,
            min_segment_angle_deg: cfg.min_segment_angle_deg,
        };
        let layers: Vec<Layer> = cfg
            .layers
            .iter()
            .map(|layer| Layer::new(layer, redistributor, cfg.transition_duration_ms))
            .collect();
        let frame = Frame {
            view_size: cfg.view_size,
            layers: cfg
                .layers
                .iter()
                .map(|layer| LayerFrame {
                    rotation_deg: layer.initial_rotation_deg,
                    wedges: Vec::new(),
                })
                .collect(),
            background: BackgroundRing {
                center,
                radius: cfg.background.radius,
                color: cfg.background.color.clone(),
                stroke_width: cfg.background.stroke_width,
            },
            center_mask: CenterMask {
                center,
                radius: cfg.center_mask.radius,
                color: cfg.center_mask.color.clone(),
            },
        };

        Ok(Self {
            layers,
            rng,
            base_change_interval_ms: cfg.base_change_interval_ms,
            change_stagger_ms: cfg.change_stagger_ms,
            center,
            corner_radius: cfg.corner_radius,
            fill_opacity: cfg.fill_opacity,
            frame,
        })
    }

    /// Advance every layer by `dt_ms` and rebuild the frame.
    ///
    /// A host that stops scheduling frames simply stops calling this; there
    /// is no missed-tick debt, and the next call uses the true elapsed
    /// delta.
    pub fn advance(&mut self, dt_ms: f32) -> &Frame {
        for (layer, layer_frame) in self.layers.iter_mut().zip(&mut self.frame.layers) {
            layer.advance_into(
                dt_ms,
                self.center,
                self.corner_radius,
                self.fill_opacity,
                layer_frame,
            );
        }
        &self.frame
    }

    /// Redistribute one layer's segment angles; the interval callback body.
    /// Out-of-range indices are ignored, so a late timer fire racing a
    /// teardown stays harmless.
    pub fn redistribute_layer(&mut self, index: usize) {
        if let Some(layer) = self.layers.get_mut(index) {
            layer.retarget(self.rng.as_mut());
        }
    }

    /// Frame from the most recent [`RingIndicator::advance`] call.
    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Redistribution cadence for layer `index`: staggered so layers never
    /// retarget in visual lockstep.
    #[inline]
    pub fn change_interval_ms(&self, index: usize) -> f32 {
        self.base_change_interval_ms + index as f32 * self.change_stagger_ms
    }
}
