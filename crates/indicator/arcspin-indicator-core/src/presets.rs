//! Ready-made indicator configurations for the shipped variants.
//!
//! Three variants share the same engine and differ only in configuration:
//! the single three-segment ring, the three stacked rings with hand-picked
//! blue palettes, and the n-ring tower with an interpolated blue ramp.

use crate::config::{BackgroundStyle, IndicatorConfig, LayerConfig, MaskStyle};
use crate::segment::Segment;

const LIGHT_TRACK: &str = "#f3f4f6";
const DARK_TRACK: &str = "#374151";

/// The classic single-ring indicator.
pub fn arc_indicator() -> IndicatorConfig {
    IndicatorConfig::default()
}

/// Three stacked rings at radii 30/42/54, outer rings spinning faster,
/// fanned out 30° apart, each with its own blue triple.
pub fn multi_arc_indicator(dark_mode: bool) -> IndicatorConfig {
    let palettes: [[&str; 3]; 3] = [
        ["#0c4a6e", "#075985", "#0369a1"],
        ["#0284c7", "#0ea5e9", "#38bdf8"],
        ["#7dd3fc", "#bae6fd", "#e0f2fe"],
    ];
    let radii = [30.0f32, 42.0, 54.0];
    let speeds = [0.1f32, 0.08, 0.06];
    let arc_width = 8.0;

    let layers = (0..3)
        .map(|i| LayerConfig {
            segments: palettes[i]
                .iter()
                .map(|color| Segment::new(110.0, *color, 10.0))
                .collect(),
            inner_radius: radii[i] - arc_width / 2.0,
            outer_radius: radii[i] + arc_width / 2.0,
            rotation_speed_deg_per_ms: speeds[i],
            initial_rotation_deg: i as f32 * 30.0,
        })
        .collect();

    IndicatorConfig {
        corner_radius: 5.0,
        fill_opacity: if dark_mode { 0.5 } else { 0.7 },
        base_change_interval_ms: 2000.0,
        change_stagger_ms: 500.0,
        background: BackgroundStyle {
            radius: 48.0,
            color: track_color(dark_mode).to_string(),
            stroke_width: 6.0,
        },
        center_mask: MaskStyle {
            radius: 22.0,
            color: if dark_mode { "#1f2937" } else { "white" }.to_string(),
        },
        layers,
        ..IndicatorConfig::default()
    }
}

/// A tower of `layer_count` rings shrinking inward, each a step along a
/// blue ramp, inner rings spinning slower.
pub fn multi_layer_indicator(
    layer_count: usize,
    dark_mode: bool,
    reverse_colors: bool,
) -> IndicatorConfig {
    let shades = blue_shades(layer_count, reverse_colors, dark_mode);

    let layers = (0..layer_count)
        .map(|i| {
            let radius = 42.0 - i as f32 * 4.0;
            let arc_width = 12.0 + i as f32;
            LayerConfig {
                segments: (0..3)
                    .map(|_| Segment::new(110.0, shades[i].clone(), 10.0))
                    .collect(),
                inner_radius: radius - arc_width / 2.0,
                outer_radius: radius + arc_width / 2.0,
                rotation_speed_deg_per_ms: (1.0 - i as f32 * 0.2) / 10.0,
                initial_rotation_deg: 0.0,
            }
        })
        .collect();

    IndicatorConfig {
        corner_radius: 10.0,
        base_change_interval_ms: 1500.0,
        change_stagger_ms: 400.0,
        background: BackgroundStyle {
            radius: 48.0,
            color: track_color(dark_mode).to_string(),
            stroke_width: 6.0,
        },
        center_mask: MaskStyle {
            radius: 28.0,
            color: if dark_mode { "#111827" } else { "white" }.to_string(),
        },
        layers,
        ..IndicatorConfig::default()
    }
}

/// Interpolated blue ramp across `count` layers. Light mode runs
/// #3b82f6 → #93c5fd; dark mode uses brighter, more saturated endpoints.
pub fn blue_shades(count: usize, reverse: bool, dark_mode: bool) -> Vec<String> {
    let (deep, bright): ([u32; 3], [u32; 3]) = if dark_mode {
        ([37, 99, 235], [96, 165, 250])
    } else {
        ([59, 130, 246], [147, 197, 253])
    };
    let (start, end) = if reverse { (bright, deep) } else { (deep, bright) };

    if count <= 1 {
        return vec![format!("rgb({}, {}, {})", start[0], start[1], start[2])];
    }
    (0..count)
        .map(|i| {
            let factor = i as f32 / (count - 1) as f32;
            let channel = |c: usize| {
                (start[c] as f32 + factor * (end[c] as f32 - start[c] as f32)).round() as u32
            };
            format!("rgb({}, {}, {})", channel(0), channel(1), channel(2))
        })
        .collect()
}

fn track_color(dark_mode: bool) -> &'static str {
    if dark_mode {
        DARK_TRACK
    } else {
        LIGHT_TRACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_pass_validation() {
        assert!(arc_indicator().validate().is_ok());
        assert!(multi_arc_indicator(false).validate().is_ok());
        assert!(multi_arc_indicator(true).validate().is_ok());
        assert!(multi_layer_indicator(3, false, false).validate().is_ok());
        assert!(multi_layer_indicator(5, true, true).validate().is_ok());
    }

    #[test]
    fn blue_shades_endpoints_and_reversal() {
        let ramp = blue_shades(3, false, false);
        assert_eq!(ramp[0], "rgb(59, 130, 246)");
        assert_eq!(ramp[2], "rgb(147, 197, 253)");
        let reversed = blue_shades(3, true, false);
        assert_eq!(reversed[0], "rgb(147, 197, 253)");
        assert_eq!(reversed[2], "rgb(59, 130, 246)");
    }

    #[test]
    fn multi_arc_layers_fan_out() {
        let cfg = multi_arc_indicator(false);
        assert_eq!(cfg.layers.len(), 3);
        assert_eq!(cfg.layers[1].initial_rotation_deg, 30.0);
        assert_eq!(cfg.layers[2].initial_rotation_deg, 60.0);
        assert!(cfg.layers[0].rotation_speed_deg_per_ms > cfg.layers[2].rotation_speed_deg_per_ms);
    }
}
