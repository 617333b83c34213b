//! SVG adapter for arcspin indicators.
//!
//! Serializes a core [`Frame`] into a standalone SVG document: background
//! ring, one rotated `<g>` per layer with a `<path>` per wedge, and the
//! center mask on top. The rotation is applied here as a group transform —
//! wedge geometry arrives in each layer's un-rotated local frame.

use std::fmt::Write as _;

use arcspin_indicator_core::{Frame, FrameSink};

/// Renders frames to SVG documents, retaining the most recent one.
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    last_document: String,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the most recent paint, empty before the
    /// first frame.
    pub fn last_document(&self) -> &str {
        &self.last_document
    }

    /// Serialize one frame to a complete SVG document.
    pub fn render_document(&self, frame: &Frame) -> String {
        let size = frame.view_size;
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}">"#
        );

        let bg = &frame.background;
        let _ = write!(
            svg,
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            bg.center.x, bg.center.y, bg.radius, bg.color, bg.stroke_width
        );

        for layer in &frame.layers {
            let _ = write!(
                svg,
                r#"<g transform="rotate({} {} {})">"#,
                layer.rotation_deg,
                size / 2.0,
                size / 2.0
            );
            for wedge in &layer.wedges {
                let _ = write!(
                    svg,
                    r#"<path d="{}" fill="{}" fill-opacity="{}"/>"#,
                    wedge.path.to_svg(),
                    wedge.color,
                    wedge.opacity
                );
            }
            svg.push_str("</g>");
        }

        let mask = &frame.center_mask;
        let _ = write!(
            svg,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            mask.center.x, mask.center.y, mask.radius, mask.color
        );

        svg.push_str("</svg>");
        svg
    }
}

impl FrameSink for SvgRenderer {
    fn paint(&mut self, frame: &Frame) {
        self.last_document = self.render_document(frame);
    }
}
