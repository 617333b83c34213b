//! Per-frame output contract across the rendering boundary.
//!
//! The core emits paint-ready descriptors; adapters (SVG, canvas, ...) do
//! the actual painting and never reach back into layer state.

use serde::{Deserialize, Serialize};

use crate::path::{Point, WedgePath};

/// One wedge ready to paint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WedgeDraw {
    pub path: WedgePath,
    pub color: String,
    pub opacity: f32,
}

/// One layer's wedges plus the rigid rotation the renderer applies to the
/// whole group. Wedge geometry is always built in the un-rotated local
/// frame; the rotation comes last, as a transform.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerFrame {
    pub rotation_deg: f32,
    pub wedges: Vec<WedgeDraw>,
}

/// Static ring drawn behind the layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundRing {
    pub center: Point,
    pub radius: f32,
    pub color: String,
    pub stroke_width: f32,
}

/// Solid disc painted over the center hole, on top of the layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CenterMask {
    pub center: Point,
    pub radius: f32,
    pub color: String,
}

/// Everything one animation frame asks the renderer to paint, in paint
/// order: background, layers (array order), center mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub view_size: f32,
    pub layers: Vec<LayerFrame>,
    pub background: BackgroundRing,
    pub center_mask: CenterMask,
}

impl Frame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.wedges.is_empty())
    }
}

/// The external renderer boundary: receives each finished frame and paints
/// it somewhere. The core never touches a drawing surface directly.
pub trait FrameSink {
    fn paint(&mut self, frame: &Frame);
}
