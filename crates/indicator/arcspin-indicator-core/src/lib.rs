//! Arcspin indicator core (renderer-agnostic)
//!
//! Segmented radial loading indicators: colored arc segments that always
//! tile 360°, rotate continuously per layer, and periodically redistribute
//! their spans with an eased transition, each rendered as a rounded-corner
//! annular wedge. The crate computes geometry and per-frame paint lists;
//! actual painting and real timers live behind the [`FrameSink`] and
//! [`Scheduler`] boundaries, so hosts and tests control time explicitly.

pub mod config;
pub mod driver;
pub mod easing;
pub mod geometry;
pub mod indicator;
pub mod layer;
pub mod outputs;
pub mod path;
pub mod presets;
pub mod random;
pub mod redistribute;
pub mod rotation;
pub mod schedule;
pub mod segment;
pub mod transition;

// Re-exports for consumers (adapters)
pub use config::{BackgroundStyle, ConfigError, IndicatorConfig, LayerConfig, MaskStyle};
pub use driver::IndicatorDriver;
pub use easing::ease_in_out_cubic;
pub use geometry::rounded_wedge;
pub use indicator::RingIndicator;
pub use layer::Layer;
pub use outputs::{BackgroundRing, CenterMask, Frame, FrameSink, LayerFrame, WedgeDraw};
pub use path::{PathCmd, Point, WedgePath};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use redistribute::Redistributor;
pub use rotation::RotationAccumulator;
pub use schedule::{FrameCallback, IntervalCallback, ManualScheduler, Scheduler, TaskId};
pub use segment::{Segment, SegmentSet};
pub use transition::TransitionAnimator;
