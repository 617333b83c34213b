//! Path description vocabulary shared across the rendering boundary.
//!
//! The core emits closed outlines as command lists; adapters serialize or
//! tessellate them. `WedgePath::to_svg` produces the SVG `d` grammar
//! (`M`/`Q`/`A`/`L`/`Z`) the SVG adapter writes verbatim.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// A 2D point in view coordinates (y grows downward, SVG convention).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The point at `radius` from `self` in the direction `angle_rad`.
    #[inline]
    pub fn on_circle(self, radius: f32, angle_rad: f32) -> Point {
        Point::new(
            self.x + radius * angle_rad.cos(),
            self.y + radius * angle_rad.sin(),
        )
    }
}

/// One drawing command of a closed wedge outline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathCmd {
    MoveTo(Point),
    /// Quadratic curve through `ctrl` to `to`.
    QuadTo { ctrl: Point, to: Point },
    /// Circular arc of `radius` ending at `to`. `sweep` false runs the arc
    /// counter-clockwise.
    ArcTo {
        radius: f32,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    LineTo(Point),
    Close,
}

/// A single closed path usable as a fill region.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WedgePath {
    pub commands: Vec<PathCmd>,
}

impl WedgePath {
    /// Serialize to an SVG path `d` attribute value.
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            match cmd {
                PathCmd::MoveTo(p) => {
                    let _ = write!(d, "M {} {}", p.x, p.y);
                }
                PathCmd::QuadTo { ctrl, to } => {
                    let _ = write!(d, "Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y);
                }
                PathCmd::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let _ = write!(
                        d,
                        "A {} {} 0 {} {} {} {}",
                        radius,
                        radius,
                        u8::from(*large_arc),
                        u8::from(*sweep),
                        to.x,
                        to.y
                    );
                }
                PathCmd::LineTo(p) => {
                    let _ = write!(d, "L {} {}", p.x, p.y);
                }
                PathCmd::Close => d.push('Z'),
            }
        }
        d
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_serialization_grammar() {
        let path = WedgePath {
            commands: vec![
                PathCmd::MoveTo(Point::new(1.0, 2.0)),
                PathCmd::QuadTo {
                    ctrl: Point::new(3.0, 4.0),
                    to: Point::new(5.0, 6.0),
                },
                PathCmd::ArcTo {
                    radius: 10.0,
                    large_arc: true,
                    sweep: false,
                    to: Point::new(7.0, 8.0),
                },
                PathCmd::LineTo(Point::new(9.0, 10.0)),
                PathCmd::Close,
            ],
        };
        assert_eq!(
            path.to_svg(),
            "M 1 2 Q 3 4 5 6 A 10 10 0 1 0 7 8 L 9 10 Z"
        );
    }

    #[test]
    fn on_circle_polar_projection() {
        let c = Point::new(50.0, 50.0);
        let p = c.on_circle(10.0, 0.0);
        assert!((p.x - 60.0).abs() < 1e-5 && (p.y - 50.0).abs() < 1e-5);
        let q = c.on_circle(10.0, std::f32::consts::FRAC_PI_2);
        assert!((q.x - 50.0).abs() < 1e-4 && (q.y - 60.0).abs() < 1e-4);
    }
}
