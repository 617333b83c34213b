//! Rounded annular wedge construction.
//!
//! Four raw corner points in polar coordinates; per corner a tangent
//! control point inset along its arc and a corner point inset radially;
//! quadratic blends between them, bridged by the outer arc (clockwise) and
//! the inner arc (counter-clockwise), closed with straight radial edges.

use crate::path::{PathCmd, Point, WedgePath};

/// Angular inset of the rounded-corner tangent points, in radians.
pub const CORNER_ANGLE_OFFSET_RAD: f32 = 0.1;

/// Build the closed outline of a rounded-corner annular wedge.
///
/// `span_deg` must be in [0, 360]. `corner_radius` must fit the wedge — at
/// most half the ring thickness and half the end chord; the builder does
/// not clamp. A zero span degenerates toward an empty-area sliver and a
/// 360° span yields a full annulus. Pure and deterministic.
pub fn rounded_wedge(
    center: Point,
    inner_radius: f32,
    outer_radius: f32,
    start_angle_deg: f32,
    span_deg: f32,
    corner_radius: f32,
) -> WedgePath {
    let start_rad = start_angle_deg.to_radians();
    let end_rad = (start_angle_deg + span_deg).to_radians();

    let outer_start = center.on_circle(outer_radius, start_rad);
    let outer_end = center.on_circle(outer_radius, end_rad);
    let inner_start = center.on_circle(inner_radius, start_rad);
    let inner_end = center.on_circle(inner_radius, end_rad);

    let outer_start_control = center.on_circle(outer_radius, start_rad + CORNER_ANGLE_OFFSET_RAD);
    let outer_start_corner = center.on_circle(outer_radius - corner_radius, start_rad);
    let outer_end_control = center.on_circle(outer_radius, end_rad - CORNER_ANGLE_OFFSET_RAD);
    let outer_end_corner = center.on_circle(outer_radius - corner_radius, end_rad);

    let inner_start_control = center.on_circle(inner_radius, start_rad + CORNER_ANGLE_OFFSET_RAD);
    let inner_start_corner = center.on_circle(inner_radius + corner_radius, start_rad);
    let inner_end_control = center.on_circle(inner_radius, end_rad - CORNER_ANGLE_OFFSET_RAD);
    let inner_end_corner = center.on_circle(inner_radius + corner_radius, end_rad);

    let large_arc = span_deg > 180.0;

    WedgePath {
        commands: vec![
            PathCmd::MoveTo(outer_start_corner),
            PathCmd::QuadTo {
                ctrl: outer_start,
                to: outer_start_control,
            },
            PathCmd::ArcTo {
                radius: outer_radius,
                large_arc,
                sweep: true,
                to: outer_end_control,
            },
            PathCmd::QuadTo {
                ctrl: outer_end,
                to: outer_end_corner,
            },
            PathCmd::LineTo(inner_end_corner),
            PathCmd::QuadTo {
                ctrl: inner_end,
                to: inner_end_control,
            },
            PathCmd::ArcTo {
                radius: inner_radius,
                large_arc,
                sweep: false,
                to: inner_start_control,
            },
            PathCmd::QuadTo {
                ctrl: inner_start,
                to: inner_start_corner,
            },
            PathCmd::Close,
        ],
    }
}
