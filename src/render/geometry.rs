//! Geometry helpers for arcs and right-angle glyphs (plane units)

use std::f64::consts::TAU;

use glam::DVec2;

use crate::errors::DrawError;
use crate::types::{finite1, finite2};

/// Normalize a direction, rejecting zero and non-finite vectors.
pub fn unit(what: &'static str, v: DVec2) -> Result<DVec2, DrawError> {
    let v = finite2(what, v)?;
    v.try_normalize()
        .ok_or_else(|| DrawError::configuration(format!("{what} has zero length")))
}

/// Counter-clockwise angle from `a` to `b`, in `[0, 2π)`.
pub fn angle_between_ccw(a: DVec2, b: DVec2) -> f64 {
    let angle = a.perp_dot(b).atan2(a.dot(b));
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Endpoints of an angle arc and which of the two possible arcs to take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub start: DVec2,
    pub end: DVec2,
    /// The counter-clockwise sweep exceeds a half turn.
    pub large_arc: bool,
}

/// Arc of `radius` around `vertex`, from the initial side to the terminal
/// side, always counter-clockwise.
pub fn angle_arc(
    vertex: DVec2,
    initial_side: DVec2,
    terminal_side: DVec2,
    radius: f64,
) -> Result<ArcGeometry, DrawError> {
    let vertex = finite2("arc vertex", vertex)?;
    let radius = finite1("arc radius", radius)?;
    let u = unit("initial side", initial_side)?;
    let v = unit("terminal side", terminal_side)?;
    Ok(ArcGeometry {
        start: vertex + u * radius,
        end: vertex + v * radius,
        large_arc: angle_between_ccw(u, v) > std::f64::consts::PI,
    })
}

/// The three corners of a right-angle mark. The sides are not checked
/// for perpendicularity.
pub fn right_angle_corners(
    vertex: DVec2,
    side1: DVec2,
    side2: DVec2,
    size: f64,
) -> Result<[DVec2; 3], DrawError> {
    let vertex = finite2("right angle vertex", vertex)?;
    let size = finite1("right angle size", size)?;
    let a = unit("first side", side1)? * size;
    let b = unit("second side", side2)? * size;
    Ok([vertex + a, vertex + a + b, vertex + b])
}
