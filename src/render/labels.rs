//! Label placement: corner anchoring, angle bisectors, vector midpoints

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use super::defaults;
use super::geometry::unit;
use crate::errors::DrawError;
use crate::types::{finite1, finite2};

/// Which corner of the label's box sits on the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corner {
    RightTop,
    #[default]
    RightBottom,
    LeftTop,
    LeftBottom,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::RightTop,
        Corner::RightBottom,
        Corner::LeftTop,
        Corner::LeftBottom,
    ];

    /// SVG `text-anchor`
    pub fn anchor(self) -> &'static str {
        match self {
            Corner::RightTop | Corner::RightBottom => "end",
            Corner::LeftTop | Corner::LeftBottom => "start",
        }
    }

    /// SVG `dominant-baseline`
    pub fn baseline(self) -> &'static str {
        match self {
            Corner::RightTop | Corner::LeftTop => "before-edge",
            Corner::RightBottom | Corner::LeftBottom => "after-edge",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Corner::RightTop => "righttop",
            Corner::RightBottom => "rightbottom",
            Corner::LeftTop => "lefttop",
            Corner::LeftBottom => "leftbottom",
        }
    }
}

impl FromStr for Corner {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Corner::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| DrawError::configuration(format!("invalid corner value: {s:?}")))
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit direction halfway between two sides.
///
/// Opposite sides have no sum to normalize; the perpendicular of the
/// first side (rotated counter-clockwise) is used instead.
pub fn bisector(a: DVec2, b: DVec2) -> Result<DVec2, DrawError> {
    let u = unit("initial side", a)?;
    let v = unit("terminal side", b)?;
    let sum = u + v;
    let norm = sum.length();
    if norm < defaults::BISECTOR_EPSILON {
        return Ok(u.perp());
    }
    Ok(sum / norm)
}

/// Where an angle's label goes: out along the bisector, past the arc.
pub fn angle_label_position(
    vertex: DVec2,
    initial_side: DVec2,
    terminal_side: DVec2,
    arc_radius: f64,
) -> Result<DVec2, DrawError> {
    let vertex = finite2("angle vertex", vertex)?;
    let arc_radius = finite1("arc radius", arc_radius)?;
    let dir = bisector(initial_side, terminal_side)?;
    Ok(vertex + dir * (arc_radius * defaults::ANGLE_LABEL_FACTOR))
}

/// Where a vector's label goes: its midpoint. Works in either dimension.
pub fn vector_label_position<P>(initial: P, components: P) -> P
where
    P: std::ops::Add<Output = P> + std::ops::Mul<f64, Output = P>,
{
    initial + components * 0.5
}
