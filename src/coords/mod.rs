//! Coordinate spaces: logical units to pixels
//!
//! - `cartesian`: bounded 2D plane, affine map
//! - `oblique`: unbounded 3D space, 45° oblique projection

pub mod cartesian;
pub mod oblique;

pub use cartesian::{CartesianSpace, PlaneBounds};
pub use oblique::ObliqueSpace;

use glam::DVec2;

use crate::errors::DrawError;
use crate::types::Canvas;

/// A mapping from logical points to pixel positions on a canvas.
pub trait CoordinateSpace {
    /// Logical point type (`DVec2` for the plane, `DVec3` for space).
    type Point: Copy + std::ops::Add<Output = Self::Point> + std::ops::Mul<f64, Output = Self::Point>;

    /// Map a logical point to pixels. Fails on non-finite input.
    fn transform(&self, p: Self::Point) -> Result<DVec2, DrawError>;

    /// Pixel canvas this space draws onto.
    fn canvas(&self) -> Canvas;
}
