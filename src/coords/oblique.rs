//! Unbounded 3D space drawn with a 45° oblique projection
//!
//! The x axis recedes into the page toward the lower left, y runs to the
//! right and z runs up. Depth is dropped, so there is no inverse transform.

use glam::{DVec2, DVec3, dvec2};

use super::CoordinateSpace;
use crate::errors::DrawError;
use crate::types::{Canvas, Scale, finite2, finite3};

/// 3D space projected onto a pixel canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObliqueSpace {
    center: DVec3,
    scale: Scale,
    canvas: Canvas,
    origin: DVec2,
}

impl ObliqueSpace {
    /// cos 45°, the foreshortening of the receding x axis.
    pub const SKEW_COS: f64 = std::f64::consts::FRAC_1_SQRT_2;
    /// sin 45°
    pub const SKEW_SIN: f64 = std::f64::consts::FRAC_1_SQRT_2;

    /// Place `center` at a fixed spot of `canvas` (left of middle, below
    /// middle, leaving room for the receding x axis) at `px_per_unit`.
    pub fn new(center: DVec3, px_per_unit: f64, canvas: Canvas) -> Result<Self, DrawError> {
        let center = finite3("space center", center)?;
        let scale = Scale::try_new(px_per_unit)
            .map_err(|e| DrawError::configuration(format!("scale {px_per_unit}: {e}")))?;
        let s = scale.raw();
        let skew = center.x * Self::SKEW_COS * s;
        let origin = dvec2(
            canvas.width() * Self::SKEW_SIN / 2.0 - center.y * s + skew,
            canvas.height() * (1.0 - Self::SKEW_COS / 2.0) + center.z * s - skew,
        );
        finite2("projected origin", origin)?;

        crate::log::debug!(
            origin_x = origin.x,
            origin_y = origin.y,
            scale = s,
            "oblique space"
        );

        Ok(Self {
            center,
            scale,
            canvas,
            origin,
        })
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Pixels per unit, shared by all three axes.
    pub fn scale(&self) -> f64 {
        self.scale.raw()
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Pixel position of the space's (0, 0, 0).
    pub fn origin_pixel(&self) -> DVec2 {
        self.origin
    }

    /// Project a space point to pixels.
    pub fn transform(&self, p: DVec3) -> Result<DVec2, DrawError> {
        let p = finite3("space point", p)?;
        let s = self.scale.raw();
        let skew = p.x * Self::SKEW_COS * s;
        Ok(dvec2(
            self.origin.x + p.y * s - skew,
            self.origin.y - p.z * s + skew,
        ))
    }
}

impl CoordinateSpace for ObliqueSpace {
    type Point = DVec3;

    fn transform(&self, p: DVec3) -> Result<DVec2, DrawError> {
        ObliqueSpace::transform(self, p)
    }

    fn canvas(&self) -> Canvas {
        ObliqueSpace::canvas(self)
    }
}
