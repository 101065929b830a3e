//! Bounded 2D Cartesian plane
//!
//! Pixel Y grows downward while plane Y grows upward, so the Y axis is
//! flipped around the pixel origin.

use glam::{DVec2, dvec2};

use super::CoordinateSpace;
use crate::errors::DrawError;
use crate::types::{Canvas, Scale, finite, finite2};

/// Visible range of a plane, in plane units.
///
/// Built through [`PlaneBounds::new`], so an inverted range cannot be
/// written out by hand:
///
/// ```compile_fail
/// let bounds = planespace::PlaneBounds { x_min: 5.0, x_max: 2.0, y_min: 0.0, y_max: 1.0 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneBounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl PlaneBounds {
    /// Create bounds, rejecting non-finite values and inverted ranges.
    ///
    /// Equal min and max are accepted here; the space constructors reject
    /// the resulting zero span.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, DrawError> {
        for (what, v) in [
            ("x_min bound", x_min),
            ("x_max bound", x_max),
            ("y_min bound", y_min),
            ("y_max bound", y_max),
        ] {
            finite(v).map_err(|reason| DrawError::InvalidCoordinate { what, reason })?;
        }
        if x_min > x_max {
            return Err(DrawError::configuration(format!(
                "x_min ({x_min}) is greater than x_max ({x_max})"
            )));
        }
        if y_min > y_max {
            return Err(DrawError::configuration(format!(
                "y_min ({y_min}) is greater than y_max ({y_max})"
            )));
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Width and height of the range, in plane units.
    pub fn span(&self) -> DVec2 {
        dvec2(self.x_max - self.x_min, self.y_max - self.y_min)
    }

    fn non_degenerate(self) -> Result<Self, DrawError> {
        let span = self.span();
        if span.x <= 0.0 || span.y <= 0.0 {
            return Err(DrawError::configuration(format!(
                "bounds [{}, {}] x [{}, {}] have no positive width or height",
                self.x_min, self.x_max, self.y_min, self.y_max
            )));
        }
        Ok(self)
    }
}

/// Affine map from a bounded plane onto a pixel canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartesianSpace {
    bounds: PlaneBounds,
    canvas: Canvas,
    origin: DVec2,
    scale: DVec2,
}

impl CartesianSpace {
    /// Fit `bounds` onto an explicit pixel canvas. The two axes may end up
    /// with different pixels-per-unit.
    pub fn with_canvas(bounds: PlaneBounds, canvas: Canvas) -> Result<Self, DrawError> {
        let bounds = bounds.non_degenerate()?;
        let scale = canvas.size() / bounds.span();
        if !scale.is_finite() {
            return Err(DrawError::configuration(format!(
                "bounds produce a non-finite scale ({}, {})",
                scale.x, scale.y
            )));
        }
        let origin = dvec2(-bounds.x_min * scale.x, canvas.height() + bounds.y_min * scale.y);

        crate::log::debug!(
            origin_x = origin.x,
            origin_y = origin.y,
            scale_x = scale.x,
            scale_y = scale.y,
            "cartesian space"
        );

        Ok(Self {
            bounds,
            canvas,
            origin,
            scale,
        })
    }

    /// Use a uniform scale; the canvas size follows from the bounds.
    ///
    /// The derived canvas is `span * scale` and is meant to be written back
    /// onto the drawing surface.
    pub fn with_scale(bounds: PlaneBounds, px_per_unit: f64) -> Result<Self, DrawError> {
        let scale = Scale::try_new(px_per_unit)
            .map_err(|e| DrawError::configuration(format!("scale {px_per_unit}: {e}")))?;
        let bounds = bounds.non_degenerate()?;
        let span = bounds.span();
        let canvas = Canvas::try_new(scale.px(span.x), scale.px(span.y))?;
        Self::with_canvas(bounds, canvas)
    }

    pub fn bounds(&self) -> PlaneBounds {
        self.bounds
    }

    /// Pixel canvas; in uniform-scale mode this is the derived size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Pixel position of the plane's (0, 0).
    pub fn origin_pixel(&self) -> DVec2 {
        self.origin
    }

    /// Pixels per unit along x.
    pub fn scale_x(&self) -> f64 {
        self.scale.x
    }

    /// Pixels per unit along y.
    pub fn scale_y(&self) -> f64 {
        self.scale.y
    }

    /// Convert per-axis lengths in units to pixel lengths (no flip, no offset).
    pub fn scale_length(&self, units: DVec2) -> DVec2 {
        units * self.scale
    }

    /// Map a plane point to pixels.
    pub fn transform(&self, p: DVec2) -> Result<DVec2, DrawError> {
        let p = finite2("plane point", p)?;
        Ok(dvec2(
            self.origin.x + p.x * self.scale.x,
            self.origin.y - p.y * self.scale.y,
        ))
    }
}

impl CoordinateSpace for CartesianSpace {
    type Point = DVec2;

    fn transform(&self, p: DVec2) -> Result<DVec2, DrawError> {
        CartesianSpace::transform(self, p)
    }

    fn canvas(&self) -> Canvas {
        CartesianSpace::canvas(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square_ten() -> CartesianSpace {
        let bounds = PlaneBounds::new(0.0, 10.0, 0.0, 10.0).unwrap();
        CartesianSpace::with_canvas(bounds, Canvas::try_new(100.0, 100.0).unwrap()).unwrap()
    }

    #[test]
    fn center_maps_to_center() {
        let space = square_ten();
        assert_eq!(space.transform(dvec2(5.0, 5.0)).unwrap(), dvec2(50.0, 50.0));
    }

    #[test]
    fn origin_is_identity_of_transform() {
        for (x_min, x_max, y_min, y_max) in [
            (0.0, 10.0, 0.0, 10.0),
            (-3.0, 7.0, -2.0, 2.0),
            (-10.0, -1.0, 4.0, 9.5),
        ] {
            let bounds = PlaneBounds::new(x_min, x_max, y_min, y_max).unwrap();
            let space =
                CartesianSpace::with_canvas(bounds, Canvas::try_new(640.0, 300.0).unwrap())
                    .unwrap();
            assert_eq!(space.transform(DVec2::ZERO).unwrap(), space.origin_pixel());
        }
    }

    #[test]
    fn x_offsets_scale_linearly() {
        let bounds = PlaneBounds::new(-4.0, 6.0, -1.0, 3.0).unwrap();
        let space =
            CartesianSpace::with_canvas(bounds, Canvas::try_new(500.0, 120.0).unwrap()).unwrap();
        let a = space.transform(dvec2(1.25, 2.0)).unwrap();
        let b = space.transform(dvec2(1.25 + 3.5, 2.0)).unwrap();
        assert_abs_diff_eq!(b.x - a.x, 3.5 * space.scale_x(), epsilon = 1e-9);
        assert_abs_diff_eq!(b.y, a.y, epsilon = 1e-12);
    }

    #[test]
    fn y_axis_points_up() {
        let space = square_ten();
        let low = space.transform(dvec2(0.0, 1.0)).unwrap();
        let high = space.transform(dvec2(0.0, 9.0)).unwrap();
        assert!(high.y < low.y);
        assert_eq!(space.transform(dvec2(0.0, 0.0)).unwrap(), dvec2(0.0, 100.0));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(matches!(
            PlaneBounds::new(5.0, 2.0, 0.0, 1.0),
            Err(DrawError::Configuration { .. })
        ));
        assert!(matches!(
            PlaneBounds::new(0.0, 1.0, 3.0, -3.0),
            Err(DrawError::Configuration { .. })
        ));
        assert!(PlaneBounds::new(2.0, 5.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn zero_span_is_rejected_by_both_constructors() {
        let flat = PlaneBounds::new(1.0, 1.0, 0.0, 4.0).unwrap();
        assert!(matches!(
            CartesianSpace::with_canvas(flat, Canvas::try_new(10.0, 10.0).unwrap()),
            Err(DrawError::Configuration { .. })
        ));
        assert!(matches!(
            CartesianSpace::with_scale(flat, 20.0),
            Err(DrawError::Configuration { .. })
        ));
    }

    #[test]
    fn with_canvas_rechecks_bounds() {
        let canvas = Canvas::try_new(100.0, 100.0).unwrap();
        let inverted = PlaneBounds {
            x_min: 5.0,
            x_max: 2.0,
            y_min: 0.0,
            y_max: 1.0,
        };
        assert!(matches!(
            CartesianSpace::with_canvas(inverted, canvas),
            Err(DrawError::Configuration { .. })
        ));
        let flipped_y = PlaneBounds {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 3.0,
            y_max: -3.0,
        };
        assert!(matches!(
            CartesianSpace::with_scale(flipped_y, 10.0),
            Err(DrawError::Configuration { .. })
        ));
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let space = square_ten();
        assert!(matches!(
            space.transform(dvec2(f64::NAN, 1.0)),
            Err(DrawError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            space.transform(dvec2(f64::INFINITY, 1.0)),
            Err(DrawError::InvalidCoordinate { .. })
        ));
        assert!(space.transform(dvec2(0.0, 0.0)).is_ok());
    }

    #[test]
    fn uniform_scale_derives_canvas() {
        let bounds = PlaneBounds::new(-2.0, 8.0, -1.0, 4.0).unwrap();
        let space = CartesianSpace::with_scale(bounds, 30.0).unwrap();
        assert_eq!(space.canvas(), Canvas::try_new(300.0, 150.0).unwrap());
        assert_eq!(space.scale_x(), 30.0);
        assert_eq!(space.scale_y(), 30.0);
        assert_eq!(space.origin_pixel(), dvec2(60.0, 120.0));
    }

    #[test]
    fn bad_uniform_scale_is_configuration_error() {
        let bounds = PlaneBounds::new(0.0, 1.0, 0.0, 1.0).unwrap();
        assert!(matches!(
            CartesianSpace::with_scale(bounds, 0.0),
            Err(DrawError::Configuration { .. })
        ));
    }
}
