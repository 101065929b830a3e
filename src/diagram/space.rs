//! 3D diagrams in an oblique projection

use std::fmt;

use glam::{DVec3, dvec3};

use super::Composer;
use crate::coords::ObliqueSpace;
use crate::errors::DrawError;
use crate::math::MathRenderer;
use crate::render::svg::{DrawingSurface, SvgDocument};
use crate::render::types::{LineAttributes, MathAttributes, TextAttributes, TextContent};
use crate::render::{DrawOptions, defaults};

/// Drawing API for 3D space.
///
/// Space has no bounds; `center` picks which point lands near the middle of
/// the surface's canvas.
pub struct Space<S: DrawingSurface = SvgDocument> {
    inner: Composer<ObliqueSpace, S>,
}

impl<S: DrawingSurface + fmt::Debug> fmt::Debug for Space<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Space").field("inner", &self.inner).finish()
    }
}

impl<S: DrawingSurface> Space<S> {
    pub fn new(
        surface: S,
        center: impl Into<DVec3>,
        px_per_unit: f64,
        options: DrawOptions,
    ) -> Result<Self, DrawError> {
        let space = ObliqueSpace::new(center.into(), px_per_unit, surface.canvas())?;
        Ok(Self {
            inner: Composer::new(space, surface, options),
        })
    }

    /// Typeset math labels with `renderer`. Without one they are skipped.
    pub fn with_math(mut self, renderer: impl MathRenderer + 'static) -> Self {
        self.inner.set_math(Box::new(renderer));
        self
    }

    pub fn has_math_renderer(&self) -> bool {
        self.inner.has_math()
    }

    pub fn space(&self) -> &ObliqueSpace {
        &self.inner.space
    }

    pub fn surface(&self) -> &S {
        &self.inner.surface
    }

    pub fn into_surface(self) -> S {
        self.inner.surface
    }

    pub fn draw_point(&mut self, coord: impl Into<DVec3>, color: &str) -> Result<(), DrawError> {
        self.inner.point(coord.into(), color)
    }

    pub fn draw_segment(
        &mut self,
        p1: impl Into<DVec3>,
        p2: impl Into<DVec3>,
        line: &LineAttributes,
    ) -> Result<(), DrawError> {
        self.inner.segment(p1.into(), p2.into(), line)
    }

    /// Arrow from `initial` to `initial + components`, labelled at its
    /// projected midpoint. The label fill defaults to the stroke color.
    pub fn draw_vector(
        &mut self,
        initial: impl Into<DVec3>,
        components: impl Into<DVec3>,
        text: impl Into<TextContent>,
        line: &LineAttributes,
        text_attrs: &TextAttributes,
    ) -> Result<(), DrawError> {
        self.inner.vector(
            initial.into(),
            components.into(),
            &text.into(),
            line,
            text_attrs,
        )
    }

    pub fn draw_vector_b(
        &mut self,
        initial: impl Into<DVec3>,
        components: impl Into<DVec3>,
        latex: &str,
        line: &LineAttributes,
        math: &MathAttributes,
    ) -> Result<(), DrawError> {
        self.inner
            .vector_b(initial.into(), components.into(), latex, line, math)
    }

    pub fn draw_label(
        &mut self,
        point: impl Into<DVec3>,
        content: impl Into<TextContent>,
        attrs: &TextAttributes,
    ) -> Result<(), DrawError> {
        self.inner.label(point.into(), &content.into(), attrs)
    }

    /// Returns whether the label was drawn.
    pub fn draw_math(
        &mut self,
        point: impl Into<DVec3>,
        latex: &str,
        math: &MathAttributes,
    ) -> Result<bool, DrawError> {
        self.inner.math(point.into(), latex, math)
    }

    pub fn draw_path<P: Into<DVec3>>(
        &mut self,
        points: impl IntoIterator<Item = P>,
        color: &str,
    ) -> Result<(), DrawError> {
        let points: Vec<DVec3> = points.into_iter().map(Into::into).collect();
        self.inner.path(&points, color)
    }

    /// The three axes from the origin, labelled `x`, `y`, `z` and `O`.
    ///
    /// The y and z axes cover a fixed share of the canvas width and height.
    /// The receding x axis is shorter, measured on the shorter canvas side.
    pub fn draw_axes(&mut self) -> Result<(), DrawError> {
        let lengths = self.axis_lengths();
        let off = defaults::AXIS_LABEL_OFFSET;
        let nudged = |dx: f64, dy: f64| MathAttributes::default().with_offset(dx, dy);

        let x = dvec3(lengths.x, 0.0, 0.0);
        let y = dvec3(0.0, lengths.y, 0.0);
        let z = dvec3(0.0, 0.0, lengths.z);
        let arrows = [(DVec3::ZERO, x), (DVec3::ZERO, y), (DVec3::ZERO, z)];
        let labels = [
            (x, "x", nudged(-off, off)),
            (y, "y", nudged(-off, off)),
            (z, "z", nudged(off, off)),
            (DVec3::ZERO, "O", nudged(-off, off)),
        ];
        self.inner.axes(&arrows, &labels)
    }

    /// Axis lengths in units for the current canvas and scale.
    pub fn axis_lengths(&self) -> DVec3 {
        let space = &self.inner.space;
        let canvas = space.canvas();
        let s = space.scale();
        dvec3(
            defaults::SPACE_DEPTH_FRACTION * canvas.width().min(canvas.height())
                / (ObliqueSpace::SKEW_COS * s),
            defaults::SPACE_AXIS_FRACTION * canvas.width() / s,
            defaults::SPACE_AXIS_FRACTION * canvas.height() / s,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::VerbatimMath;
    use crate::render::svg::SvgNode;
    use crate::types::Canvas;
    use approx::assert_abs_diff_eq;

    fn space() -> Space {
        let surface = SvgDocument::new(Canvas::try_new(400.0, 300.0).unwrap());
        Space::new(surface, [0.0, 0.0, 0.0], 20.0, DrawOptions::default()).unwrap()
    }

    #[test]
    fn point_uses_projection() {
        let mut space = space();
        space.draw_point([1.0, 2.0, 3.0], "blue").unwrap();
        let expected = space.space().transform(dvec3(1.0, 2.0, 3.0)).unwrap();
        let SvgNode::Circle(c) = &space.surface().children()[0] else {
            panic!("expected a circle");
        };
        assert_eq!(c.center, expected);
    }

    #[test]
    fn vector_label_at_projected_midpoint() {
        let mut space = space();
        space
            .draw_vector(
                [0.0, 0.0, 0.0],
                [2.0, 4.0, 6.0],
                "w",
                &LineAttributes::vector().with_color("purple"),
                &TextAttributes::default(),
            )
            .unwrap();
        let mid = space.space().transform(dvec3(1.0, 2.0, 3.0)).unwrap();
        let SvgNode::Text(t) = &space.surface().children()[1] else {
            panic!("expected a text");
        };
        assert_eq!(t.at, mid);
        assert_eq!(t.paint.fill.as_deref(), Some("purple"));
    }

    #[test]
    fn path_needs_two_points() {
        let mut space = space();
        let err = space.draw_path([[0.0, 0.0, 0.0]], "red").unwrap_err();
        assert_eq!(err, DrawError::InsufficientPoints { got: 1 });
        space
            .draw_path([[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]], "red")
            .unwrap();
        assert_eq!(space.surface().children().len(), 1);
    }

    #[test]
    fn axes_cover_fixed_share_of_canvas() {
        let mut space = space().with_math(VerbatimMath);
        let lengths = space.axis_lengths();
        assert_abs_diff_eq!(lengths.y, 0.55 * 400.0 / 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lengths.z, 0.55 * 300.0 / 20.0, epsilon = 1e-12);

        space.draw_axes().unwrap();
        let children = space.surface().children();
        assert_eq!(children.len(), 7);

        let origin = space.space().origin_pixel();
        let SvgNode::Line(y_axis) = &children[1] else {
            panic!("expected the y axis");
        };
        assert_eq!(y_axis.from, origin);
        assert_abs_diff_eq!(y_axis.to.x - origin.x, 0.55 * 400.0, epsilon = 1e-9);

        // The receding axis drops 0.3 of the short side in pixels on screen.
        let SvgNode::Line(x_axis) = &children[0] else {
            panic!("expected the x axis");
        };
        assert_abs_diff_eq!(x_axis.to.y - origin.y, 0.3 * 300.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.x - x_axis.to.x, 0.3 * 300.0, epsilon = 1e-9);
    }

    #[test]
    fn axes_without_renderer_draw_only_arrows() {
        let mut space = space();
        space.draw_axes().unwrap();
        assert_eq!(space.surface().children().len(), 3);
    }
}
