//! 2D diagrams on a bounded Cartesian plane

use std::fmt;

use glam::{DVec2, dvec2};

use super::Composer;
use crate::coords::{CartesianSpace, PlaneBounds};
use crate::errors::DrawError;
use crate::math::MathRenderer;
use crate::render::geometry::{angle_arc, right_angle_corners};
use crate::render::labels::angle_label_position;
use crate::render::svg::{DrawingSurface, SvgDocument};
use crate::render::types::{LineAttributes, MathAttributes, TextAttributes, TextContent};
use crate::render::{DrawOptions, defaults, primitives};
use crate::types::positive;

/// Drawing API for a 2D plane.
///
/// Points are anything that converts into a [`DVec2`], so `[x, y]` and
/// `(x, y)` work as well as `dvec2(x, y)`.
pub struct Plane<S: DrawingSurface = SvgDocument> {
    inner: Composer<CartesianSpace, S>,
}

impl<S: DrawingSurface + fmt::Debug> fmt::Debug for Plane<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plane").field("inner", &self.inner).finish()
    }
}

impl<S: DrawingSurface> Plane<S> {
    /// Fit `bounds` onto the surface's current canvas.
    pub fn new(surface: S, bounds: PlaneBounds, options: DrawOptions) -> Result<Self, DrawError> {
        let space = CartesianSpace::with_canvas(bounds, surface.canvas())?;
        Ok(Self {
            inner: Composer::new(space, surface, options),
        })
    }

    /// Draw at a uniform `px_per_unit`; the surface is resized to fit the
    /// bounds.
    pub fn with_scale(
        mut surface: S,
        bounds: PlaneBounds,
        px_per_unit: f64,
        options: DrawOptions,
    ) -> Result<Self, DrawError> {
        let space = CartesianSpace::with_scale(bounds, px_per_unit)?;
        surface.resize(space.canvas());
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

    pub fn space(&self) -> &CartesianSpace {
        &self.inner.space
    }

    pub fn surface(&self) -> &S {
        &self.inner.surface
    }

    pub fn into_surface(self) -> S {
        self.inner.surface
    }

    // ========================================================================
    // Shapes
    // ========================================================================

    /// Dot of fixed pixel radius.
    pub fn draw_point(&mut self, coord: impl Into<DVec2>, color: &str) -> Result<(), DrawError> {
        self.inner.point(coord.into(), color)
    }

    pub fn draw_segment(
        &mut self,
        p1: impl Into<DVec2>,
        p2: impl Into<DVec2>,
        line: &LineAttributes,
    ) -> Result<(), DrawError> {
        self.inner.segment(p1.into(), p2.into(), line)
    }

    /// Arrow from `initial` to `initial + components`, labelled at its
    /// midpoint when `text` is not empty.
    ///
    /// The label fill defaults to the stroke color.
    pub fn draw_vector(
        &mut self,
        initial: impl Into<DVec2>,
        components: impl Into<DVec2>,
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

    /// Like [`draw_vector`](Self::draw_vector) with a math label.
    pub fn draw_vector_b(
        &mut self,
        initial: impl Into<DVec2>,
        components: impl Into<DVec2>,
        latex: &str,
        line: &LineAttributes,
        math: &MathAttributes,
    ) -> Result<(), DrawError> {
        self.inner
            .vector_b(initial.into(), components.into(), latex, line, math)
    }

    /// Unfilled circle. The radius is in plane units along x.
    pub fn draw_circunference(
        &mut self,
        center: impl Into<DVec2>,
        radius: f64,
        line: &LineAttributes,
    ) -> Result<(), DrawError> {
        let at = self.inner.space.transform(center.into())?;
        let radius = self.inner.space.scale_length(dvec2(radius, 0.0)).x;
        self.inner
            .atomically(|surface, _, _| primitives::circumference(surface, at, radius, line))
    }

    /// Same as [`draw_circunference`](Self::draw_circunference).
    pub fn draw_circumference(
        &mut self,
        center: impl Into<DVec2>,
        radius: f64,
        line: &LineAttributes,
    ) -> Result<(), DrawError> {
        self.draw_circunference(center, radius, line)
    }

    /// Counter-clockwise arc around `vertex` from the initial side to the
    /// terminal side.
    pub fn draw_arc(
        &mut self,
        vertex: impl Into<DVec2>,
        initial_side: impl Into<DVec2>,
        terminal_side: impl Into<DVec2>,
        radius: f64,
        line: &LineAttributes,
    ) -> Result<(), DrawError> {
        let arc = self.arc_pixels(vertex.into(), initial_side.into(), terminal_side.into(), radius)?;
        self.inner.atomically(|surface, _, _| {
            primitives::arc(surface, arc.from, arc.to, arc.radii, arc.large_arc, line)
        })
    }

    /// Square-corner mark. The sides are not checked for perpendicularity.
    pub fn draw_right_angle(
        &mut self,
        vertex: impl Into<DVec2>,
        side1: impl Into<DVec2>,
        side2: impl Into<DVec2>,
        size: f64,
        line: &LineAttributes,
    ) -> Result<(), DrawError> {
        let corners = right_angle_corners(vertex.into(), side1.into(), side2.into(), size)?;
        self.inner.polyline(&corners, line)
    }

    /// Arc plus a math label out along the bisector.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_angle(
        &mut self,
        vertex: impl Into<DVec2>,
        initial_side: impl Into<DVec2>,
        terminal_side: impl Into<DVec2>,
        radius: f64,
        label: &str,
        line: &LineAttributes,
        math: &MathAttributes,
    ) -> Result<(), DrawError> {
        let (vertex, initial_side, terminal_side) =
            (vertex.into(), initial_side.into(), terminal_side.into());
        let arc = self.arc_pixels(vertex, initial_side, terminal_side, radius)?;
        let label_at = self.inner.space.transform(angle_label_position(
            vertex,
            initial_side,
            terminal_side,
            radius,
        )?)?;
        self.inner.atomically(|surface, _, renderer| {
            primitives::arc(surface, arc.from, arc.to, arc.radii, arc.large_arc, line)?;
            if !label.is_empty() {
                primitives::math_label(surface, renderer, label, label_at, math)?;
            }
            Ok(())
        })
    }

    // ========================================================================
    // Labels
    // ========================================================================

    pub fn draw_label(
        &mut self,
        point: impl Into<DVec2>,
        content: impl Into<TextContent>,
        attrs: &TextAttributes,
    ) -> Result<(), DrawError> {
        self.inner.label(point.into(), &content.into(), attrs)
    }

    /// Math label at `point`; offset, rotation and scale apply in pixels.
    ///
    /// Returns whether the label was drawn.
    pub fn draw_math(
        &mut self,
        point: impl Into<DVec2>,
        latex: &str,
        math: &MathAttributes,
    ) -> Result<bool, DrawError> {
        self.inner.math(point.into(), latex, math)
    }

    /// Open path through at least two points.
    pub fn draw_path<P: Into<DVec2>>(
        &mut self,
        points: impl IntoIterator<Item = P>,
        color: &str,
    ) -> Result<(), DrawError> {
        let points: Vec<DVec2> = points.into_iter().map(Into::into).collect();
        self.inner.path(&points, color)
    }

    /// Both axes across the full bounds, crossing at the origin (or at the
    /// nearest edge when the origin is outside the bounds). Empty labels are
    /// not drawn.
    pub fn draw_axes(
        &mut self,
        y_label: &str,
        x_label: &str,
        origin_label: &str,
    ) -> Result<(), DrawError> {
        let b = self.inner.space.bounds();
        let cross = dvec2(
            0.0_f64.clamp(b.x_min(), b.x_max()),
            0.0_f64.clamp(b.y_min(), b.y_max()),
        );
        let off = defaults::AXIS_LABEL_OFFSET;
        let nudged = |dx: f64, dy: f64| MathAttributes::default().with_offset(dx, dy);

        let arrows = [
            (dvec2(b.x_min(), cross.y), dvec2(b.x_max(), cross.y)),
            (dvec2(cross.x, b.y_min()), dvec2(cross.x, b.y_max())),
        ];
        let labels = [
            (dvec2(b.x_max(), cross.y), x_label, nudged(-off, off)),
            (dvec2(cross.x, b.y_max()), y_label, nudged(off, off)),
            (cross, origin_label, nudged(-off, off)),
        ];
        self.inner.axes(&arrows, &labels)
    }

    fn arc_pixels(
        &self,
        vertex: DVec2,
        initial_side: DVec2,
        terminal_side: DVec2,
        radius: f64,
    ) -> Result<PixelArc, DrawError> {
        let radius = positive(radius)
            .map_err(|e| DrawError::configuration(format!("arc radius {radius}: {e}")))?;
        let arc = angle_arc(vertex, initial_side, terminal_side, radius)?;
        let space = &self.inner.space;
        Ok(PixelArc {
            from: space.transform(arc.start)?,
            to: space.transform(arc.end)?,
            radii: space.scale_length(DVec2::splat(radius)),
            large_arc: arc.large_arc,
        })
    }
}

struct PixelArc {
    from: DVec2,
    to: DVec2,
    radii: DVec2,
    large_arc: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MathRenderError;
    use crate::math::VerbatimMath;
    use crate::render::svg::{Markup, SvgNode};
    use crate::types::Canvas;
    use approx::assert_abs_diff_eq;

    fn plane() -> Plane {
        let surface = SvgDocument::new(Canvas::try_new(100.0, 100.0).unwrap());
        let bounds = PlaneBounds::new(0.0, 10.0, 0.0, 10.0).unwrap();
        Plane::new(surface, bounds, DrawOptions::default()).unwrap()
    }

    #[test]
    fn point_is_a_small_dot() {
        let mut plane = plane();
        plane.draw_point([5.0, 5.0], "red").unwrap();
        let SvgNode::Circle(c) = &plane.surface().children()[0] else {
            panic!("expected a circle");
        };
        assert_eq!(c.center, dvec2(50.0, 50.0));
        assert_eq!(c.r, 3.0);
        assert_eq!(c.paint.fill.as_deref(), Some("red"));
        assert_eq!(c.paint.stroke.as_deref(), Some("red"));
    }

    #[test]
    fn circumference_radius_follows_x_scale() {
        let surface = SvgDocument::new(Canvas::try_new(200.0, 100.0).unwrap());
        let bounds = PlaneBounds::new(0.0, 10.0, 0.0, 10.0).unwrap();
        let mut plane = Plane::new(surface, bounds, DrawOptions::default()).unwrap();
        plane
            .draw_circumference([5.0, 5.0], 2.0, &LineAttributes::default())
            .unwrap();
        let SvgNode::Circle(c) = &plane.surface().children()[0] else {
            panic!("expected a circle");
        };
        assert_eq!(c.r, 40.0);
        assert_eq!(c.paint.fill.as_deref(), Some("none"));
    }

    #[test]
    fn arc_radii_follow_each_axis() {
        let surface = SvgDocument::new(Canvas::try_new(200.0, 100.0).unwrap());
        let bounds = PlaneBounds::new(0.0, 10.0, 0.0, 10.0).unwrap();
        let mut plane = Plane::new(surface, bounds, DrawOptions::default()).unwrap();
        plane
            .draw_arc([0.0, 0.0], [1.0, 0.0], [0.0, 1.0], 1.0, &LineAttributes::default())
            .unwrap();
        let SvgNode::Path(p) = &plane.surface().children()[0] else {
            panic!("expected a path");
        };
        assert_eq!(p.d.to_string(), "M20,100 A20,10 0 0 0 0,90");
    }

    #[test]
    fn clockwise_sides_draw_the_long_arc() {
        let mut plane = plane();
        plane
            .draw_arc([5.0, 5.0], [0.0, 1.0], [1.0, 0.0], 1.0, &LineAttributes::default())
            .unwrap();
        let SvgNode::Path(p) = &plane.surface().children()[0] else {
            panic!("expected a path");
        };
        assert_eq!(p.d.to_string(), "M50,40 A10,10 0 1 0 60,50");
    }

    #[test]
    fn arc_rejects_non_positive_radius() {
        let mut plane = plane();
        for radius in [0.0, -1.0, f64::NAN] {
            let err = plane
                .draw_arc([0.0, 0.0], [1.0, 0.0], [0.0, 1.0], radius, &LineAttributes::default())
                .unwrap_err();
            assert!(matches!(err, DrawError::Configuration { .. }));
        }
        assert!(plane.surface().children().is_empty());
    }

    #[test]
    fn right_angle_mark() {
        let mut plane = plane();
        plane
            .draw_right_angle([0.0, 0.0], [2.0, 0.0], [0.0, 3.0], 1.0, &LineAttributes::default())
            .unwrap();
        let SvgNode::Polyline(p) = &plane.surface().children()[0] else {
            panic!("expected a polyline");
        };
        assert_eq!(p.points, vec![dvec2(10.0, 100.0), dvec2(10.0, 90.0), dvec2(0.0, 90.0)]);
    }

    #[test]
    fn angle_label_on_bisector() {
        let mut plane = plane().with_math(VerbatimMath);
        plane
            .draw_angle(
                [2.0, 2.0],
                [1.0, 0.0],
                [0.0, 1.0],
                2.0,
                r"\theta",
                &LineAttributes::default(),
                &MathAttributes::default(),
            )
            .unwrap();
        let children = plane.surface().children();
        assert_eq!(children.len(), 2);
        let SvgNode::Group(g) = &children[1] else {
            panic!("expected a group");
        };
        let d = 2.0 * 1.3 * std::f64::consts::FRAC_1_SQRT_2 * 10.0;
        let expected = format!(
            "translate({},{}) rotate(0) scale(1)",
            crate::render::svg::fmt_num(20.0 + d),
            crate::render::svg::fmt_num(80.0 - d)
        );
        assert_eq!(g.transform.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn angle_without_renderer_still_draws_arc() {
        let mut plane = plane();
        plane
            .draw_angle(
                [2.0, 2.0],
                [1.0, 0.0],
                [-1.0, 0.0],
                1.0,
                r"\pi",
                &LineAttributes::default(),
                &MathAttributes::default(),
            )
            .unwrap();
        assert_eq!(plane.surface().children().len(), 1);
    }

    #[test]
    fn vector_b_label_takes_line_color() {
        let mut plane = plane().with_math(VerbatimMath);
        plane
            .draw_vector_b(
                [0.0, 0.0],
                [4.0, 2.0],
                r"\vec{u}",
                &LineAttributes::vector().with_color("green"),
                &MathAttributes::default(),
            )
            .unwrap();
        let SvgNode::Group(g) = &plane.surface().children()[1] else {
            panic!("expected a group");
        };
        assert_eq!(g.color.as_deref(), Some("green"));
        assert_eq!(g.transform.as_deref(), Some("translate(20,90) rotate(0) scale(1)"));
    }

    #[test]
    fn failed_math_keeps_the_vector() {
        let failing = |latex: &str| -> Result<Markup, MathRenderError> {
            Err(MathRenderError::new(latex, "parse error"))
        };
        let mut plane = plane().with_math(failing);
        plane
            .draw_vector_b(
                [0.0, 0.0],
                [1.0, 1.0],
                r"\frac{",
                &LineAttributes::vector(),
                &MathAttributes::default(),
            )
            .unwrap();
        assert_eq!(plane.surface().children().len(), 1);
        assert!(!plane.draw_math([1.0, 1.0], "x", &MathAttributes::default()).unwrap());
    }

    #[test]
    fn axes_cross_at_origin() {
        let surface = SvgDocument::new(Canvas::try_new(100.0, 100.0).unwrap());
        let bounds = PlaneBounds::new(-5.0, 5.0, -5.0, 5.0).unwrap();
        let mut plane = Plane::new(surface, bounds, DrawOptions::default())
            .unwrap()
            .with_math(VerbatimMath);
        plane.draw_axes("y", "x", "O").unwrap();

        let children = plane.surface().children();
        assert_eq!(children.len(), 5);
        let SvgNode::Line(x_axis) = &children[0] else {
            panic!("expected the x axis");
        };
        assert_eq!((x_axis.from, x_axis.to), (dvec2(0.0, 50.0), dvec2(100.0, 50.0)));
        let SvgNode::Line(y_axis) = &children[1] else {
            panic!("expected the y axis");
        };
        assert_eq!((y_axis.from, y_axis.to), (dvec2(50.0, 100.0), dvec2(50.0, 0.0)));
        assert!(x_axis.marker_end.is_some());
    }

    #[test]
    fn axes_clamp_to_bounds_and_skip_empty_labels() {
        let mut plane = plane().with_math(VerbatimMath);
        plane.draw_axes("", "x", "").unwrap();
        let children = plane.surface().children();
        assert_eq!(children.len(), 3);
        let SvgNode::Line(x_axis) = &children[0] else {
            panic!("expected the x axis");
        };
        assert_abs_diff_eq!(x_axis.from.y, 100.0);
    }

    #[test]
    fn scale_mode_resizes_surface() {
        let surface = SvgDocument::new(Canvas::try_new(1.0, 1.0).unwrap());
        let bounds = PlaneBounds::new(-2.0, 8.0, -1.0, 4.0).unwrap();
        let plane = Plane::with_scale(surface, bounds, 30.0, DrawOptions::default()).unwrap();
        let canvas = plane.surface().canvas();
        assert_eq!((canvas.width(), canvas.height()), (300.0, 150.0));
        assert_eq!(plane.space().origin_pixel(), dvec2(60.0, 120.0));
    }
}
