//! Drawing façades
//!
//! - `plane`: 2D diagrams on a bounded Cartesian plane
//! - `space`: 3D diagrams in an oblique projection
//!
//! Both wrap a [`Composer`], which holds the operations whose only
//! difference between dimensions is the point type.

pub mod plane;
pub mod space;

pub use plane::Plane;
pub use space::Space;

use std::fmt;

use crate::coords::CoordinateSpace;
use crate::errors::DrawError;
use crate::math::MathRenderer;
use crate::render::labels::vector_label_position;
use crate::render::markers::MarkerRegistry;
use crate::render::svg::{DrawingSurface, SvgNode, WriteSvg};
use crate::render::types::{LineAttributes, MathAttributes, TextAttributes, TextContent};
use crate::render::{DrawOptions, defaults, primitives};
use crate::types::Canvas;

// ============================================================================
// Pending Writes
// ============================================================================

/// Buffers the writes of one drawing call so that a call which fails
/// halfway leaves the real surface untouched.
pub(crate) struct Pending<'a, S: ?Sized> {
    target: &'a mut S,
    canvas: Option<Canvas>,
    defs: Vec<SvgNode>,
    children: Vec<SvgNode>,
}

impl<'a, S: DrawingSurface + ?Sized> Pending<'a, S> {
    fn new(target: &'a mut S) -> Self {
        Self {
            target,
            canvas: None,
            defs: Vec::new(),
            children: Vec::new(),
        }
    }

    fn commit(self) {
        if let Some(canvas) = self.canvas {
            self.target.resize(canvas);
        }
        for node in self.defs {
            self.target.define(node);
        }
        for node in self.children {
            self.target.append(node);
        }
    }
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for Pending<'_, S> {
    fn canvas(&self) -> Canvas {
        self.canvas.unwrap_or_else(|| self.target.canvas())
    }

    fn resize(&mut self, canvas: Canvas) {
        self.canvas = Some(canvas);
    }

    fn append(&mut self, node: SvgNode) {
        self.children.push(node);
    }

    fn define(&mut self, node: SvgNode) {
        self.defs.push(node);
    }

    fn has_definition(&self, id: &str) -> bool {
        self.target.has_definition(id) || self.defs.iter().any(|node| node.id() == Some(id))
    }
}

// ============================================================================
// Composer
// ============================================================================

/// A coordinate space, the surface it draws on, the surface's arrowhead
/// registry and an optional math renderer.
pub(crate) struct Composer<C, S> {
    pub(crate) space: C,
    pub(crate) surface: S,
    markers: MarkerRegistry,
    math: Option<Box<dyn MathRenderer>>,
}

impl<C, S> fmt::Debug for Composer<C, S>
where
    C: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer")
            .field("space", &self.space)
            .field("surface", &self.surface)
            .field("markers", &self.markers)
            .field("math", &self.math.is_some())
            .finish()
    }
}

impl<C, S> Composer<C, S>
where
    C: CoordinateSpace,
    S: DrawingSurface,
{
    pub(crate) fn new(space: C, surface: S, options: DrawOptions) -> Self {
        Self {
            space,
            surface,
            markers: MarkerRegistry::new(options.marker_policy),
            math: None,
        }
    }

    pub(crate) fn set_math(&mut self, renderer: Box<dyn MathRenderer>) {
        self.math = Some(renderer);
    }

    pub(crate) fn has_math(&self) -> bool {
        self.math.is_some()
    }

    /// Run `draw` against a buffer and apply its writes only if it succeeds.
    ///
    /// Marker registration is rolled back together with the nodes.
    pub(crate) fn atomically<T>(
        &mut self,
        draw: impl FnOnce(
            &mut Pending<'_, S>,
            &mut MarkerRegistry,
            Option<&dyn MathRenderer>,
        ) -> Result<T, DrawError>,
    ) -> Result<T, DrawError> {
        let mut markers = self.markers.clone();
        let mut pending = Pending::new(&mut self.surface);
        let out = draw(&mut pending, &mut markers, self.math.as_deref())?;
        pending.commit();
        self.markers = markers;
        Ok(out)
    }

    fn pixels(&self, points: &[C::Point]) -> Result<Vec<glam::DVec2>, DrawError> {
        points.iter().map(|p| self.space.transform(*p)).collect()
    }

    pub(crate) fn point(&mut self, coord: C::Point, color: &str) -> Result<(), DrawError> {
        let at = self.space.transform(coord)?;
        self.atomically(|surface, _, _| {
            primitives::circle(surface, at, color, defaults::POINT_RADIUS)
        })
    }

    pub(crate) fn segment(
        &mut self,
        p1: C::Point,
        p2: C::Point,
        line: &LineAttributes,
    ) -> Result<(), DrawError> {
        let from = self.space.transform(p1)?;
        let to = self.space.transform(p2)?;
        self.atomically(|surface, markers, _| {
            primitives::segment(surface, markers, from, to, line)
        })
    }

    pub(crate) fn vector(
        &mut self,
        initial: C::Point,
        components: C::Point,
        text: &TextContent,
        line: &LineAttributes,
        text_attrs: &TextAttributes,
    ) -> Result<(), DrawError> {
        let from = self.space.transform(initial)?;
        let to = self.space.transform(initial + components)?;
        let label_at = self
            .space
            .transform(vector_label_position(initial, components))?;
        let text_attrs = text_attrs.inheriting_fill(&line.stroke_color);
        self.atomically(|surface, markers, _| {
            primitives::segment(surface, markers, from, to, line)?;
            if !text.is_empty() {
                primitives::text(surface, text, label_at, &text_attrs)?;
            }
            Ok(())
        })
    }

    pub(crate) fn vector_b(
        &mut self,
        initial: C::Point,
        components: C::Point,
        latex: &str,
        line: &LineAttributes,
        math: &MathAttributes,
    ) -> Result<(), DrawError> {
        let from = self.space.transform(initial)?;
        let to = self.space.transform(initial + components)?;
        let label_at = self
            .space
            .transform(vector_label_position(initial, components))?;
        let math = math.inheriting_color(&line.stroke_color);
        self.atomically(|surface, markers, renderer| {
            primitives::segment(surface, markers, from, to, line)?;
            if !latex.is_empty() {
                primitives::math_label(surface, renderer, latex, label_at, &math)?;
            }
            Ok(())
        })
    }

    pub(crate) fn label(
        &mut self,
        point: C::Point,
        content: &TextContent,
        attrs: &TextAttributes,
    ) -> Result<(), DrawError> {
        let at = self.space.transform(point)?;
        self.atomically(|surface, _, _| primitives::text(surface, content, at, attrs))
    }

    pub(crate) fn math(
        &mut self,
        point: C::Point,
        latex: &str,
        math: &MathAttributes,
    ) -> Result<bool, DrawError> {
        let at = self.space.transform(point)?;
        self.atomically(|surface, _, renderer| {
            primitives::math_label(surface, renderer, latex, at, math)
        })
    }

    pub(crate) fn path(&mut self, points: &[C::Point], color: &str) -> Result<(), DrawError> {
        if points.len() < 2 {
            return Err(DrawError::InsufficientPoints { got: points.len() });
        }
        let pixels = self.pixels(points)?;
        let line = LineAttributes::default().with_color(color);
        self.atomically(|surface, _, _| primitives::polyline(surface, &pixels, &line))
    }

    pub(crate) fn polyline(
        &mut self,
        points: &[C::Point],
        line: &LineAttributes,
    ) -> Result<(), DrawError> {
        let pixels = self.pixels(points)?;
        self.atomically(|surface, _, _| primitives::polyline(surface, &pixels, line))
    }

    /// Axis arrows followed by their math labels, committed as one unit.
    /// Empty labels are skipped.
    pub(crate) fn axes(
        &mut self,
        arrows: &[(C::Point, C::Point)],
        labels: &[(C::Point, &str, MathAttributes)],
    ) -> Result<(), DrawError> {
        let arrows = arrows
            .iter()
            .map(|(from, to)| Ok((self.space.transform(*from)?, self.space.transform(*to)?)))
            .collect::<Result<Vec<_>, DrawError>>()?;
        let labels = labels
            .iter()
            .filter(|(_, latex, _)| !latex.is_empty())
            .map(|(at, latex, math)| Ok((self.space.transform(*at)?, *latex, math)))
            .collect::<Result<Vec<_>, DrawError>>()?;
        let line = LineAttributes::vector();
        self.atomically(|surface, markers, renderer| {
            for (from, to) in &arrows {
                primitives::segment(surface, markers, *from, *to, &line)?;
            }
            for (at, latex, math) in &labels {
                primitives::math_label(surface, renderer, latex, *at, math)?;
            }
            Ok(())
        })
    }
}
