//! Static 2D and 3D vector-geometry diagrams, rendered to SVG.
//!
//! A diagram is a coordinate space plus a drawing surface. [`Plane`] maps
//! a bounded Cartesian plane onto the surface; [`Space`] projects 3D points
//! with a 45° oblique projection. Both offer the same drawing calls (points,
//! segments, vectors, labels, math labels, paths and axes), and the plane
//! adds arcs, angles, right-angle marks and circumferences.
//!
//! ```
//! use planespace::{DrawOptions, LineAttributes, Plane, PlaneBounds, SvgDocument, TextAttributes};
//! use planespace::types::Canvas;
//!
//! # fn main() -> Result<(), planespace::DrawError> {
//! let surface = SvgDocument::new(Canvas::try_new(200.0, 200.0)?);
//! let bounds = PlaneBounds::new(-5.0, 5.0, -5.0, 5.0)?;
//! let mut plane = Plane::new(surface, bounds, DrawOptions::default())?;
//! plane.draw_vector([0.0, 0.0], [3.0, 4.0], "v", &LineAttributes::vector(), &TextAttributes::default())?;
//! let svg = plane.into_surface().to_svg_string();
//! assert!(svg.contains("marker-end=\"url(#arrow-brown)\""));
//! # Ok(())
//! # }
//! ```
//!
//! Math labels go through a [`MathRenderer`]. Without one, or when it
//! fails, the label is skipped and a warning is logged (with the `tracing`
//! feature), while the rest of the diagram still renders.

pub(crate) mod log;

pub mod coords;
pub mod diagram;
pub mod errors;
pub mod math;
pub mod render;
pub mod types;

pub use coords::{CartesianSpace, CoordinateSpace, ObliqueSpace, PlaneBounds};
pub use diagram::{Plane, Space};
pub use errors::{DrawError, MathRenderError};
pub use glam::{DVec2, DVec3, dvec2, dvec3};
pub use math::{MathRenderer, VerbatimMath};
pub use render::{
    Corner, DrawOptions, DrawingSurface, LineAttributes, MarkerColor, MarkerPolicy,
    MarkerRegistry, MathAttributes, Markup, SvgDocument, TextAttributes, TextContent, TextSpan,
};
