//! Pixel-space rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default styles and placement constants
//! - `types`: Line, text and math attributes; label text content
//! - `geometry`: Arc and right-angle geometry in logical units
//! - `labels`: Corner anchoring, bisector and midpoint label placement
//! - `markers`: Arrowhead markers and their registry
//! - `primitives`: Functions that append one shape to a surface
//! - `svg`: Drawing surface trait, SVG node model and serializer

pub mod defaults;
pub mod geometry;
pub mod labels;
pub mod markers;
pub mod primitives;
pub mod svg;
pub mod types;

pub use labels::Corner;
pub use markers::{MarkerColor, MarkerPolicy, MarkerRegistry};
pub use svg::{DrawingSurface, Markup, SvgDocument, SvgNode};
pub use types::{LineAttributes, MathAttributes, TextAttributes, TextContent, TextSpan};

/// Per-diagram settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawOptions {
    /// What `show_arrow` does with a stroke color that has no marker.
    pub marker_policy: MarkerPolicy,
}

impl DrawOptions {
    pub fn with_marker_policy(mut self, policy: MarkerPolicy) -> Self {
        self.marker_policy = policy;
        self
    }
}
