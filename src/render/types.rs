//! Style attributes and text content for drawing calls
//!
//! All attribute structs are plain values with named defaults. Drawing
//! calls take them by reference and never modify them; inherited values
//! (a vector label taking its line's color) are resolved into fresh copies.

use super::defaults;
use super::labels::Corner;

/// Stroke configuration for segments, vectors, arcs and outlines
#[derive(Debug, Clone, PartialEq)]
pub struct LineAttributes {
    pub stroke_color: String,
    pub stroke_width: f64,
    pub stroke_dasharray: String,
    pub show_arrow: bool,
}

impl Default for LineAttributes {
    fn default() -> Self {
        Self {
            stroke_color: defaults::STROKE_COLOR.to_string(),
            stroke_width: defaults::STROKE_WIDTH,
            stroke_dasharray: defaults::STROKE_DASHARRAY.to_string(),
            show_arrow: false,
        }
    }
}

impl LineAttributes {
    /// Defaults for vectors: same as segments but with an arrowhead.
    pub fn vector() -> Self {
        Self {
            show_arrow: true,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_dasharray(mut self, dasharray: impl Into<String>) -> Self {
        self.stroke_dasharray = dasharray.into();
        self
    }

    pub fn with_arrow(mut self, show_arrow: bool) -> Self {
        self.show_arrow = show_arrow;
        self
    }
}

/// Styling for plain and rich text labels
#[derive(Debug, Clone, PartialEq)]
pub struct TextAttributes {
    pub font_size: f64,
    pub stroke: String,
    /// `None` means "not set by the caller": brown for ordinary labels,
    /// the line color for vector labels.
    pub fill: Option<String>,
    pub font_weight: String,
    pub corner: Corner,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            font_size: defaults::FONT_SIZE,
            stroke: defaults::TEXT_STROKE.to_string(),
            fill: None,
            font_weight: defaults::FONT_WEIGHT.to_string(),
            corner: Corner::default(),
        }
    }
}

impl TextAttributes {
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = weight.into();
        self
    }

    pub fn with_corner(mut self, corner: Corner) -> Self {
        self.corner = corner;
        self
    }

    /// Fill to paint with.
    pub fn fill(&self) -> &str {
        self.fill.as_deref().unwrap_or(defaults::TEXT_FILL)
    }

    /// Copy with `color` as fill unless the caller chose one.
    pub fn inheriting_fill(&self, color: &str) -> Self {
        Self {
            fill: Some(self.fill.clone().unwrap_or_else(|| color.to_string())),
            ..self.clone()
        }
    }
}

/// Placement and styling for math (LaTeX) labels
#[derive(Debug, Clone, PartialEq)]
pub struct MathAttributes {
    pub scale: f64,
    /// `None` means brown, or the line color for vector labels.
    pub color: Option<String>,
    /// Pixel offset applied after the transform.
    pub dx: f64,
    pub dy: f64,
    /// Degrees.
    pub rotation: f64,
}

impl Default for MathAttributes {
    fn default() -> Self {
        Self {
            scale: defaults::MATH_SCALE,
            color: None,
            dx: 0.0,
            dy: 0.0,
            rotation: 0.0,
        }
    }
}

impl MathAttributes {
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_offset(mut self, dx: f64, dy: f64) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(defaults::MATH_COLOR)
    }

    /// Copy with `color` unless the caller chose one.
    pub fn inheriting_color(&self, color: &str) -> Self {
        Self {
            color: Some(self.color.clone().unwrap_or_else(|| color.to_string())),
            ..self.clone()
        }
    }
}

/// One run of label text
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub subscript: bool,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subscript: false,
        }
    }

    pub fn sub(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subscript: true,
        }
    }
}

/// Label text: a plain string or pre-built rich text
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
    Plain(String),
    Rich(Vec<TextSpan>),
}

impl TextContent {
    /// `base` followed by a subscript, e.g. `v₁`.
    pub fn subscripted(base: impl Into<String>, subscript: impl Into<String>) -> Self {
        TextContent::Rich(vec![TextSpan::plain(base), TextSpan::sub(subscript)])
    }

    pub fn is_empty(&self) -> bool {
        match self {
            TextContent::Plain(s) => s.is_empty(),
            TextContent::Rich(spans) => spans.iter().all(|span| span.text.is_empty()),
        }
    }
}

impl From<&str> for TextContent {
    fn from(s: &str) -> Self {
        TextContent::Plain(s.to_string())
    }
}

impl From<String> for TextContent {
    fn from(s: String) -> Self {
        TextContent::Plain(s)
    }
}

impl From<Vec<TextSpan>> for TextContent {
    fn from(spans: Vec<TextSpan>) -> Self {
        TextContent::Rich(spans)
    }
}
