//! SVG document model and serialization
//!
//! Nodes are plain data. Each one knows how to write itself as markup, and
//! [`SvgNode`] forwards to the concrete node with `enum_dispatch`.

use std::fmt::{self, Write as _};

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use super::types::{TextContent, TextSpan};
use crate::types::Canvas;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// ============================================================================
// Drawing Surface
// ============================================================================

/// Where drawing primitives put their shapes.
///
/// Appends are the only mutation; z-order is append order.
pub trait DrawingSurface {
    /// Pixel size of the surface.
    fn canvas(&self) -> Canvas;

    /// Change the pixel size (width, height and viewBox).
    fn resize(&mut self, canvas: Canvas);

    /// Append a visible node.
    fn append(&mut self, node: SvgNode);

    /// Add a node to the hidden definitions section.
    fn define(&mut self, node: SvgNode);

    /// Whether a definition with this id exists.
    fn has_definition(&self, id: &str) -> bool;
}

/// In-memory SVG surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    canvas: Canvas,
    defs: Vec<SvgNode>,
    children: Vec<SvgNode>,
}

impl SvgDocument {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            defs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Visible nodes in paint order.
    pub fn children(&self) -> &[SvgNode] {
        &self.children
    }

    /// Hidden definitions (markers).
    pub fn definitions(&self) -> &[SvgNode] {
        &self.defs
    }

    /// Serialize the whole document.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        let w = fmt_num(self.canvas.width());
        let h = fmt_num(self.canvas.height());
        let _ = writeln!(
            out,
            r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            for node in &self.defs {
                node.write_svg(&mut out);
            }
            out.push_str("</defs>\n");
        }
        for node in &self.children {
            node.write_svg(&mut out);
        }
        out.push_str("</svg>\n");
        out
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_string())
    }
}

impl DrawingSurface for SvgDocument {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn resize(&mut self, canvas: Canvas) {
        crate::log::debug!(width = canvas.width(), height = canvas.height(), "resize surface");
        self.canvas = canvas;
    }

    fn append(&mut self, node: SvgNode) {
        self.children.push(node);
    }

    fn define(&mut self, node: SvgNode) {
        self.defs.push(node);
    }

    fn has_definition(&self, id: &str) -> bool {
        self.defs.iter().any(|node| node.id() == Some(id))
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// Markup output for a node.
#[enum_dispatch]
pub trait WriteSvg {
    /// Append this node's markup, ending with a newline.
    fn write_svg(&self, out: &mut String);

    /// The node's `id` attribute, if it has one.
    fn id(&self) -> Option<&str> {
        None
    }
}

/// Any SVG node the engine emits
#[enum_dispatch(WriteSvg)]
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Line,
    Circle,
    Path,
    Polyline,
    Text,
    Group,
    Marker,
    Markup,
}

/// Fill and stroke attributes shared by shape elements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paint {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_dasharray: Option<String>,
}

impl Paint {
    fn write_attrs(&self, out: &mut String) {
        opt_attr(out, "fill", self.fill.as_deref());
        opt_attr(out, "stroke", self.stroke.as_deref());
        if let Some(w) = self.stroke_width {
            num_attr(out, "stroke-width", w);
        }
        opt_attr(out, "stroke-dasharray", self.stroke_dasharray.as_deref());
    }
}

/// `<line>`
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub from: DVec2,
    pub to: DVec2,
    pub paint: Paint,
    /// `url(#id)` reference of the arrowhead marker
    pub marker_end: Option<String>,
}

impl WriteSvg for Line {
    fn write_svg(&self, out: &mut String) {
        out.push_str("<line");
        num_attr(out, "x1", self.from.x);
        num_attr(out, "y1", self.from.y);
        num_attr(out, "x2", self.to.x);
        num_attr(out, "y2", self.to.y);
        self.paint.write_attrs(out);
        opt_attr(out, "marker-end", self.marker_end.as_deref());
        out.push_str("/>\n");
    }
}

/// `<circle>`
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub r: f64,
    pub paint: Paint,
}

impl WriteSvg for Circle {
    fn write_svg(&self, out: &mut String) {
        out.push_str("<circle");
        num_attr(out, "cx", self.center.x);
        num_attr(out, "cy", self.center.y);
        num_attr(out, "r", self.r);
        self.paint.write_attrs(out);
        out.push_str("/>\n");
    }
}

/// `<path>`
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub d: PathData,
    pub paint: Paint,
}

impl WriteSvg for Path {
    fn write_svg(&self, out: &mut String) {
        out.push_str("<path");
        attr(out, "d", &self.d.to_string());
        self.paint.write_attrs(out);
        out.push_str("/>\n");
    }
}

/// `<polyline>`
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<DVec2>,
    pub paint: Paint,
}

impl WriteSvg for Polyline {
    fn write_svg(&self, out: &mut String) {
        let points = self
            .points
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str("<polyline");
        attr(out, "points", &points);
        self.paint.write_attrs(out);
        out.push_str("/>\n");
    }
}

/// `<text>`, possibly holding subscript `<tspan>`s
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub at: DVec2,
    pub content: TextContent,
    pub font_size: Option<f64>,
    pub font_weight: Option<String>,
    pub paint: Paint,
    pub text_anchor: Option<String>,
    pub dominant_baseline: Option<String>,
}

impl WriteSvg for Text {
    fn write_svg(&self, out: &mut String) {
        out.push_str("<text");
        num_attr(out, "x", self.at.x);
        num_attr(out, "y", self.at.y);
        if let Some(size) = self.font_size {
            num_attr(out, "font-size", size);
        }
        opt_attr(out, "font-weight", self.font_weight.as_deref());
        self.paint.write_attrs(out);
        opt_attr(out, "text-anchor", self.text_anchor.as_deref());
        opt_attr(out, "dominant-baseline", self.dominant_baseline.as_deref());
        out.push('>');
        match &self.content {
            TextContent::Plain(s) => out.push_str(&escape_text(s)),
            TextContent::Rich(spans) => {
                for TextSpan { text, subscript } in spans {
                    if *subscript {
                        out.push_str(r#"<tspan baseline-shift="sub" font-size="70%">"#);
                        out.push_str(&escape_text(text));
                        out.push_str("</tspan>");
                    } else {
                        out.push_str(&escape_text(text));
                    }
                }
            }
        }
        out.push_str("</text>\n");
    }
}

/// `<g>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub transform: Option<String>,
    pub color: Option<String>,
    pub children: Vec<SvgNode>,
}

impl WriteSvg for Group {
    fn write_svg(&self, out: &mut String) {
        out.push_str("<g");
        opt_attr(out, "transform", self.transform.as_deref());
        opt_attr(out, "color", self.color.as_deref());
        out.push_str(">\n");
        for child in &self.children {
            child.write_svg(out);
        }
        out.push_str("</g>\n");
    }
}

/// `<marker>` definition for arrowheads
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub view_box: String,
    pub ref_x: f64,
    pub ref_y: f64,
    pub marker_width: f64,
    pub marker_height: f64,
    pub orient: String,
    pub children: Vec<SvgNode>,
}

impl WriteSvg for Marker {
    fn write_svg(&self, out: &mut String) {
        out.push_str("<marker");
        attr(out, "id", &self.id);
        attr(out, "viewBox", &self.view_box);
        num_attr(out, "refX", self.ref_x);
        num_attr(out, "refY", self.ref_y);
        num_attr(out, "markerWidth", self.marker_width);
        num_attr(out, "markerHeight", self.marker_height);
        attr(out, "orient", &self.orient);
        out.push_str(">\n");
        for child in &self.children {
            child.write_svg(out);
        }
        out.push_str("</marker>\n");
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

/// Pre-rendered markup, inserted verbatim (math renderer output).
#[derive(Debug, Clone, PartialEq)]
pub struct Markup(pub String);

impl WriteSvg for Markup {
    fn write_svg(&self, out: &mut String) {
        out.push_str(&self.0);
        if !self.0.ends_with('\n') {
            out.push('\n');
        }
    }
}

// ============================================================================
// Path Data
// ============================================================================

/// Builder for the `d` attribute of a path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<String>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to
    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(format!("M{},{}", fmt_num(x), fmt_num(y)));
        self
    }

    /// Line to
    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(format!("L{},{}", fmt_num(x), fmt_num(y)));
        self
    }

    /// Elliptical arc to `(x, y)`
    #[allow(clippy::too_many_arguments)]
    pub fn a(
        mut self,
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.commands.push(format!(
            "A{},{} {} {} {} {},{}",
            fmt_num(rx),
            fmt_num(ry),
            fmt_num(x_rotation),
            u8::from(large_arc),
            u8::from(sweep),
            fmt_num(x),
            fmt_num(y)
        ));
        self
    }

    /// Close path
    pub fn z(mut self) -> Self {
        self.commands.push("Z".to_string());
        self
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.commands.join(" "))
    }
}

// ============================================================================
// Formatting
// ============================================================================

fn attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, r#" {}="{}""#, name, escape_attr(value));
}

fn opt_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        attr(out, name, value);
    }
}

fn num_attr(out: &mut String, name: &str, value: f64) {
    let _ = write!(out, r#" {}="{}""#, name, fmt_num(value));
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;
    // Subnormals overflow the scale
    if !scale.is_finite() || !rounded.is_finite() {
        return "0".to_string();
    }

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    // Only the fractional part may lose zeros
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        &s
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Escape text content for SVG.
///
/// `<` and `>` are always escaped. A `&` that starts an entity such as
/// `&theta;` or `&#8467;` passes through; a bare `&` becomes `&amp;`.
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' if is_entity_at(s.as_bytes(), i) => result.push('&'),
            '&' => result.push_str("&amp;"),
            _ => result.push(c),
        }
    }
    result
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// Check if position i in bytes starts an entity: `&[#]?[a-zA-Z0-9]+;`
fn is_entity_at(bytes: &[u8], i: usize) -> bool {
    if bytes.get(i) != Some(&b'&') {
        return false;
    }
    let mut j = i + 1;
    if bytes.get(j) == Some(&b'#') {
        j += 1;
    }
    let start = j;
    while let Some(&c) = bytes.get(j) {
        if c == b';' {
            return j > start;
        } else if c.is_ascii_alphanumeric() {
            j += 1;
        } else {
            return false;
        }
    }
    false
}
