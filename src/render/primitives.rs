//! Drawing primitives in pixel space
//!
//! Each function validates everything first and then appends exactly one
//! node, so a failed call leaves the surface untouched.

use glam::DVec2;

use super::markers::MarkerRegistry;
use super::svg::{Circle, DrawingSurface, Group, Line, Paint, Path, PathData, Polyline, SvgNode, Text, fmt_num};
use super::types::{LineAttributes, MathAttributes, TextAttributes, TextContent};
use crate::errors::DrawError;
use crate::math::MathRenderer;
use crate::types::{finite, finite2, positive};

/// SVG sweep flag for a counter-clockwise arc. Pixel y points down, so
/// visual counter-clockwise is the negative-angle direction.
const CCW_SWEEP: bool = false;

fn stroke_paint(line: &LineAttributes) -> Result<Paint, DrawError> {
    let width = finite(line.stroke_width)
        .ok()
        .filter(|w| *w >= 0.0)
        .ok_or_else(|| {
            DrawError::configuration(format!("stroke width {} is not usable", line.stroke_width))
        })?;
    Ok(Paint {
        fill: None,
        stroke: Some(line.stroke_color.clone()),
        stroke_width: Some(width),
        stroke_dasharray: Some(line.stroke_dasharray.clone()),
    })
}

fn pixel_radius(r: f64) -> Result<f64, DrawError> {
    finite(r)
        .ok()
        .filter(|r| *r >= 0.0)
        .ok_or_else(|| DrawError::configuration(format!("radius {r} is not usable")))
}

/// Straight line, with an arrowhead at `to` when asked for and available.
pub fn segment<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    markers: &mut MarkerRegistry,
    from: DVec2,
    to: DVec2,
    line: &LineAttributes,
) -> Result<(), DrawError> {
    let from = finite2("segment start", from)?;
    let to = finite2("segment end", to)?;
    let paint = stroke_paint(line)?;
    let marker = if line.show_arrow {
        markers.resolve(&line.stroke_color)?
    } else {
        None
    };

    let marker_end = marker.map(|color| {
        markers.ensure_registered(surface);
        color.marker_ref()
    });
    surface.append(SvgNode::from(Line {
        from,
        to,
        paint,
        marker_end,
    }));
    Ok(())
}

/// Filled dot; stroke and fill share `color`.
pub fn circle<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    center: DVec2,
    color: &str,
    radius: f64,
) -> Result<(), DrawError> {
    let center = finite2("circle center", center)?;
    let r = pixel_radius(radius)?;
    surface.append(SvgNode::from(Circle {
        center,
        r,
        paint: Paint {
            fill: Some(color.to_string()),
            stroke: Some(color.to_string()),
            ..Paint::default()
        },
    }));
    Ok(())
}

/// Circle outline with no fill.
pub fn circumference<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    center: DVec2,
    radius: f64,
    line: &LineAttributes,
) -> Result<(), DrawError> {
    let center = finite2("circumference center", center)?;
    let r = pixel_radius(radius)?;
    let paint = Paint {
        fill: Some("none".to_string()),
        ..stroke_paint(line)?
    };
    surface.append(SvgNode::from(Circle { center, r, paint }));
    Ok(())
}

/// Open polyline through `points`.
pub fn polyline<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    points: &[DVec2],
    line: &LineAttributes,
) -> Result<(), DrawError> {
    if points.len() < 2 {
        return Err(DrawError::InsufficientPoints { got: points.len() });
    }
    let points = points
        .iter()
        .map(|p| finite2("path point", *p))
        .collect::<Result<Vec<_>, _>>()?;
    let paint = Paint {
        fill: Some("none".to_string()),
        ..stroke_paint(line)?
    };
    surface.append(SvgNode::from(Polyline { points, paint }));
    Ok(())
}

/// Counter-clockwise elliptical arc from `from` to `to`.
pub fn arc<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    from: DVec2,
    to: DVec2,
    radii: DVec2,
    large_arc: bool,
    line: &LineAttributes,
) -> Result<(), DrawError> {
    let from = finite2("arc start", from)?;
    let to = finite2("arc end", to)?;
    let rx = pixel_radius(radii.x)?;
    let ry = pixel_radius(radii.y)?;
    let paint = Paint {
        fill: Some("none".to_string()),
        ..stroke_paint(line)?
    };
    let d = PathData::new()
        .m(from.x, from.y)
        .a(rx, ry, 0.0, large_arc, CCW_SWEEP, to.x, to.y);
    surface.append(SvgNode::from(Path { d, paint }));
    Ok(())
}

/// Text anchored at `at` by the corner named in `attrs`.
pub fn text<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    content: &TextContent,
    at: DVec2,
    attrs: &TextAttributes,
) -> Result<(), DrawError> {
    let at = finite2("label position", at)?;
    let font_size = positive(attrs.font_size).map_err(|e| {
        DrawError::configuration(format!("font size {}: {e}", attrs.font_size))
    })?;
    surface.append(SvgNode::from(Text {
        at,
        content: content.clone(),
        font_size: Some(font_size),
        font_weight: Some(attrs.font_weight.clone()),
        paint: Paint {
            fill: Some(attrs.fill().to_string()),
            stroke: Some(attrs.stroke.clone()),
            ..Paint::default()
        },
        text_anchor: Some(attrs.corner.anchor().to_string()),
        dominant_baseline: Some(attrs.corner.baseline().to_string()),
    }));
    Ok(())
}

/// Typeset `latex` and place it at `at`, offset, rotated and scaled.
///
/// Returns whether a label was drawn. A missing renderer or a failed render
/// is logged and drawn as nothing; bad placement values are still errors.
pub fn math_label<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    renderer: Option<&dyn MathRenderer>,
    latex: &str,
    at: DVec2,
    math: &MathAttributes,
) -> Result<bool, DrawError> {
    let at = finite2("math label position", at)?;
    let offset = finite2("math label offset", DVec2::new(math.dx, math.dy))?;
    let rotation = finite(math.rotation).map_err(|reason| DrawError::InvalidCoordinate {
        what: "math label rotation",
        reason,
    })?;
    let scale = positive(math.scale)
        .map_err(|e| DrawError::configuration(format!("math scale {}: {e}", math.scale)))?;

    let Some(renderer) = renderer else {
        crate::log::warn!(latex, "no math renderer available, label skipped");
        return Ok(false);
    };
    let markup = match renderer.latex_to_markup(latex) {
        Ok(markup) => markup,
        Err(_err) => {
            crate::log::warn!(error = %_err, "math label skipped");
            return Ok(false);
        }
    };

    let pos = at + offset;
    surface.append(SvgNode::from(Group {
        transform: Some(format!(
            "translate({},{}) rotate({}) scale({})",
            fmt_num(pos.x),
            fmt_num(pos.y),
            fmt_num(rotation),
            fmt_num(scale)
        )),
        color: Some(math.color().to_string()),
        children: vec![SvgNode::from(markup)],
    }));
    Ok(true)
}
