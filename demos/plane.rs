//! Draws a small 2D diagram and prints the SVG.
//!
//! Run with `RUST_LOG=planespace=debug cargo run --example plane --features tracing`
//! to see the engine's logging on stderr.

use planespace::types::Canvas;
use planespace::{
    DrawOptions, LineAttributes, MathAttributes, Plane, PlaneBounds, SvgDocument, TextAttributes,
    TextContent, VerbatimMath,
};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let bounds = PlaneBounds::new(-1.0, 6.0, -1.0, 5.0)?;
    let surface = SvgDocument::new(Canvas::try_new(1.0, 1.0)?);
    let mut plane = Plane::with_scale(surface, bounds, 60.0, DrawOptions::default())?
        .with_math(VerbatimMath);

    plane.draw_axes("y", "x", "O")?;

    let u = LineAttributes::vector().with_color("blue");
    let v = LineAttributes::vector().with_color("red");
    plane.draw_vector(
        [0.0, 0.0],
        [4.0, 1.0],
        TextContent::subscripted("v", "1"),
        &u,
        &TextAttributes::default(),
    )?;
    plane.draw_vector_b([0.0, 0.0], [1.0, 3.0], r"\vec{w}", &v, &MathAttributes::default())?;
    plane.draw_angle(
        [0.0, 0.0],
        [4.0, 1.0],
        [1.0, 3.0],
        1.0,
        r"\theta",
        &LineAttributes::default(),
        &MathAttributes::default().with_scale(0.8),
    )?;
    plane.draw_right_angle(
        [4.0, 1.0],
        [-4.0, -1.0],
        [-1.0, 4.0],
        0.3,
        &LineAttributes::default().with_width(1.0),
    )?;
    plane.draw_circunference(
        [4.0, 3.0],
        0.75,
        &LineAttributes::default().with_dasharray("4 2"),
    )?;
    plane.draw_path([[4.0, 1.0], [4.5, 2.0], [5.0, 1.5]], "darkKhaki")?;
    plane.draw_point([4.0, 3.0], "green")?;
    plane.draw_label([4.0, 3.0], "C", &TextAttributes::default())?;

    print!("{}", plane.into_surface());
    Ok(())
}
