//! Draws a small 3D diagram and prints the SVG.

use planespace::types::Canvas;
use planespace::{
    DrawOptions, LineAttributes, MathAttributes, Space, SvgDocument, TextAttributes, VerbatimMath,
};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let surface = SvgDocument::new(Canvas::try_new(480.0, 360.0)?);
    let mut space = Space::new(surface, [0.0, 0.0, 0.0], 40.0, DrawOptions::default())?
        .with_math(VerbatimMath);

    space.draw_axes()?;
    space.draw_vector(
        [0.0, 0.0, 0.0],
        [2.0, 3.0, 2.5],
        "p",
        &LineAttributes::vector().with_color("cornflowerBlue"),
        &TextAttributes::default(),
    )?;
    space.draw_path(
        [[2.0, 3.0, 0.0], [2.0, 3.0, 2.5], [0.0, 0.0, 2.5]],
        "sienna",
    )?;
    space.draw_segment(
        [0.0, 0.0, 0.0],
        [2.0, 3.0, 0.0],
        &LineAttributes::default().with_dasharray("5 3"),
    )?;
    space.draw_point([2.0, 3.0, 2.5], "brown")?;
    space.draw_math([2.0, 3.0, 2.5], r"P(2, 3, 2.5)", &MathAttributes::default().with_offset(8.0, -8.0))?;

    print!("{}", space.into_surface());
    Ok(())
}
