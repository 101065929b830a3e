//! LaTeX rendering seam
//!
//! The engine never typesets math itself. It hands the source to a
//! [`MathRenderer`] and positions whatever markup comes back.

use crate::errors::MathRenderError;
use crate::render::svg::{Markup, escape_text};

/// Converts a LaTeX expression into SVG markup.
///
/// Called synchronously, once per label, with no caching in between.
pub trait MathRenderer {
    fn latex_to_markup(&self, latex: &str) -> Result<Markup, MathRenderError>;
}

impl<F> MathRenderer for F
where
    F: Fn(&str) -> Result<Markup, MathRenderError>,
{
    fn latex_to_markup(&self, latex: &str) -> Result<Markup, MathRenderError> {
        self(latex)
    }
}

/// Shows the LaTeX source as italic text instead of typesetting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimMath;

impl MathRenderer for VerbatimMath {
    fn latex_to_markup(&self, latex: &str) -> Result<Markup, MathRenderError> {
        if latex.trim().is_empty() {
            return Err(MathRenderError::new(latex, "empty expression"));
        }
        Ok(Markup(format!(
            r#"<text font-style="italic" fill="currentColor">{}</text>"#,
            escape_text(latex)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbatim_escapes_source() {
        let markup = VerbatimMath.latex_to_markup(r"a<b").unwrap();
        assert_eq!(
            markup.0,
            r#"<text font-style="italic" fill="currentColor">a&lt;b</text>"#
        );
        assert!(VerbatimMath.latex_to_markup("  ").is_err());
    }

    #[test]
    fn closures_are_renderers() {
        let renderer = |latex: &str| -> Result<Markup, MathRenderError> {
            Ok(Markup(format!("<g>{latex}</g>")))
        };
        assert_eq!(renderer.latex_to_markup("x").unwrap(), Markup("<g>x</g>".into()));
    }
}
