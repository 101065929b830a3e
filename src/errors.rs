//! Error types with diagnostics using miette
//!
//! Every drawing operation validates its whole input before touching the
//! surface, so an error always means nothing was appended for that call.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Drawing Errors
// ============================================================================

/// Errors raised by coordinate spaces and drawing operations
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum DrawError {
    #[error("invalid coordinate for {what}: {reason}")]
    #[diagnostic(
        code(planespace::invalid_coordinate),
        help("every coordinate component must be a finite number")
    )]
    InvalidCoordinate {
        what: &'static str,
        reason: NumericError,
    },

    #[error("invalid configuration: {message}")]
    #[diagnostic(code(planespace::configuration))]
    Configuration { message: String },

    #[error("a path needs at least 2 points, got {got}")]
    #[diagnostic(code(planespace::insufficient_points))]
    InsufficientPoints { got: usize },

    #[error("unsupported marker color: {color}")]
    #[diagnostic(
        code(planespace::unsupported_marker_color),
        help(
            "arrowheads exist for brown, blue, green, red, orange, purple, darkKhaki, cornflowerBlue and sienna"
        )
    )]
    UnsupportedMarkerColor { color: String },
}

impl DrawError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        DrawError::Configuration {
            message: message.into(),
        }
    }
}

// ============================================================================
// Math Rendering Errors
// ============================================================================

/// Failure reported by a [`MathRenderer`](crate::math::MathRenderer).
///
/// Never escapes a drawing call: the label is dropped and a warning logged.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("math rendering failed for `{latex}`: {message}")]
#[diagnostic(code(planespace::math_render))]
pub struct MathRenderError {
    pub latex: String,
    pub message: String,
}

impl MathRenderError {
    pub fn new(latex: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            latex: latex.into(),
            message: message.into(),
        }
    }
}
