//! Default styles and placement constants (pixels unless noted)

pub const STROKE_COLOR: &str = "brown";
pub const STROKE_WIDTH: f64 = 2.0;
pub const STROKE_DASHARRAY: &str = "none";

pub const FONT_SIZE: f64 = 20.0;
pub const FONT_WEIGHT: &str = "normal";
pub const TEXT_STROKE: &str = "none";
pub const TEXT_FILL: &str = "brown";

pub const MATH_SCALE: f64 = 1.0;
pub const MATH_COLOR: &str = "brown";

/// Radius of the dot drawn by `draw_point`.
pub const POINT_RADIUS: f64 = 3.0;

/// Angle labels sit this many arc radii away from the vertex.
pub const ANGLE_LABEL_FACTOR: f64 = 1.3;
/// Below this norm the two angle sides are taken as opposite.
pub const BISECTOR_EPSILON: f64 = 1e-6;

/// Fraction of the canvas covered by the 3D y and z axes.
pub const SPACE_AXIS_FRACTION: f64 = 0.55;
/// Fraction of the shorter canvas side covered by the receding x axis.
pub const SPACE_DEPTH_FRACTION: f64 = 0.3;

/// Pixel nudge of axis labels away from arrow tips and the origin.
pub const AXIS_LABEL_OFFSET: f64 = 6.0;
