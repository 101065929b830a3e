//! Arrowhead markers, one per palette color
//!
//! Markers live in the surface's hidden definitions. A [`MarkerRegistry`]
//! is an ordinary value owned by whoever draws, so separate render passes
//! (or tests) never share registration state.

use std::fmt;

use super::svg::{DrawingSurface, Marker, Paint, Path, PathData, SvgNode};
use crate::errors::DrawError;

/// Stroke colors that have an arrowhead marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    Brown,
    Blue,
    Green,
    Red,
    Orange,
    Purple,
    DarkKhaki,
    CornflowerBlue,
    Sienna,
}

impl MarkerColor {
    pub const ALL: [MarkerColor; 9] = [
        MarkerColor::Brown,
        MarkerColor::Blue,
        MarkerColor::Green,
        MarkerColor::Red,
        MarkerColor::Orange,
        MarkerColor::Purple,
        MarkerColor::DarkKhaki,
        MarkerColor::CornflowerBlue,
        MarkerColor::Sienna,
    ];

    /// CSS color name
    pub fn css_name(self) -> &'static str {
        match self {
            MarkerColor::Brown => "brown",
            MarkerColor::Blue => "blue",
            MarkerColor::Green => "green",
            MarkerColor::Red => "red",
            MarkerColor::Orange => "orange",
            MarkerColor::Purple => "purple",
            MarkerColor::DarkKhaki => "darkKhaki",
            MarkerColor::CornflowerBlue => "cornflowerBlue",
            MarkerColor::Sienna => "sienna",
        }
    }

    /// Look up a stroke color. CSS color names are case-insensitive.
    pub fn from_css_name(color: &str) -> Option<Self> {
        let color = color.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.css_name().eq_ignore_ascii_case(color))
    }

    /// Definition id, e.g. `arrow-darkkhaki`
    pub fn marker_id(self) -> String {
        format!("arrow-{}", self.css_name().to_ascii_lowercase())
    }

    /// Value for a `marker-end` attribute
    pub fn marker_ref(self) -> String {
        format!("url(#{})", self.marker_id())
    }

    fn definition(self) -> Marker {
        Marker {
            id: self.marker_id(),
            view_box: "0 0 10 10".to_string(),
            ref_x: 10.0,
            ref_y: 5.0,
            marker_width: 6.0,
            marker_height: 6.0,
            orient: "auto-start-reverse".to_string(),
            children: vec![SvgNode::from(Path {
                d: PathData::new().m(0.0, 0.0).l(10.0, 5.0).l(0.0, 10.0).z(),
                paint: Paint {
                    fill: Some(self.css_name().to_string()),
                    ..Paint::default()
                },
            })],
        }
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// What to do with `show_arrow` on a color outside the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerPolicy {
    /// Draw the line without an arrowhead.
    #[default]
    Lenient,
    /// Fail with [`DrawError::UnsupportedMarkerColor`].
    Strict,
}

/// Idempotent registration of the arrowhead markers on one surface
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    registered: bool,
    policy: MarkerPolicy,
}

impl MarkerRegistry {
    pub fn new(policy: MarkerPolicy) -> Self {
        Self {
            registered: false,
            policy,
        }
    }

    pub fn policy(&self) -> MarkerPolicy {
        self.policy
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Define every palette marker on `surface`. Only the first call does
    /// anything; markers the surface already has are not duplicated.
    pub fn ensure_registered<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.registered {
            return;
        }
        for color in MarkerColor::ALL {
            if !surface.has_definition(&color.marker_id()) {
                surface.define(SvgNode::from(color.definition()));
            }
        }
        crate::log::debug!(count = MarkerColor::ALL.len(), "registered arrow markers");
        self.registered = true;
    }

    /// Marker reference for an arrow in `color`.
    ///
    /// Returns `Ok(None)` for colors outside the palette under the lenient
    /// policy. Does not register anything; callers register only once the
    /// whole shape is known to be valid.
    pub fn resolve(&self, color: &str) -> Result<Option<MarkerColor>, DrawError> {
        match (MarkerColor::from_css_name(color), self.policy) {
            (Some(c), _) => Ok(Some(c)),
            (None, MarkerPolicy::Lenient) => {
                crate::log::debug!(color, "no arrowhead marker for color");
                Ok(None)
            }
            (None, MarkerPolicy::Strict) => Err(DrawError::UnsupportedMarkerColor {
                color: color.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::svg::SvgDocument;
    use crate::types::Canvas;

    fn doc() -> SvgDocument {
        SvgDocument::new(Canvas::try_new(100.0, 100.0).unwrap())
    }

    #[test]
    fn palette_lookup_ignores_case() {
        assert_eq!(MarkerColor::from_css_name("darkkhaki"), Some(MarkerColor::DarkKhaki));
        assert_eq!(
            MarkerColor::from_css_name("CornflowerBlue"),
            Some(MarkerColor::CornflowerBlue)
        );
        assert_eq!(MarkerColor::from_css_name("teal"), None);
        assert_eq!(MarkerColor::Sienna.marker_ref(), "url(#arrow-sienna)");
    }

    #[test]
    fn registration_is_idempotent() {
        let mut surface = doc();
        let mut registry = MarkerRegistry::default();
        registry.ensure_registered(&mut surface);
        registry.ensure_registered(&mut surface);
        assert_eq!(surface.definitions().len(), MarkerColor::ALL.len());
        assert!(surface.has_definition("arrow-brown"));
    }

    #[test]
    fn registries_are_isolated() {
        let mut first = doc();
        let mut second = doc();
        let mut a = MarkerRegistry::default();
        let mut b = MarkerRegistry::default();
        a.ensure_registered(&mut first);
        assert!(a.is_registered());
        assert!(!b.is_registered());
        assert!(second.definitions().is_empty());
        b.ensure_registered(&mut second);
        assert_eq!(second.definitions().len(), MarkerColor::ALL.len());
    }

    #[test]
    fn fresh_registry_does_not_duplicate_existing_markers() {
        let mut surface = doc();
        MarkerRegistry::default().ensure_registered(&mut surface);
        MarkerRegistry::default().ensure_registered(&mut surface);
        assert_eq!(surface.definitions().len(), MarkerColor::ALL.len());
    }

    #[test]
    fn policy_decides_unknown_colors() {
        let lenient = MarkerRegistry::new(MarkerPolicy::Lenient);
        assert_eq!(lenient.resolve("teal"), Ok(None));
        assert_eq!(lenient.resolve("red"), Ok(Some(MarkerColor::Red)));

        let strict = MarkerRegistry::new(MarkerPolicy::Strict);
        assert_eq!(
            strict.resolve("teal"),
            Err(DrawError::UnsupportedMarkerColor {
                color: "teal".to_string()
            })
        );
    }
}
