//! Paintability classification.
//!
//! Evaluated strictly on the ORIGINAL fill/stroke captured at
//! normalization time, never on live values, so painting and undoing a
//! region can never change how it classifies.

use pinta_color::Color;
use pinta_dom::ElementKind;

/// Decide whether an element is a user-paintable region.
///
/// Only enclosed white areas outlined in black count as colorable; open
/// strokes, solid ink, and text are protected from accidental fills.
pub fn is_paintable(kind: ElementKind, orig_fill: &Color, orig_stroke: &Color) -> bool {
    // White area with a black outline.
    if orig_fill.is_white() && orig_stroke.is_black() {
        return true;
    }
    // Line or barrier.
    if orig_fill.is_none() && orig_stroke.is_black() {
        return false;
    }
    // Solid black ink.
    if orig_fill.is_black() && orig_stroke.is_black() {
        return false;
    }
    // Black text and labels.
    if kind.is_text_like() && (orig_fill.is_black() || orig_stroke.is_black()) {
        return false;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinta_color::Color;

    fn color(s: &str) -> Color {
        Color::parse(Some(s))
    }

    #[test]
    fn test_white_fill_black_stroke_is_paintable() {
        assert!(is_paintable(ElementKind::Path, &color("white"), &color("#000")));
        assert!(is_paintable(ElementKind::Rect, &color("#ffffff"), &color("black")));
    }

    #[test]
    fn test_barriers_and_ink_are_not() {
        assert!(!is_paintable(ElementKind::Path, &color("none"), &color("#000000")));
        assert!(!is_paintable(ElementKind::Path, &color("black"), &color("black")));
    }

    #[test]
    fn test_text_is_protected() {
        assert!(!is_paintable(ElementKind::Text, &color("black"), &Color::Invalid));
        assert!(!is_paintable(ElementKind::Tspan, &Color::Invalid, &color("#000")));
    }

    #[test]
    fn test_everything_else_defaults_to_not_paintable() {
        assert!(!is_paintable(ElementKind::Path, &color("#ff0000"), &color("#000")));
        assert!(!is_paintable(ElementKind::Path, &color("white"), &Color::Invalid));
        assert!(!is_paintable(ElementKind::Group, &Color::Invalid, &Color::Invalid));
    }
}
