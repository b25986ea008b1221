//! pinta Color - CSS color normalization
//!
//! Page artwork arrives with fills and strokes written every way CSS
//! allows: keywords, short hex, hex with alpha, `rgb()`/`rgba()`. The
//! classifier and the progress tracker both compare colors, so everything
//! is funneled through one canonical form first.

mod parse;

pub use parse::Color;

/// Canonical black, `#000000`.
pub const BLACK: Color = Color::Hex([0, 0, 0]);

/// Canonical white, `#ffffff`.
pub const WHITE: Color = Color::Hex([0xff, 0xff, 0xff]);

/// Normalize a raw attribute value, treating a missing attribute as
/// [`Color::Invalid`].
pub fn normalize(value: Option<&str>) -> Color {
    Color::parse(value)
}

/// True when the value normalizes to the `none` sentinel.
pub fn is_none(value: Option<&str>) -> bool {
    Color::parse(value).is_none()
}

/// True when the value normalizes to canonical black.
pub fn is_black(value: Option<&str>) -> bool {
    Color::parse(value).is_black()
}

/// True when the value normalizes to canonical white.
pub fn is_white(value: Option<&str>) -> bool {
    Color::parse(value).is_white()
}

/// True when the value reads as "not colored": absent, empty, `none`, or
/// white. This is the single blank-value rule used by progress counting.
pub fn is_blank(value: Option<&str>) -> bool {
    let color = Color::parse(value);
    matches!(color, Color::Invalid | Color::None) || color.is_white()
}
