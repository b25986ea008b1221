//! Color parsing and canonical representation.

use std::fmt;

/// A normalized CSS color value.
///
/// Canonical form is a 7-character lowercase hex string (`#rrggbb`) or the
/// `none` sentinel. Unrecognized syntax is carried through unchanged so an
/// exotic paint value degrades gracefully instead of failing the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// Missing or empty input.
    Invalid,
    /// The literal `none` paint.
    None,
    /// An opaque sRGB color.
    Hex([u8; 3]),
    /// Unrecognized syntax, kept verbatim.
    Other(String),
}

impl Color {
    /// Normalize any CSS color representation.
    ///
    /// Handles keywords (`black`/`white`), `#rgb`, `#rrggbb`, `#rrggbbaa`
    /// (alpha dropped), and `rgb()`/`rgba()` with components clamped to
    /// [0, 255] and rounded. Anything else becomes [`Color::Other`].
    pub fn parse(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::Invalid;
        };
        let c = raw.trim().to_ascii_lowercase();
        if c.is_empty() {
            return Self::Invalid;
        }
        match c.as_str() {
            "none" => return Self::None,
            "black" => return Self::Hex([0, 0, 0]),
            "white" => return Self::Hex([0xff, 0xff, 0xff]),
            _ => {}
        }
        if let Some(hex) = c.strip_prefix('#') {
            if let Some(rgb) = parse_hex(hex) {
                return Self::Hex(rgb);
            }
            return Self::Other(c);
        }
        if let Some(rgb) = parse_rgb_func(&c) {
            return Self::Hex(rgb);
        }
        Self::Other(c)
    }

    /// True for the `none` sentinel.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// True for canonical black.
    pub fn is_black(&self) -> bool {
        matches!(self, Self::Hex([0, 0, 0]))
    }

    /// True for canonical white.
    pub fn is_white(&self) -> bool {
        matches!(self, Self::Hex([0xff, 0xff, 0xff]))
    }

    /// True when the input was missing or empty.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => Ok(()),
            Self::None => f.write_str("none"),
            Self::Hex([r, g, b]) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Parse the hex digits after `#`. Accepts 3 (nibble expansion), 6, and 8
/// (alpha dropped) digit forms.
fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits: Vec<u8> = hex
        .bytes()
        .map(|b| char::from(b).to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()?;
    match digits.len() {
        3 => Some([
            digits[0] * 0x10 + digits[0],
            digits[1] * 0x10 + digits[1],
            digits[2] * 0x10 + digits[2],
        ]),
        6 | 8 => Some([
            digits[0] * 0x10 + digits[1],
            digits[2] * 0x10 + digits[3],
            digits[4] * 0x10 + digits[5],
        ]),
        _ => None,
    }
}

/// Parse `rgb(...)` / `rgba(...)`, ignoring a fourth alpha component.
fn parse_rgb_func(c: &str) -> Option<[u8; 3]> {
    let body = c
        .strip_prefix("rgba")
        .or_else(|| c.strip_prefix("rgb"))?
        .trim()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    // Missing or malformed components read as 0 so a sloppy rgb() still
    // lands on a usable color instead of falling through verbatim.
    let mut channels = [0u8; 3];
    let mut parts = body.split(',');
    for channel in &mut channels {
        let n: f64 = parts
            .next()
            .and_then(|part| part.trim().parse().ok())
            .unwrap_or(0.0);
        *channel = n.round().clamp(0.0, 255.0) as u8;
    }
    Some(channels)
}
