//! pinta SVG - markup in, markup out
//!
//! Parses page markup into the pinta-dom arena and serializes the live
//! tree back to SVG text for the export collaborator.

mod parser;
mod serialize;

pub use parser::SvgParser;
pub use serialize::{SerializeOptions, write_markup};

/// Parse an SVG string into a document.
pub fn parse(text: &str) -> Result<pinta_dom::SvgDocument, ParseError> {
    SvgParser::new().parse(text)
}

/// SVG parsing error.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid SVG markup: {0}")]
    Markup(String),

    #[error("document has no <svg> root element")]
    MissingSvgRoot,
}
