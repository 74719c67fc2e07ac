//! SVG output: fill colors and the streaming document writer.
pub mod color;
pub mod document;

pub use color::{legacy_color, ColorScheme, HexColor};
pub use document::{write_document, DocumentStyle, SvgWriter};

/// XML namespace declared on the root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
