//! Streaming SVG document writer.
//!
//! Documents are written incrementally: [`SvgWriter::begin`] emits the root element,
//! each [`SvgWriter::write_polygon`] emits one `<polygon>` line, and [`SvgWriter::finish`]
//! closes the root and flushes. Memory use does not grow with the number of polygons.
//! Points are written as-is; nothing is clipped to the canvas.
use std::io::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mesh::Polygon;
use crate::svg::SVG_NAMESPACE;

/// Canvas-wide presentation attributes written on the root element.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DocumentStyle {
    /// Canvas background color.
    pub background: String,
    /// Outline color of every polygon.
    pub stroke: String,
    /// Default fill, overridden per polygon.
    pub fill: String,
    /// Outline width in device units.
    pub stroke_width: f64,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            background: "black".into(),
            stroke: "#00FF00".into(),
            fill: "black".into(),
            stroke_width: 0.7,
        }
    }
}

impl DocumentStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color.
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Sets the outline color.
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Sets the default fill.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Validates the style, returning an error if any value would break the markup.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("background", &self.background),
            ("stroke", &self.stroke),
            ("fill", &self.fill),
        ] {
            if value.is_empty() {
                return Err(Error::InvalidConfig(format!("{name} must not be empty")));
            }
            if value.contains(['\'', '"', '<', '>', '&', ';']) {
                return Err(Error::InvalidConfig(format!(
                    "{name} contains a character not allowed in a style value: {value:?}"
                )));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(Error::InvalidConfig(
                "stroke_width must be finite and >= 0".into(),
            ));
        }
        Ok(())
    }
}

/// Incremental writer for one SVG document.
pub struct SvgWriter<W: Write> {
    out: W,
    polygons_written: usize,
}

impl<W: Write> SvgWriter<W> {
    /// Writes the root element header and returns a writer ready for polygons.
    pub fn begin(mut out: W, width: u32, height: u32, style: &DocumentStyle) -> Result<Self> {
        writeln!(
            out,
            "<svg xmlns='{}' style='background-color: {}; stroke: {}; fill: {}; stroke-width: {}' width='{}' height='{}'>",
            SVG_NAMESPACE,
            style.background,
            style.stroke,
            style.fill,
            style.stroke_width,
            width,
            height,
        )?;
        Ok(Self {
            out,
            polygons_written: 0,
        })
    }

    /// Writes one quadrilateral.
    pub fn write_polygon(&mut self, polygon: &Polygon) -> Result<()> {
        let [a, b, c, d] = polygon.points;
        writeln!(
            self.out,
            "<polygon points='{},{} {},{} {},{} {},{}' style='fill: {}'/>",
            a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y, polygon.fill,
        )?;
        self.polygons_written += 1;
        Ok(())
    }

    /// Number of polygons written so far.
    pub fn polygons_written(&self) -> usize {
        self.polygons_written
    }

    /// Closes the root element, flushes, and hands back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        writeln!(self.out, "</svg>")?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Writes a complete document holding `polygons`, returning how many were written.
pub fn write_document<W, I>(
    polygons: I,
    width: u32,
    height: u32,
    style: &DocumentStyle,
    out: W,
) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Polygon>,
{
    let mut writer = SvgWriter::begin(out, width, height, style)?;
    for polygon in polygons {
        writer.write_polygon(&polygon)?;
    }
    let count = writer.polygons_written();
    writer.finish()?;
    Ok(count)
}
