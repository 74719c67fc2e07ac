//! High-level entry points for rendering a surface into an SVG document.
use std::io::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;
use crate::mesh::{CellOutcome, CellScan, CornerEvaluator, FillCorner, GridSpec, Polygon};
use crate::render::events::{EventSink, RenderEvent, RenderEventKind};
use crate::surface::HeightField;
use crate::svg::{ColorScheme, DocumentStyle, SvgWriter};

/// Options controlling how corner heights become fill colors.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderOptions {
    /// Height-to-color mapping applied to every corner.
    pub color_scheme: ColorScheme,
    /// Which corner's color fills the polygon.
    pub fill_corner: FillCorner,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color scheme.
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    /// Sets the fill corner policy.
    pub fn with_fill_corner(mut self, fill_corner: FillCorner) -> Self {
        self.fill_corner = fill_corner;
        self
    }

    /// Validates the options, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.color_scheme.validate()
    }
}

/// Totals for one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Cells scanned, `cells * cells`.
    pub cells_visited: usize,
    /// Polygons written to the document.
    pub polygons_emitted: usize,
    /// Cells left out because a corner height was not finite.
    pub cells_skipped: usize,
}

/// Lazily renders `field` over `spec` with default options, yielding polygons in
/// drawing order.
pub fn render<'a>(
    spec: &'a GridSpec,
    field: &'a dyn HeightField,
) -> impl Iterator<Item = Polygon> + 'a {
    render_with_options(spec, field, RenderOptions::default()).polygons()
}

/// Lazily scans every cell of `spec` against `field`, including skipped cells.
pub fn render_with_options<'a>(
    spec: &'a GridSpec,
    field: &'a dyn HeightField,
    options: RenderOptions,
) -> CellScan<'a> {
    let evaluator = CornerEvaluator::new(spec, field, options.color_scheme);
    CellScan::new(evaluator, options.fill_corner)
}

/// Renders `field` over `spec` and streams the document into `out`.
pub fn render_document<W: Write>(
    spec: &GridSpec,
    field: &dyn HeightField,
    options: RenderOptions,
    style: &DocumentStyle,
    out: W,
    sink: Option<&mut dyn EventSink>,
) -> Result<RenderStats> {
    if let Some(s) = sink {
        render_document_with_events(spec, field, options, style, out, s)
    } else {
        render_document_with_events(spec, field, options, style, out, &mut ())
    }
}

/// Like [`render_document`], reporting progress to `sink`.
///
/// Configuration is validated before anything is written. Write failures abort the
/// render and are returned as [`crate::error::Error::Io`].
pub fn render_document_with_events<W: Write>(
    spec: &GridSpec,
    field: &dyn HeightField,
    options: RenderOptions,
    style: &DocumentStyle,
    out: W,
    sink: &mut dyn EventSink,
) -> Result<RenderStats> {
    spec.validate()?;
    options.validate()?;
    style.validate()?;

    let cell_count = spec.cell_count();
    debug!(
        "Rendering {}x{} cells onto a {}x{} canvas.",
        spec.cells(),
        spec.cells(),
        spec.width(),
        spec.height(),
    );
    if sink.wants(RenderEventKind::RenderStarted) {
        sink.send(RenderEvent::RenderStarted {
            spec: *spec,
            cell_count,
        });
    }

    let mut writer = SvgWriter::begin(out, spec.width(), spec.height(), style)?;
    let mut stats = RenderStats::default();
    for outcome in render_with_options(spec, field, options) {
        stats.cells_visited += 1;
        match outcome {
            CellOutcome::Drawn(polygon) => {
                writer.write_polygon(&polygon)?;
                stats.polygons_emitted += 1;
            }
            CellOutcome::Skipped { cell, corner, z } => {
                trace!(
                    "Cell ({}, {}) skipped: height at corner ({}, {}) is {}.",
                    cell.0,
                    cell.1,
                    corner.0,
                    corner.1,
                    z,
                );
                stats.cells_skipped += 1;
                if sink.wants(RenderEventKind::CellSkipped) {
                    sink.send(RenderEvent::CellSkipped { cell, corner, z });
                }
            }
        }
    }
    writer.finish()?;

    debug!(
        "Rendered {} polygons; skipped {} of {} cells.",
        stats.polygons_emitted, stats.cells_skipped, stats.cells_visited,
    );
    if sink.wants(RenderEventKind::RenderFinished) {
        sink.send(RenderEvent::RenderFinished { stats });
    }
    Ok(stats)
}

/// Renders one surface with a fixed grid, options, and style.
pub struct Renderer<'a> {
    /// Grid and projection configuration.
    pub spec: GridSpec,
    /// Coloring options.
    pub options: RenderOptions,
    /// Document presentation.
    pub style: DocumentStyle,
    field: &'a dyn HeightField,
}

impl<'a> Renderer<'a> {
    pub fn try_new(spec: GridSpec, field: &'a dyn HeightField) -> Result<Self> {
        spec.validate()?;
        Ok(Self::new(spec, field))
    }

    pub fn new(spec: GridSpec, field: &'a dyn HeightField) -> Self {
        debug_assert!(spec.validate().is_ok(), "grid spec must be valid");
        Self {
            spec,
            options: RenderOptions::default(),
            style: DocumentStyle::default(),
            field,
        }
    }

    /// Sets the coloring options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the document style.
    pub fn with_style(mut self, style: DocumentStyle) -> Self {
        self.style = style;
        self
    }

    /// Scans every cell, including skipped ones.
    pub fn cells(&self) -> CellScan<'_> {
        render_with_options(&self.spec, self.field, self.options)
    }

    /// Yields the drawn polygons in drawing order.
    pub fn polygons(&self) -> impl Iterator<Item = Polygon> + '_ {
        self.cells().polygons()
    }

    /// Writes the document into `out`.
    pub fn write_svg<W: Write>(&self, out: W) -> Result<RenderStats> {
        render_document(&self.spec, self.field, self.options, &self.style, out, None)
    }

    pub fn write_svg_with_events<W: Write>(
        &self,
        out: W,
        sink: &mut dyn EventSink,
    ) -> Result<RenderStats> {
        render_document_with_events(&self.spec, self.field, self.options, &self.style, out, sink)
    }
}
