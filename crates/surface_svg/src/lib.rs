#![forbid(unsafe_code)]
//! surface_svg: isometric SVG renderings of height functions `z = f(x, y)`.
//!
//! Modules:
//! - surface: the [`surface::HeightField`] trait, built-in surfaces, and a named registry
//! - mesh: grid configuration, isometric projection, corner evaluation, cell scanning
//! - svg: height-to-color schemes and the streaming document writer
//! - render: one-call rendering entry points, statistics, and events
//!
//! Cells whose corners hit a non-finite height are left out of the drawing; every
//! other cell becomes one `<polygon>`, emitted back to front.
pub mod error;
pub mod mesh;
pub mod render;
pub mod surface;
pub mod svg;

/// Convenient re-exports for common types. Import with `use surface_svg::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::mesh::{
        CellOutcome, CellScan, Corner, CornerEvaluator, FillCorner, GridParams, GridSpec, Polygon,
    };
    pub use crate::render::{
        render, render_document, render_document_with_events, render_with_options, EventSink,
        FnSink, MultiSink, RenderEvent, RenderEventKind, RenderOptions, RenderStats, Renderer,
        VecSink,
    };
    pub use crate::surface::{catalog, HeightField, SurfaceRegistry};
    pub use crate::svg::{
        legacy_color, write_document, ColorScheme, DocumentStyle, HexColor, SvgWriter,
    };
}
