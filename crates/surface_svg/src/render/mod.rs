//! Rendering pipeline: scan a grid against a surface and stream the result as SVG.
pub mod events;
pub mod runner;

pub use events::{EventSink, FnSink, MultiSink, RenderEvent, RenderEventKind, VecSink};
pub use runner::{
    render, render_document, render_document_with_events, render_with_options, RenderOptions,
    RenderStats, Renderer,
};
