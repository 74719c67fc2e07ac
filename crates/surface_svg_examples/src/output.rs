use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::Context;
use surface_svg::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Installs a stderr log subscriber filtered by `RUST_LOG` (default `info`).
///
/// Logs never go to stdout, so documents can be piped straight into a file.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Renders into `path`, logging skipped cells at debug level.
pub fn write_svg_file(
    renderer: &Renderer<'_>,
    path: impl AsRef<Path>,
) -> anyhow::Result<RenderStats> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let stats = render_logged(renderer, BufWriter::new(file))
        .with_context(|| format!("writing {}", path.display()))?;
    info!(
        "Wrote '{}': {} polygons, {} cells skipped.",
        path.display(),
        stats.polygons_emitted,
        stats.cells_skipped,
    );
    Ok(stats)
}

/// Renders to standard output.
pub fn write_svg_stdout(renderer: &Renderer<'_>) -> anyhow::Result<RenderStats> {
    let stdout = io::stdout();
    let stats = render_logged(renderer, BufWriter::new(stdout.lock()))
        .context("writing document to stdout")?;
    info!(
        "Wrote {} polygons to stdout, {} cells skipped.",
        stats.polygons_emitted, stats.cells_skipped,
    );
    Ok(stats)
}

fn render_logged<W: io::Write>(
    renderer: &Renderer<'_>,
    out: W,
) -> surface_svg::error::Result<RenderStats> {
    let mut sink = FnSink::new(|event| {
        if let RenderEvent::CellSkipped { cell, z, .. } = event {
            debug!("Skipping cell ({}, {}): height {}.", cell.0, cell.1, z);
        }
    });
    renderer.write_svg_with_events(out, &mut sink)
}
