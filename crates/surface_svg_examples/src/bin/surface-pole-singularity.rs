use surface_svg::prelude::*;
use surface_svg_examples::{init_tracing, write_svg_file};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let spec = GridSpec::default().with_zscale(20.0);
    let field = catalog::pole;
    let renderer = Renderer::try_new(spec, &field)?;

    let stats = write_svg_file(&renderer, "surface-pole-singularity.svg")?;
    anyhow::ensure!(
        stats.cells_skipped == 4,
        "expected the four cells around the pole to be skipped, got {}",
        stats.cells_skipped
    );
    Ok(())
}
