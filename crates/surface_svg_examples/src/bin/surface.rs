use anyhow::anyhow;
use surface_svg::prelude::*;
use surface_svg_examples::{init_tracing, write_svg_stdout};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let name = std::env::args().nth(1).unwrap_or_else(|| "ripple".to_string());

    let registry = SurfaceRegistry::with_builtins();
    let field = registry.get(&name).ok_or_else(|| {
        anyhow!(
            "unknown surface '{}'; available: {}",
            name,
            registry.names().join(", ")
        )
    })?;

    let renderer = Renderer::try_new(GridSpec::default(), field.as_ref())?;
    write_svg_stdout(&renderer)?;
    Ok(())
}
