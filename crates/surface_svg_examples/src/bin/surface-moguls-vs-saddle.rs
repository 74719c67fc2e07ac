use std::f64::consts::FRAC_PI_4;

use surface_svg::prelude::*;
use surface_svg_examples::{init_tracing, write_svg_file};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let spec = GridSpec::default().with_cells(60).with_angle(FRAC_PI_4);
    let options = RenderOptions::new()
        .with_color_scheme(ColorScheme::HeightRamp {
            min: -0.15,
            max: 0.15,
        })
        .with_fill_corner(FillCorner::First);

    let surfaces: [(&str, fn(f64, f64) -> f64); 2] =
        [("moguls", catalog::moguls), ("saddle", catalog::saddle)];
    for (name, field) in surfaces {
        let renderer = Renderer::try_new(spec, &field)?.with_options(options);
        write_svg_file(&renderer, format!("surface-{name}-45deg.svg"))?;
    }
    Ok(())
}
