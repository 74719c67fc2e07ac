use surface_svg::prelude::*;
use surface_svg_examples::{init_tracing, write_svg_file};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let field = catalog::eggbox;
    let options = RenderOptions::new().with_color_scheme(ColorScheme::HeightRamp {
        min: -0.2,
        max: 0.2,
    });
    let style = DocumentStyle::new()
        .with_background("white")
        .with_stroke("#202020")
        .with_stroke_width(0.3);

    let renderer = Renderer::try_new(GridSpec::default(), &field)?
        .with_options(options)
        .with_style(style);
    write_svg_file(&renderer, "surface-eggbox-height-ramp.svg")?;
    Ok(())
}
