mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use surface_svg::mesh::{CornerEvaluator, GridSpec};
use surface_svg::surface::catalog;
use surface_svg::svg::ColorScheme;

fn corner_grid_benches(c: &mut Criterion) {
    for (name, field) in catalog::builtins() {
        let mut group = c.benchmark_group(format!("corner/{name}"));

        for &cells in &common::CELL_COUNTS {
            let spec = GridSpec::default().with_cells(cells);
            group.throughput(common::corner_throughput(cells));

            group.bench_with_input(BenchmarkId::from_parameter(cells), &cells, |b, &n| {
                let eval = CornerEvaluator::new(&spec, &field, ColorScheme::Legacy);
                b.iter(|| {
                    let mut valid = 0usize;
                    for i in 0..=n {
                        for j in 0..=n {
                            if eval.corner(i, j).is_valid() {
                                valid += 1;
                            }
                        }
                    }
                    black_box(valid);
                });
            });
        }

        group.finish();
    }
}

fn color_scheme_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("corner/color_scheme");
    let spec = GridSpec::default();
    let schemes = [
        ("legacy", ColorScheme::Legacy),
        (
            "height_ramp",
            ColorScheme::HeightRamp {
                min: -0.1,
                max: 0.1,
            },
        ),
    ];
    let field = catalog::ripple;

    for (name, scheme) in schemes {
        group.throughput(common::corner_throughput(100));
        group.bench_function(name, |b| {
            let eval = CornerEvaluator::new(&spec, &field, scheme);
            b.iter(|| {
                for i in 0..=100 {
                    for j in 0..=100 {
                        black_box(eval.corner(i, j).color());
                    }
                }
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = corner_grid_benches, color_scheme_benches
}
criterion_main!(benches);
