use std::time::Duration;

use criterion::{Criterion, Throughput};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

/// Grid sizes shared by all render benchmarks.
pub const CELL_COUNTS: [u32; 4] = [25, 50, 100, 200];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// Throughput in corners evaluated, `(cells + 1)^2`.
pub fn corner_throughput(cells: u32) -> Throughput {
    let per_axis = cells as u64 + 1;
    Throughput::Elements(per_axis * per_axis)
}

/// Throughput in cells scanned, at least one.
pub fn cell_throughput(cells: u32) -> Throughput {
    let n = cells as u64;
    Throughput::Elements((n * n).max(1))
}
