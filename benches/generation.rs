//! Performance measurement for complete grid generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wavegrid::rules::presets;
use wavegrid::solver::{GenerateOptions, generate};

/// Measures a full solve of the islands rule set on a 32x32 plane
fn bench_islands_32x32(c: &mut Criterion) {
    c.bench_function("islands_32x32", |b| {
        let Ok(preset) = presets::sparse_islands::<2>() else {
            return;
        };
        let options = GenerateOptions::new([32, 32], false, 12345, 50);
        b.iter(|| {
            let grid = generate(&preset.patterns, &preset.table, &options);
            black_box(grid.is_ok());
        });
    });
}

/// Measures a banded 3D solve of the strata rule set
fn bench_strata_8x16x16(c: &mut Criterion) {
    c.bench_function("strata_8x16x16", |b| {
        let Ok(preset) = presets::strata(8) else {
            return;
        };
        let mut options = GenerateOptions::new([8, 16, 16], false, 12345, 50);
        options.bands.clone_from(&preset.bands);
        b.iter(|| {
            let grid = generate(&preset.patterns, &preset.table, &options);
            black_box(grid.is_ok());
        });
    });
}

criterion_group!(benches, bench_islands_32x32, bench_strata_8x16x16);
criterion_main!(benches);
