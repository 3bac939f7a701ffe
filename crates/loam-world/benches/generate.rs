use criterion::{Criterion, black_box, criterion_group, criterion_main};

use loam_world::{Generators, WorldGenParams};

fn bench_terrain_window(c: &mut Criterion) {
    let g = Generators::new(&WorldGenParams::default());
    let mut group = c.benchmark_group("terrain");
    // One full window at the default viewport and margin.
    group.bench_function("window_1424px", |b| {
        b.iter(|| black_box(g.terrain.generate(-200, 1224)))
    });
    group.bench_function("slide_strip_120px", |b| {
        b.iter(|| black_box(g.terrain.generate(1224, 1344)))
    });
    group.finish();
}

fn bench_flora_window(c: &mut Criterion) {
    let g = Generators::new(&WorldGenParams::default());
    let mut group = c.benchmark_group("flora");
    group.bench_function("window_1424px", |b| {
        b.iter(|| black_box(g.flora.generate(-200, 1224)))
    });
    group.bench_function("wide_30k_px", |b| {
        b.iter(|| black_box(g.flora.generate(0, 30_000)))
    });
    group.finish();
}

criterion_group!(benches, bench_terrain_window, bench_flora_window);
criterion_main!(benches);
