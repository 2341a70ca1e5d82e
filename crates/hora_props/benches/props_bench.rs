use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hora_props::{ALL_SIGNS, Sign, Tiling, registry, sign, tile};

fn tile_bench(c: &mut Criterion) {
    let base = [0u8, 1, 2];
    let mut group = c.benchmark_group("tile");
    group.bench_function("round_robin_12", |b| {
        b.iter(|| tile(black_box(&base), 12, Tiling::RoundRobin))
    });
    group.bench_function("block_12", |b| {
        b.iter(|| tile(black_box(&base), 12, Tiling::Block))
    });
    group.finish();
}

fn lookup_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    group.bench_function("sign_properties_all", |b| {
        b.iter(|| ALL_SIGNS.map(|s| sign::properties(black_box(s))))
    });
    group.bench_function("sign_mode_typed", |b| {
        b.iter(|| sign::mode(black_box(Sign::Scorpio)))
    });
    group.bench_function("registry_element_by_name", |b| {
        b.iter(|| registry::element(black_box("Saturn")))
    });
    group.bench_function("registry_nakshatra_ruler", |b| {
        b.iter(|| registry::nakshatra_ruler(black_box("Uttara Bhadrapada")))
    });
    group.finish();
}

criterion_group!(benches, tile_bench, lookup_bench);
criterion_main!(benches);
