use criterion::{criterion_group, criterion_main, Criterion, black_box};

use glam::{Mat4, Vec3};

use ivygen::core::rng::GrowthRng;
use ivygen::growth::{GrowthConfig, GrowthEngine, GrowthPath};
use ivygen::math::Ray;
use ivygen::mesh::{build_strip, combine};
use ivygen::surface::PlaneSurface;

fn seed_down() -> Ray {
    Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y)
}

fn grow_path(segment_count: u32, seed: u64) -> GrowthPath {
    let surface = PlaneSurface::new(0.0);
    let config = GrowthConfig { segment_count, ..Default::default() };
    let engine = GrowthEngine::new(&surface, &config);
    let mut rng = GrowthRng::new(seed);
    engine.grow(seed_down(), &mut rng)
}

fn bench_grow_branch_30(c: &mut Criterion) {
    let surface = PlaneSurface::new(0.0);
    let config = GrowthConfig::default();

    c.bench_function("grow_branch_plane_30", |b| {
        let mut rng = GrowthRng::new(12345);
        b.iter(|| {
            let engine = GrowthEngine::new(black_box(&surface), black_box(&config));
            engine.grow(black_box(seed_down()), &mut rng)
        });
    });
}

fn bench_grow_branch_200(c: &mut Criterion) {
    let surface = PlaneSurface::new(0.0);
    let config = GrowthConfig { segment_count: 200, ..Default::default() };

    c.bench_function("grow_branch_plane_200", |b| {
        let mut rng = GrowthRng::new(12345);
        b.iter(|| {
            let engine = GrowthEngine::new(black_box(&surface), black_box(&config));
            engine.grow(black_box(seed_down()), &mut rng)
        });
    });
}

fn bench_build_strip_200(c: &mut Criterion) {
    let path = grow_path(200, 7);

    c.bench_function("build_strip_200", |b| {
        b.iter(|| build_strip(black_box(&path), black_box(0.4)));
    });
}

fn bench_combine_32_strips(c: &mut Criterion) {
    let meshes: Vec<_> = (0..32)
        .map(|i| build_strip(&grow_path(30, i as u64), 0.4))
        .collect();
    let parts: Vec<_> = meshes
        .iter()
        .enumerate()
        .map(|(i, m)| (m, Mat4::from_translation(Vec3::new(i as f32 * 2.0, 0.0, 0.0))))
        .collect();

    c.bench_function("combine_32_strips", |b| {
        b.iter(|| combine(black_box(&parts)));
    });
}

criterion_group!(
    benches,
    bench_grow_branch_30,
    bench_grow_branch_200,
    bench_build_strip_200,
    bench_combine_32_strips,
);
criterion_main!(benches);
