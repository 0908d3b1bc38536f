mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wheel_mosaic::connect::link_wheels;
use wheel_mosaic::packing::{pack_wheels, PackingConfig};
use wheel_mosaic::palette::Palette;

const TARGET_COUNTS: [usize; 3] = [10, 25, 50];

fn palettes() -> Vec<Palette> {
    (0..6u32)
        .map(|i| {
            let base = (i + 1) * 0x102030;
            Palette::from_hex([base, base + 1, base + 2, base + 3, base + 4])
        })
        .collect()
}

fn packing_benches(c: &mut Criterion) {
    let palettes = palettes();
    let mut group = c.benchmark_group("generation/pack_wheels");

    for &target in &TARGET_COUNTS {
        let config = PackingConfig::new(Vec2::new(1000.0, 1000.0))
            .with_target_count(target)
            .with_radius_range(40.0, 120.0)
            .with_max_attempts(5000);

        let mut rng_est = StdRng::seed_from_u64(0xA11CE ^ target as u64);
        let expected = pack_wheels(&config, &palettes, &mut rng_est).wheels.len();
        group.throughput(common::elements_throughput(expected));

        let mut rng = StdRng::seed_from_u64(0xC0FFEE ^ target as u64);
        group.bench_with_input(BenchmarkId::from_parameter(target), &target, |b, _| {
            b.iter(|| {
                let result = pack_wheels(&config, &palettes, &mut rng);
                black_box(result.wheels.len());
            });
        });
    }

    group.finish();
}

fn linking_benches(c: &mut Criterion) {
    let palettes = palettes();
    let mut group = c.benchmark_group("generation/link_wheels");

    for &target in &TARGET_COUNTS {
        let config = PackingConfig::new(Vec2::new(1000.0, 1000.0))
            .with_target_count(target)
            .with_radius_range(40.0, 120.0)
            .with_max_attempts(5000);
        let mut rng = StdRng::seed_from_u64(0xBEEF ^ target as u64);
        let wheels = pack_wheels(&config, &palettes, &mut rng).wheels;
        group.throughput(common::elements_throughput(wheels.len()));

        group.bench_with_input(BenchmarkId::from_parameter(target), &target, |b, _| {
            b.iter(|| {
                let connectors = link_wheels(&wheels, &palettes, &mut rng);
                black_box(connectors.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = packing_benches, linking_benches
}
criterion_main!(benches);
