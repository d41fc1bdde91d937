use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use resconf_kernel::prelude::*;
use std::hint::black_box;

/// A pool shaped like a real `res/` tree: locales crossed with densities, orientations
/// and API levels.
fn pool(size: usize) -> Vec<Configuration> {
    let languages = ["", "en", "de", "fr", "ja", "pt"];
    let densities = [
        Density::DEFAULT,
        Density::MEDIUM,
        Density::HIGH,
        Density::XHIGH,
        Density::XXHIGH,
        Density::ANY,
    ];
    let orientations = [Orientation::Any, Orientation::Portrait, Orientation::Landscape];
    let sdks = [0u16, 21, 26, 30, 34];

    (0..size)
        .map(|i| {
            Configuration::new()
                .with_language(languages[i % languages.len()])
                .with_density(densities[(i / 3) % densities.len()])
                .with_orientation(orientations[(i / 7) % orientations.len()])
                .with_sdk_version(sdks[(i / 11) % sdks.len()])
        })
        .collect()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");

    let requested = Configuration::new()
        .with_language("de")
        .with_country("AT")
        .with_orientation(Orientation::Portrait)
        .with_density(Density::from_raw(420))
        .with_sdk_version(33)
        .with_screen_width_dp(411);

    for size in [16usize, 128, 1024] {
        let candidates = pool(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("select_best", size), &candidates, |b, pool| {
            b.iter(|| select_best(black_box(pool), black_box(&requested)));
        });

        group.bench_with_input(BenchmarkId::new("rank", size), &candidates, |b, pool| {
            b.iter(|| rank(black_box(pool), black_box(&requested)).len());
        });
    }

    group.finish();
}

fn bench_diff(c: &mut Criterion) {
    let a = pool(64);
    let b: Vec<Configuration> = a.iter().rev().copied().collect();

    c.bench_function("diff_pairs", |bench| {
        bench.iter(|| a.iter().zip(&b).map(|(x, y)| diff(x, y).bits()).fold(0, |acc, m| acc | m));
    });
}

criterion_group!(benches, bench_select, bench_diff);
criterion_main!(benches);
