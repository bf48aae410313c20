//! Criterion micro-benchmarks for the reduction-sum kernels.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use veclab_bench::{sum_kernel_catalogue, sum_profile, sum_profile32, SIZE};
use veclab_kernels::{sum_lanes_accumulate, sum_scalar};

fn bench_sum_catalogue(c: &mut Criterion) {
    let profile = sum_profile(SIZE);
    for (name, kernel) in sum_kernel_catalogue() {
        c.bench_function(name, |b| {
            b.iter(|| black_box(kernel(&profile).unwrap()));
        });
    }
}

fn bench_sum_f32(c: &mut Criterion) {
    let profile = sum_profile32(SIZE);
    c.bench_function("sum_scalar_array_f32", |b| {
        b.iter(|| black_box(sum_scalar(&profile.input_array)));
    });
    c.bench_function("sum_lanes_accumulate_array_f32", |b| {
        b.iter(|| black_box(sum_lanes_accumulate(&profile.input_array).unwrap()));
    });
    c.bench_function("sum_scalar_segment_f32", |b| {
        b.iter(|| black_box(sum_scalar(&profile.input_segment)));
    });
    c.bench_function("sum_lanes_accumulate_segment_f32", |b| {
        b.iter(|| black_box(sum_lanes_accumulate(&profile.input_segment).unwrap()));
    });
}

criterion_group!(benches, bench_sum_catalogue, bench_sum_f32);
criterion_main!(benches);
