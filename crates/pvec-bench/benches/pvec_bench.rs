//! Benchmarks for pvec operations.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use pvec_io::{format_vector, parse_color, parse_vector};
use pvec_math::{cross_product, dot_product, lerp, normalize, Mat4, Vec3, Vec4, Vector};

fn sample_vectors(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let f = i as f32;
            Vec3::new([f.sin() + 1.5, f.cos() - 2.0, f * 0.01 + 0.5])
        })
        .collect()
}

/// Benchmark vector arithmetic against glam.
fn bench_vector_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector");

    for size in [1000, 10000].iter() {
        let vectors = sample_vectors(*size);
        let glam_vectors: Vec<glam::Vec3> = vectors.iter().map(|&v| v.into()).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("normalize", size), &vectors, |b, v| {
            b.iter(|| v.iter().map(|&x| normalize(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("glam_normalize", size), &glam_vectors, |b, v| {
            b.iter(|| v.iter().map(|&x| black_box(x).normalize()).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("dot_cross", size), &vectors, |b, v| {
            b.iter(|| {
                v.windows(2)
                    .map(|w| dot_product(cross_product(w[0], w[1]), black_box(w[0])))
                    .sum::<f32>()
            })
        });

        group.bench_with_input(BenchmarkId::new("lerp", size), &vectors, |b, v| {
            b.iter(|| v.windows(2).map(|w| lerp(w[0], w[1], black_box(0.25f32))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark matrix row access.
fn bench_matrix(c: &mut Criterion) {
    let m = Mat4::from_fn(|j, i| (j * 4 + i) as f32);

    c.bench_function("matrix_row_sum", |b| {
        b.iter(|| {
            let m = black_box(&m);
            (0..4).map(|j| m.row(j).fold(|a, b| a + b)).sum::<f32>()
        })
    });
}

/// Benchmark text parsing and formatting.
fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    let texts: Vec<String> = sample_vectors(1000).iter().map(format_vector).collect();
    group.throughput(Throughput::Elements(texts.len() as u64));

    group.bench_function("format_vec3", |b| {
        let vectors = sample_vectors(1000);
        b.iter(|| vectors.iter().map(|v| format_vector(black_box(v))).collect::<Vec<_>>())
    });

    group.bench_function("parse_vec3", |b| {
        b.iter(|| {
            texts
                .iter()
                .filter_map(|t| parse_vector::<f32, 3>(black_box(t)).ok())
                .count()
        })
    });

    let colors = ["red", "0xFF0088", "0.5 0.25 1 1", "magenta", "0x11223344", "zero"];
    group.bench_function("parse_color_rgba", |b| {
        b.iter(|| {
            colors
                .iter()
                .filter_map(|t| parse_color::<Vec4>(black_box(t)).ok())
                .count()
        })
    });

    group.bench_function("parse_color_bytes", |b| {
        b.iter(|| {
            colors
                .iter()
                .filter_map(|t| parse_color::<Vector<u8, 4>>(black_box(t)).ok())
                .count()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_vector_ops, bench_matrix, bench_text);
criterion_main!(benches);
