//! Benchmark suite for the `lqt` codec
//!
//! Measures the pyramid transform in isolation and the full
//! encode/decode pipeline end to end, to help identify hot paths in the
//! bit-plane coder and the scan driver.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lqt_benches::{generate_gradient_rgb, generate_noise_rgb, sizes};
use lqt_types::codec::Pyramid;
use lqt_types::image;
use std::hint::black_box;

/// Synthetic `side x side` leaf buffer with enough low-order structure
/// to exercise every level of the transform, without depending on a
/// real image.
fn gradient_leaves(depth: usize) -> Vec<i32> {
	let side = 1usize << depth;
	(0..side * side)
		.map(|i| {
			let (x, y) = (i % side, i / side);
			i32::try_from((x ^ y) & 255).unwrap() - 128
		})
		.collect()
}

/// Benchmarks the forward pyramid transform in isolation, across a
/// range of depths.
fn bench_pyramid_forward(c: &mut Criterion) {
	let mut group = c.benchmark_group("pyramid_forward");

	for depth in [5usize, 7, 8, 9] {
		let side = 1usize << depth;
		let leaves = gradient_leaves(depth);

		group.throughput(Throughput::Elements((side * side) as u64));
		group.bench_with_input(BenchmarkId::new("depth", depth), &leaves, |b, leaves| {
			b.iter(|| black_box(Pyramid::forward(leaves, depth)));
		});
	}

	group.finish();
}

/// Benchmarks the inverse pyramid transform in isolation.
fn bench_pyramid_inverse(c: &mut Criterion) {
	let mut group = c.benchmark_group("pyramid_inverse");

	for depth in [5usize, 7, 8, 9] {
		let side = 1usize << depth;
		let leaves = gradient_leaves(depth);
		let pyramid = Pyramid::forward(&leaves, depth);

		group.throughput(Throughput::Elements((side * side) as u64));
		group.bench_with_input(BenchmarkId::new("depth", depth), &pyramid, |b, pyramid| {
			b.iter(|| black_box(pyramid.clone().inverse()));
		});
	}

	group.finish();
}

/// Benchmarks full encode of a gradient image (compresses well, exercises
/// the early-significance fast path) at several sizes.
fn bench_encode_gradient(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_gradient");

	for (name, (width, height)) in [("tiny", sizes::TINY), ("small", sizes::SMALL), ("medium", sizes::MEDIUM)] {
		let rgb = generate_gradient_rgb(width, height);
		group.throughput(Throughput::Bytes(rgb.len() as u64));
		group.bench_function(BenchmarkId::new("encode", name), |b| {
			b.iter(|| black_box(image::encode(width, height, &rgb, 1, None).unwrap()));
		});
	}

	group.finish();
}

/// Benchmarks full encode of incompressible noise (worst case for the
/// bit-plane coder's throughput).
fn bench_encode_noise(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_noise");

	for (name, (width, height)) in [("tiny", sizes::TINY), ("small", sizes::SMALL)] {
		let rgb = generate_noise_rgb(width, height);
		group.throughput(Throughput::Bytes(rgb.len() as u64));
		group.bench_function(BenchmarkId::new("encode", name), |b| {
			b.iter(|| black_box(image::encode(width, height, &rgb, 0, None).unwrap()));
		});
	}

	group.finish();
}

/// Benchmarks full decode of a previously encoded gradient image.
fn bench_decode_gradient(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_gradient");

	for (name, (width, height)) in [("tiny", sizes::TINY), ("small", sizes::SMALL), ("medium", sizes::MEDIUM)] {
		let rgb = generate_gradient_rgb(width, height);
		let data = image::encode(width, height, &rgb, 1, None).unwrap();

		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_function(BenchmarkId::new("decode", name), |b| {
			b.iter(|| black_box(image::decode(&data).unwrap()));
		});
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_pyramid_forward,
	bench_pyramid_inverse,
	bench_encode_gradient,
	bench_encode_noise,
	bench_decode_gradient,
);

criterion_main!(benches);
