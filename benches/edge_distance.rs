//! Benchmarks for point/edge and edge/edge distance primitives.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use spherum::distance::{
    edge_pair_closest_points, is_edge_b_near_edge_a, project, update_edge_pair_min_distance,
    update_max_distance, update_min_distance,
};
use spherum::interpolate::interpolate;
use spherum::{Angle, ChordAngle, Point};

fn random_point(rng: &mut StdRng) -> Point {
    Point::from_coords(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    )
}

/// Generates short edges with query points near them, the common case in
/// index searches.
fn generate_edges(count: usize, seed: u64) -> Vec<(Point, Point, Point)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let a = random_point(&mut rng);
            let b = interpolate(0.01, a, random_point(&mut rng));
            let x = interpolate(rng.gen_range(-0.5..1.5), a, b);
            (x, a, b)
        })
        .collect()
}

fn bench_point_edge(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_edge");
    let edges = generate_edges(1000, 42);
    group.throughput(Throughput::Elements(edges.len() as u64));

    group.bench_function("update_min_distance", |b| {
        b.iter(|| {
            for &(x, a, b) in &edges {
                black_box(update_min_distance(x, a, b, ChordAngle::INFINITY));
            }
        })
    });

    group.bench_function("update_min_distance_rejected", |b| {
        // A tiny limit lets the planar rejection test skip most work.
        let limit = ChordAngle::from_angle(Angle::from_degrees(1e-6));
        b.iter(|| {
            for &(x, a, b) in &edges {
                black_box(update_min_distance(x, a, b, limit));
            }
        })
    });

    group.bench_function("update_max_distance", |b| {
        b.iter(|| {
            for &(x, a, b) in &edges {
                black_box(update_max_distance(x, a, b, ChordAngle::NEGATIVE));
            }
        })
    });

    group.bench_function("project", |b| {
        b.iter(|| {
            for &(x, a, b) in &edges {
                black_box(project(x, a, b));
            }
        })
    });

    group.finish();
}

fn bench_edge_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_pair");
    let edges = generate_edges(1000, 7);
    let pairs: Vec<_> = edges.windows(2).map(|w| (w[0].1, w[0].2, w[1].1, w[1].2)).collect();
    group.throughput(Throughput::Elements(pairs.len() as u64));

    group.bench_function("update_edge_pair_min_distance", |b| {
        b.iter(|| {
            for &(a0, a1, b0, b1) in &pairs {
                black_box(update_edge_pair_min_distance(a0, a1, b0, b1, ChordAngle::INFINITY));
            }
        })
    });

    group.bench_function("edge_pair_closest_points", |b| {
        b.iter(|| {
            for &(a0, a1, b0, b1) in &pairs {
                black_box(edge_pair_closest_points(a0, a1, b0, b1));
            }
        })
    });

    group.bench_function("is_edge_b_near_edge_a", |b| {
        let tolerance = Angle::from_degrees(1.0);
        b.iter(|| {
            for &(a0, a1, b0, b1) in &pairs {
                black_box(is_edge_b_near_edge_a(a0, a1, b0, b1, tolerance));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_point_edge, bench_edge_pair);
criterion_main!(benches);
