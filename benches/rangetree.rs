use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use range_index::kdtree::KDTree;
use range_index::rangetree::{RangeTree, RangeTreeIndex};

fn random_points(num_items: usize, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_items)
        .map(|_| {
            [
                rng.gen_range(0.0..1000.0),
                rng.gen_range(0.0..1000.0),
                rng.gen_range(0.0..1000.0),
            ]
        })
        .collect()
}

fn construct_kdtree(points: &[[f64; 3]]) -> KDTree<f64, 3> {
    let mut tree = KDTree::new();
    for point in points {
        tree.insert(point).unwrap();
    }
    tree
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let points = random_points(10_000, 0);

    c.bench_function("construction (rangetree 2d)", |b| {
        b.iter(|| RangeTree::<f64, 2>::try_new(&points).unwrap())
    });

    c.bench_function("construction (rangetree 3d)", |b| {
        b.iter(|| RangeTree::<f64, 3>::try_new(&points[..2_000]).unwrap())
    });

    c.bench_function("construction (kdtree 2d)", |b| {
        b.iter(|| construct_kdtree(&points))
    });

    let tree_2d = RangeTree::<f64, 2>::try_new(&points).unwrap();
    let tree_3d = RangeTree::<f64, 3>::try_new(&points[..2_000]).unwrap();
    let kdtree = construct_kdtree(&points);
    let (low, high) = ([400., 400., 0.], [450., 450., 1000.]);

    c.bench_function("range (rangetree 2d)", |b| {
        b.iter(|| tree_2d.range(&low, &high).unwrap())
    });

    c.bench_function("range nested (rangetree 2d)", |b| {
        b.iter(|| tree_2d.range_nested(&low, &high).unwrap())
    });

    c.bench_function("range (rangetree 3d)", |b| {
        b.iter(|| tree_3d.range(&low, &high).unwrap())
    });

    c.bench_function("range nested (rangetree 3d)", |b| {
        b.iter(|| tree_3d.range_nested(&low, &high).unwrap())
    });

    c.bench_function("range (kdtree)", |b| {
        b.iter(|| kdtree.range(&low, &high).unwrap())
    });

    c.bench_function("contains (rangetree 2d)", |b| {
        b.iter(|| tree_2d.contains(&points[5_000]).unwrap())
    });

    c.bench_function("nearest neighbor (kdtree)", |b| {
        b.iter(|| kdtree.nearest_neighbor(&[500., 500., 500.]).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
