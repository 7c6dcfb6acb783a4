//! Shared fixtures for the index test suites.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::r#type::IndexableNum;
use crate::util::{cmp_coord, point_in_range};

/// Sample 2D points, covering a 20 by 20 area.
pub(crate) fn sample_points_2d() -> Vec<[i32; 2]> {
    vec![
        [3, 6],
        [17, 15],
        [13, 15],
        [6, 12],
        [9, 1],
        [2, 7],
        [10, 19],
        [14, 11],
        [8, 7],
        [15, 5],
        [4, 8],
        [11, 9],
        [16, 3],
        [5, 14],
        [12, 2],
        [7, 10],
        [18, 13],
        [1, 4],
        [19, 16],
        [20, 18],
    ]
}

/// Sample 3D points.
pub(crate) fn sample_points_3d() -> Vec<[i32; 3]> {
    vec![
        [3, 6, 2],
        [17, 15, 8],
        [13, 15, 5],
        [6, 12, 7],
        [9, 1, 3],
        [2, 7, 9],
        [10, 19, 4],
        [14, 11, 6],
        [8, 7, 1],
        [15, 5, 10],
    ]
}

/// Every integer point of the `size` by `size` grid starting at the origin.
pub(crate) fn grid_points(size: i32) -> Vec<[i32; 2]> {
    (0..size)
        .flat_map(|i| (0..size).map(move |j| [i, j]))
        .collect()
}

/// `num_items` random points with `num_dims` coordinates in `0..max`.
///
/// Keep `max` small to get plenty of duplicate coordinates and duplicate points.
pub(crate) fn random_points(num_items: usize, num_dims: usize, max: i32, seed: u64) -> Vec<Vec<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_items)
        .map(|_| (0..num_dims).map(|_| rng.gen_range(0..max)).collect())
        .collect()
}

/// A random query box with `num_dims` coordinates in `-1..=max`, with `low <= high`.
pub(crate) fn random_box(num_dims: usize, max: i32, rng: &mut StdRng) -> (Vec<i32>, Vec<i32>) {
    (0..num_dims)
        .map(|_| {
            let a = rng.gen_range(-1..=max);
            let b = rng.gen_range(-1..=max);
            (a.min(b), a.max(b))
        })
        .unzip()
}

/// The points within `[low, high]` by linear scan.
pub(crate) fn brute_force_range<N: IndexableNum>(
    points: &[Vec<N>],
    low: &[N],
    high: &[N],
    num_dims: usize,
) -> Vec<Vec<N>> {
    points
        .iter()
        .filter(|p| point_in_range(p, low, high, num_dims))
        .cloned()
        .collect()
}

/// Owned copies of `points` in lexicographic order, to compare results as multisets.
pub(crate) fn sorted<N: IndexableNum, P: AsRef<[N]>>(points: &[P]) -> Vec<Vec<N>> {
    let mut points: Vec<Vec<N>> = points.iter().map(|p| p.as_ref().to_vec()).collect();
    points.sort_by(|a, b| {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| cmp_coord(*x, *y))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len()))
    });
    points
}
