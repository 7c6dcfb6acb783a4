//! Geometric predicates shared by the range tree and the k-d tree.

use std::cmp::Ordering;

use crate::error::{RangeIndexError, Result};
use crate::r#type::IndexableNum;

/// Ensure a point carries at least `num_dims` coordinates. Extra coordinates are allowed.
#[inline]
pub(crate) fn check_min_dims<N>(point: &[N], num_dims: usize) -> Result<()> {
    if point.len() < num_dims {
        return Err(RangeIndexError::DimensionMismatch {
            expected: num_dims,
            actual: point.len(),
        });
    }
    Ok(())
}

/// Ensure a point carries exactly `num_dims` coordinates.
#[inline]
pub(crate) fn check_exact_dims<N>(point: &[N], num_dims: usize) -> Result<()> {
    if point.len() != num_dims {
        return Err(RangeIndexError::DimensionMismatch {
            expected: num_dims,
            actual: point.len(),
        });
    }
    Ok(())
}

/// Returns `true` if the first `num_dims` coordinates of `point` lie within `[low, high]`,
/// inclusive on both ends.
///
/// Callers must have validated that all three slices have at least `num_dims` coordinates.
#[inline]
pub(crate) fn point_in_range<N: IndexableNum>(
    point: &[N],
    low: &[N],
    high: &[N],
    num_dims: usize,
) -> bool {
    (0..num_dims).all(|i| point[i] >= low[i] && point[i] <= high[i])
}

/// Total order over coordinates used when sorting.
///
/// Agrees with [`PartialOrd`] wherever it is defined and places incomparable values (NaN) after
/// every comparable one.
#[inline]
pub(crate) fn cmp_coord<N: IndexableNum>(a: N, b: N) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => {
            let a_nan = a.partial_cmp(&a).is_none();
            let b_nan = b.partial_cmp(&b).is_none();
            match (a_nan, b_nan) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => Ordering::Equal,
            }
        }
    }
}

/// Squared euclidean distance over the first `num_dims` coordinates, computed in `f64`.
#[inline]
pub(crate) fn sq_dist<N: IndexableNum>(a: &[N], b: &[N], num_dims: usize) -> f64 {
    (0..num_dims)
        .map(|i| {
            let d = a[i].as_f64() - b[i].as_f64();
            d * d
        })
        .sum()
}
