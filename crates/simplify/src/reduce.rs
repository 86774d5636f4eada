//! Recursive Douglas–Peucker reduction.
//!
//! Purpose
//! - Select the subsequence of an ordered point slice whose shape deviates
//!   from the input by at most `tolerance` (perpendicular distance to the
//!   reference line of each sub-range).
//! - Degenerate input is reported through [`ReduceError`] instead of looping
//!   or dividing by zero.
//!
//! Code cross-refs: `dist::perpendicular_distance`.

use std::fmt;

use nalgebra::Vector2;

use crate::dist::perpendicular_distance;

/// Reduction failure on degenerate input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReduceError {
    /// Every point equals the first point, so no line through two distinct
    /// endpoints exists to reduce against.
    AllCoincident,
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::AllCoincident => {
                write!(f, "all points coincide; no reference line exists")
            }
        }
    }
}

impl std::error::Error for ReduceError {}

/// Reduce `points` to a shape-preserving subsequence within `tolerance`.
///
/// Inputs shorter than 3 points are returned unchanged. The first point and
/// the last point distinct from it are always retained; when the polyline is
/// closed (last point equals the first), the trailing duplicates are dropped
/// and the reduction runs up to the last distinct point.
///
/// A negative tolerance is valid: every deviation exceeds it, so every point
/// of the adjusted range is retained.
pub fn reduce(
    points: &[Vector2<f64>],
    tolerance: f64,
) -> Result<Vec<Vector2<f64>>, ReduceError> {
    let kept = reduce_indices(points, tolerance)?;
    Ok(kept.into_iter().map(|i| points[i]).collect())
}

/// As [`reduce`], but returns the ascending indices of the retained points.
///
/// Useful when per-point side data (timestamps, elevations) must survive the
/// reduction alongside the coordinates.
///
/// # Errors
///
/// [`ReduceError::AllCoincident`] when `points` has ≥ 3 elements and every
/// one equals the first.
pub fn reduce_indices(points: &[Vector2<f64>], tolerance: f64) -> Result<Vec<usize>, ReduceError> {
    let n = points.len();
    if n < 3 {
        return Ok((0..n).collect());
    }

    let first = 0usize;
    // The reference line needs distinct endpoints. Walk the last index back
    // past any trailing duplicates of the first point (closed polylines).
    let Some(last) = (first + 1..n).rev().find(|&i| points[i] != points[first]) else {
        return Err(ReduceError::AllCoincident);
    };

    let mut kept = vec![first, last];
    reduce_range(points, first, last, tolerance, &mut kept);
    // Each split index is recorded before descending into its two halves, so
    // the accumulator is not in index order.
    kept.sort_unstable();
    Ok(kept)
}

/// Reduce the sub-range `[first, last]` (both endpoints already kept).
///
/// Finds the interior point farthest from the line through the endpoints
/// (strict `>`, so the first index achieving the maximum wins ties). If that
/// deviation exceeds `tolerance` the point is kept and both halves are
/// reduced further; otherwise, or when the sub-range has no interior, the
/// branch terminates.
fn reduce_range(
    points: &[Vector2<f64>],
    first: usize,
    last: usize,
    tolerance: f64,
    kept: &mut Vec<usize>,
) {
    let mut farthest: Option<(usize, f64)> = None;
    for i in first + 1..last {
        let d = perpendicular_distance(points[first], points[last], points[i]);
        if farthest.is_none_or(|(_, max)| d > max) {
            farthest = Some((i, d));
        }
    }
    if let Some((split, max)) = farthest {
        if max > tolerance {
            kept.push(split);
            reduce_range(points, first, split, tolerance, kept);
            reduce_range(points, split, last, tolerance, kept);
        }
    }
}
