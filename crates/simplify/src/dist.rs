//! Perpendicular point-to-line distance.

use nalgebra::Vector2;

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// Computed as the doubled area of the triangle `(a, b, p)` (shoelace form)
/// divided by the base length `‖b − a‖`, i.e. the triangle's height over
/// that base. Non-negative for any input.
///
/// A degenerate base (`a == b`) spans no line; the distance is defined as
/// `0.0` so a degenerate sub-range never contributes a split point.
#[inline]
pub fn perpendicular_distance(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> f64 {
    let area2 = (a.x * b.y + b.x * p.y + p.x * a.y - b.x * a.y - p.x * b.y - a.x * p.y).abs();
    let base = (b - a).norm();
    if base > 0.0 {
        area2 / base
    } else {
        0.0
    }
}
