//! Constructions used by the fold model.
//!
//! - `angle_bisector_intersection`: foot `D` of the apex bisector on `BC`.
//! - `reflect_point`: mirror image across a line.
//! - `fold_point_position`: projected position of a point partway through a fold.

use super::types::{Point, Triangle};

/// Below this `|cross(bisector, BC)|` the two lines are treated as parallel.
pub const BISECTOR_PARALLEL_EPS: f64 = 1e-4;

/// Squared length under which a line is considered degenerate.
const DEGENERATE_LEN2: f64 = 1e-24;

#[inline]
pub fn midpoint(p: Point, q: Point) -> Point {
    (p + q) * 0.5
}

/// Intersection of the bisector of angle `A` with line `BC`.
///
/// The bisector direction is the sum of the unit vectors `A→B` and `A→C`.
/// Falls back to the midpoint of `BC` when either of those vectors has zero
/// length or the bisector is numerically parallel to `BC`.
pub fn angle_bisector_intersection(t: &Triangle) -> Point {
    let fallback = midpoint(t.b, t.c);
    let ab = t.b - t.a;
    let ac = t.c - t.a;
    let (nab, nac) = (ab.norm(), ac.norm());
    if nab <= 0.0 || nac <= 0.0 {
        return fallback;
    }
    let dir = ab / nab + ac / nac;
    let bc = t.c - t.b;
    // A + s·dir = B + u·bc
    let denom = crate::parallelogram_area(dir, bc);
    if denom.abs() < BISECTOR_PARALLEL_EPS {
        return fallback;
    }
    let s = crate::parallelogram_area(ab, bc) / denom;
    t.a + dir * s
}

/// Reflect `p` across the line through `line_start` and `line_end`.
///
/// A zero-length line returns `p` unchanged.
pub fn reflect_point(p: Point, line_start: Point, line_end: Point) -> Point {
    match project_onto_line(p, line_start, line_end) {
        Some(foot) => foot * 2.0 - p,
        None => p,
    }
}

/// Position of `p` after rotating it by `fold_angle_deg` about the fold line,
/// seen from above: 0° leaves it in place, 180° lands on `reflect_point`.
pub fn fold_point_position(p: Point, line_start: Point, line_end: Point, fold_angle_deg: f64) -> Point {
    match project_onto_line(p, line_start, line_end) {
        Some(foot) => foot + (p - foot) * fold_angle_deg.to_radians().cos(),
        None => p,
    }
}

fn project_onto_line(p: Point, s: Point, e: Point) -> Option<Point> {
    let d = e - s;
    let len2 = d.norm_squared();
    if !len2.is_finite() || len2 <= DEGENERATE_LEN2 {
        return None;
    }
    let t = (p - s).dot(&d) / len2;
    Some(s + d * t)
}
