use super::types::{Angles, Measurement, Point, Sides, Triangle};
use crate::error::GeometryError;

/// Euclidean distance.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2 - p1).norm()
}

/// Bearing difference (radians) from `vertex` towards `p1` and `p2`.
///
/// Returns `atan2(p2 - vertex) - atan2(p1 - vertex)` exactly as computed, so
/// the magnitude can exceed π for some point orderings. Use
/// `interior_angle_deg` when the triangle's interior angle is wanted.
#[inline]
pub fn angle(vertex: Point, p1: Point, p2: Point) -> f64 {
    let d1 = p1 - vertex;
    let d2 = p2 - vertex;
    d2.y.atan2(d2.x) - d1.y.atan2(d1.x)
}

/// Interior angle at `vertex` in degrees, folded into [0°, 180°].
pub fn interior_angle_deg(vertex: Point, p1: Point, p2: Point) -> f64 {
    let deg = angle(vertex, p1, p2).abs().to_degrees();
    if deg > 180.0 {
        360.0 - deg
    } else {
        deg
    }
}

/// Sides and interior angles of `t`.
pub fn measure_triangle(t: &Triangle) -> Measurement {
    Measurement {
        sides: Sides {
            ab: distance(t.a, t.b),
            ac: distance(t.a, t.c),
            bc: distance(t.b, t.c),
        },
        angles: Angles {
            a: interior_angle_deg(t.a, t.b, t.c),
            b: interior_angle_deg(t.b, t.a, t.c),
            c: interior_angle_deg(t.c, t.a, t.b),
        },
    }
}

/// `|a - b| <= tol`.
#[inline]
pub fn is_equal(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Angle equality in degrees; same rule as `is_equal`, kept separate so call
/// sites say which tolerance they use.
#[inline]
pub fn is_angle_equal(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Strict triangle inequality on all three pairs.
pub fn is_valid_triangle(t: &Triangle) -> bool {
    let ab = distance(t.a, t.b);
    let ac = distance(t.a, t.c);
    let bc = distance(t.b, t.c);
    ab + ac > bc && ab + bc > ac && ac + bc > ab
}

/// Unsigned area.
#[inline]
pub fn area(t: &Triangle) -> f64 {
    crate::parallelogram_area(t.b - t.a, t.c - t.a).abs() * 0.5
}

#[inline]
pub fn centroid(t: &Triangle) -> Point {
    (t.a + t.b + t.c) / 3.0
}

/// Point-in-triangle by edge orientation signs. Points on an edge count as inside.
pub fn is_point_in_triangle(p: Point, t: &Triangle) -> bool {
    let d1 = crate::parallelogram_area(t.b - t.a, p - t.a);
    let d2 = crate::parallelogram_area(t.c - t.b, p - t.b);
    let d3 = crate::parallelogram_area(t.a - t.c, p - t.c);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Isosceles triangle with apex `A` at `(center_x, 0)` and base `BC` at `y = height`.
pub fn create_isosceles_triangle(base: f64, height: f64, center_x: f64) -> Triangle {
    let half = base * 0.5;
    Triangle::new(
        Point::new(center_x, 0.0),
        Point::new(center_x - half, height),
        Point::new(center_x + half, height),
    )
}

/// Third interior angle from two known ones (degrees).
pub fn calculate_third_angle(angle_a: f64, angle_b: f64) -> Result<f64, GeometryError> {
    if angle_a < 0.0 || angle_b < 0.0 || angle_a + angle_b >= 180.0 {
        return Err(GeometryError::InvalidAngles {
            a: angle_a,
            b: angle_b,
        });
    }
    Ok(180.0 - angle_a - angle_b)
}
