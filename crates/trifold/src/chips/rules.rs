//! Named availability rules for chips.
//!
//! Each chip refers to a `ChipRule` by name; the predicate lives here so chip
//! records stay plain data and survive a serialize/deserialize cycle.

use serde::{Deserialize, Serialize};

use crate::geom::{
    distance, interior_angle_deg, is_angle_equal, is_equal, is_valid_triangle, Point, Tolerances,
    Triangle,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChipRule {
    /// The triangle satisfies the triangle inequality.
    TriangleValid,
    /// `AB = AC`.
    IsoscelesSides,
    /// The fold foot `D` lies on segment `BC` and differs from `A`.
    FoldPointOnBase,
    /// `D` on `BC` and `∠BAD = ∠CAD`.
    BisectorSplit,
    /// `D` on `BC` and `BD = DC`.
    BaseHalves,
}

impl ChipRule {
    pub fn evaluate(self, t: &Triangle, fold_point: Option<Point>, tol: &Tolerances) -> bool {
        match self {
            ChipRule::TriangleValid => is_valid_triangle(t),
            ChipRule::IsoscelesSides => {
                is_valid_triangle(t) && is_equal(distance(t.a, t.b), distance(t.a, t.c), tol.length)
            }
            ChipRule::FoldPointOnBase => fold_point.is_some_and(|d| on_base(t, d, tol)),
            ChipRule::BisectorSplit => fold_point.is_some_and(|d| {
                on_base(t, d, tol)
                    && is_angle_equal(
                        interior_angle_deg(t.a, t.b, d),
                        interior_angle_deg(t.a, t.c, d),
                        tol.angle_deg,
                    )
            }),
            ChipRule::BaseHalves => fold_point.is_some_and(|d| {
                on_base(t, d, tol) && is_equal(distance(t.b, d), distance(d, t.c), tol.length)
            }),
        }
    }
}

fn on_base(t: &Triangle, d: Point, tol: &Tolerances) -> bool {
    is_valid_triangle(t)
        && distance(t.a, d) > tol.length
        && is_equal(distance(t.b, d) + distance(d, t.c), distance(t.b, t.c), tol.length)
}
