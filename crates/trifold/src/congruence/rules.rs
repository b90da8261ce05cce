//! Pattern matching for the five criteria.
//!
//! The second triangle's vertices are labelled `D, E, F` (images of `A, B, C`
//! under the identity correspondence). Each check walks a fixed list of
//! patterns and returns the first one whose measurements agree within
//! tolerance. The search is first-match, not best-match.

use super::types::{CongruenceCondition, CongruenceKind};
use crate::geom::{
    angle_bisector_intersection, distance, interior_angle_deg, is_angle_equal, is_equal,
    is_valid_triangle, measure_triangle, Measurement, Point, Side, Tolerances, Triangle, Vertex,
};

/// Angles below this (degrees) count as acute for RHA.
pub const ACUTE_LIMIT_DEG: f64 = 89.0;

const RIGHT_ANGLE_DEG: f64 = 90.0;

/// Image of `(A, B, C)` in the second triangle.
type Correspondence = [Vertex; 3];

const IDENTITY: Correspondence = [Vertex::A, Vertex::B, Vertex::C];
/// Mirror halves of a fold carry swapped `B`/`C` labels.
const MIRROR_BC: Correspondence = [Vertex::A, Vertex::C, Vertex::B];

/// (side, included angle, side), checked in this order.
const SAS_PATTERNS: [(Side, Vertex, Side); 3] = [
    (Side::AB, Vertex::A, Side::AC),
    (Side::AB, Vertex::B, Side::BC),
    (Side::AC, Vertex::C, Side::BC),
];

/// (angle, included side, angle), checked in this order.
const ASA_PATTERNS: [(Vertex, Side, Vertex); 3] = [
    (Vertex::A, Side::AB, Vertex::B),
    (Vertex::B, Side::BC, Vertex::C),
    (Vertex::A, Side::AC, Vertex::C),
];

const SSS_CORRESPONDENCES: [Correspondence; 2] = [IDENTITY, MIRROR_BC];

fn image(corr: &Correspondence, v: Vertex) -> Vertex {
    match v {
        Vertex::A => corr[0],
        Vertex::B => corr[1],
        Vertex::C => corr[2],
    }
}

fn side_of(p: Vertex, q: Vertex) -> Side {
    match (p.min(q), p.max(q)) {
        (Vertex::A, Vertex::B) => Side::AB,
        (Vertex::A, Vertex::C) => Side::AC,
        _ => Side::BC,
    }
}

fn side_image(corr: &Correspondence, s: Side) -> Side {
    let (p, q) = s.endpoints();
    side_of(image(corr, p), image(corr, q))
}

/// Label of a vertex of the second triangle.
fn second_label(v: Vertex) -> &'static str {
    match v {
        Vertex::A => "D",
        Vertex::B => "E",
        Vertex::C => "F",
    }
}

fn second_side_label(s: Side) -> String {
    let (p, q) = s.endpoints();
    format!("{}{}", second_label(p), second_label(q))
}

fn side_pair(s1: Side, s2: Side) -> String {
    format!("{}={}", s1.label(), second_side_label(s2))
}

fn angle_pair(v1: Vertex, v2: Vertex) -> String {
    format!("∠{}=∠{}", v1.label(), second_label(v2))
}

fn sides_match(m1: &Measurement, s1: Side, m2: &Measurement, s2: Side, tol: &Tolerances) -> bool {
    is_equal(m1.sides.get(s1), m2.sides.get(s2), tol.length)
}

fn angles_match(m1: &Measurement, v1: Vertex, m2: &Measurement, v2: Vertex, tol: &Tolerances) -> bool {
    is_angle_equal(m1.angles.get(v1), m2.angles.get(v2), tol.angle_deg)
}

/// Side-Angle-Side.
pub fn check_sas(t1: &Triangle, t2: &Triangle, tol: &Tolerances) -> Option<CongruenceCondition> {
    let (m1, m2) = (measure_triangle(t1), measure_triangle(t2));
    SAS_PATTERNS.iter().find_map(|&(s, v, r)| {
        let (s2, v2, r2) = (side_image(&IDENTITY, s), image(&IDENTITY, v), side_image(&IDENTITY, r));
        let hit = sides_match(&m1, s, &m2, s2, tol)
            && angles_match(&m1, v, &m2, v2, tol)
            && sides_match(&m1, r, &m2, r2, tol);
        hit.then(|| {
            CongruenceCondition::matched(
                CongruenceKind::Sas,
                vec![side_pair(s, s2), angle_pair(v, v2), side_pair(r, r2)],
            )
        })
    })
}

/// Angle-Side-Angle.
pub fn check_asa(t1: &Triangle, t2: &Triangle, tol: &Tolerances) -> Option<CongruenceCondition> {
    let (m1, m2) = (measure_triangle(t1), measure_triangle(t2));
    ASA_PATTERNS.iter().find_map(|&(v, s, w)| {
        let (v2, s2, w2) = (image(&IDENTITY, v), side_image(&IDENTITY, s), image(&IDENTITY, w));
        let hit = angles_match(&m1, v, &m2, v2, tol)
            && sides_match(&m1, s, &m2, s2, tol)
            && angles_match(&m1, w, &m2, w2, tol);
        hit.then(|| {
            CongruenceCondition::matched(
                CongruenceKind::Asa,
                vec![angle_pair(v, v2), side_pair(s, s2), angle_pair(w, w2)],
            )
        })
    })
}

/// Side-Side-Side, under the identity and the `B↔C` mirrored correspondence.
pub fn check_sss(t1: &Triangle, t2: &Triangle, tol: &Tolerances) -> Option<CongruenceCondition> {
    let (m1, m2) = (measure_triangle(t1), measure_triangle(t2));
    SSS_CORRESPONDENCES.iter().find_map(|corr| {
        let hit = Side::ALL
            .iter()
            .all(|&s| sides_match(&m1, s, &m2, side_image(corr, s), tol));
        hit.then(|| {
            CongruenceCondition::matched(
                CongruenceKind::Sss,
                Side::ALL.iter().map(|&s| side_pair(s, side_image(corr, s))).collect(),
            )
        })
    })
}

fn right_vertex(m: &Measurement, tol: &Tolerances) -> Option<Vertex> {
    Vertex::ALL
        .into_iter()
        .find(|&v| is_angle_equal(m.angles.get(v), RIGHT_ANGLE_DEG, tol.angle_deg))
}

/// Right angle and hypotenuse shared by both triangles.
struct RightPair {
    m1: Measurement,
    m2: Measurement,
    r1: Vertex,
    r2: Vertex,
    h1: Side,
    h2: Side,
}

impl RightPair {
    fn find(t1: &Triangle, t2: &Triangle, tol: &Tolerances) -> Option<Self> {
        let (m1, m2) = (measure_triangle(t1), measure_triangle(t2));
        let r1 = right_vertex(&m1, tol)?;
        let r2 = right_vertex(&m2, tol)?;
        let (h1, h2) = (m1.sides.longest(), m2.sides.longest());
        sides_match(&m1, h1, &m2, h2, tol).then_some(Self {
            m1,
            m2,
            r1,
            r2,
            h1,
            h2,
        })
    }

    fn prefix(&self) -> Vec<String> {
        vec![
            format!("{}=90°", angle_pair(self.r1, self.r2)),
            side_pair(self.h1, self.h2),
        ]
    }
}

/// Right angle, Hypotenuse, Side.
pub fn check_rhs(t1: &Triangle, t2: &Triangle, tol: &Tolerances) -> Option<CongruenceCondition> {
    let rp = RightPair::find(t1, t2, tol)?;
    for s1 in Side::ALL.into_iter().filter(|&s| s != rp.h1) {
        for s2 in Side::ALL.into_iter().filter(|&s| s != rp.h2) {
            if sides_match(&rp.m1, s1, &rp.m2, s2, tol) {
                let mut elements = rp.prefix();
                elements.push(side_pair(s1, s2));
                return Some(CongruenceCondition::matched(CongruenceKind::Rhs, elements));
            }
        }
    }
    None
}

/// Right angle, Hypotenuse, Angle (one acute angle).
pub fn check_rha(t1: &Triangle, t2: &Triangle, tol: &Tolerances) -> Option<CongruenceCondition> {
    let rp = RightPair::find(t1, t2, tol)?;
    let acute = |m: &Measurement| {
        Vertex::ALL
            .into_iter()
            .filter(|&v| m.angles.get(v) < ACUTE_LIMIT_DEG)
            .collect::<Vec<_>>()
    };
    let (acute1, acute2) = (acute(&rp.m1), acute(&rp.m2));
    for &v1 in &acute1 {
        for &v2 in &acute2 {
            if angles_match(&rp.m1, v1, &rp.m2, v2, tol) {
                let mut elements = rp.prefix();
                elements.push(angle_pair(v1, v2));
                return Some(CongruenceCondition::matched(CongruenceKind::Rha, elements));
            }
        }
    }
    None
}

/// Try every criterion in `CongruenceKind::PRIORITY` order; first success wins.
pub fn check_congruence(t1: &Triangle, t2: &Triangle, tol: &Tolerances) -> Option<CongruenceCondition> {
    CongruenceKind::PRIORITY.iter().find_map(|kind| match kind {
        CongruenceKind::Sas => check_sas(t1, t2, tol),
        CongruenceKind::Asa => check_asa(t1, t2, tol),
        CongruenceKind::Sss => check_sss(t1, t2, tol),
        CongruenceKind::Rhs => check_rhs(t1, t2, tol),
        CongruenceKind::Rha => check_rha(t1, t2, tol),
    })
}

/// SAS argument for the two halves of an isosceles triangle folded along `AD`:
/// `AB = AC` (given), `∠BAD = ∠CAD` (bisector), `AD = AD` (common).
///
/// `None` when the triangle is invalid, `D` coincides with `A`, or either
/// equality fails.
pub fn check_folded_triangle_congruence(
    original: &Triangle,
    fold_point: Point,
    tol: &Tolerances,
) -> Option<CongruenceCondition> {
    if !is_valid_triangle(original) || distance(original.a, fold_point) <= tol.length {
        return None;
    }
    let legs_equal = is_equal(
        distance(original.a, original.b),
        distance(original.a, original.c),
        tol.length,
    );
    let halves_equal = is_angle_equal(
        interior_angle_deg(original.a, original.b, fold_point),
        interior_angle_deg(original.a, original.c, fold_point),
        tol.angle_deg,
    );
    (legs_equal && halves_equal).then(|| {
        CongruenceCondition::matched(
            CongruenceKind::Sas,
            vec!["AB=AC".into(), "∠BAD=∠CAD".into(), "AD=AD".into()],
        )
    })
}

/// `check_folded_triangle_congruence` with `D` taken as the apex bisector foot.
pub fn check_bisector_fold_congruence(original: &Triangle, tol: &Tolerances) -> Option<CongruenceCondition> {
    check_folded_triangle_congruence(original, angle_bisector_intersection(original), tol)
}
