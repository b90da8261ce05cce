//! Basic plane types and tolerances.
//!
//! - `Point`: a plain `Vector2<f64>`; serializes as `[x, y]`.
//! - `Triangle`: three labelled vertices, `a` is the apex by convention.
//! - `Measurement`: side lengths and interior angles (degrees), derived on demand.
//! - `Tolerances`: centralizes the slack used by every equality check.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Plane coordinate in abstract units.
pub type Point = Vector2<f64>;

/// Default comparison slack, in plane units for lengths and degrees for angles.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Comparison tolerances.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tolerances {
    pub length: f64,
    pub angle_deg: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            length: DEFAULT_TOLERANCE,
            angle_deg: DEFAULT_TOLERANCE,
        }
    }
}

impl Tolerances {
    /// Same slack for lengths and angles.
    #[inline]
    pub fn uniform(tol: f64) -> Self {
        Self {
            length: tol,
            angle_deg: tol,
        }
    }
}

/// Vertex labels of a `Triangle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    pub const ALL: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Vertex::A => "A",
            Vertex::B => "B",
            Vertex::C => "C",
        }
    }

    /// The two other vertices, in label order.
    #[inline]
    pub fn others(self) -> (Vertex, Vertex) {
        match self {
            Vertex::A => (Vertex::B, Vertex::C),
            Vertex::B => (Vertex::A, Vertex::C),
            Vertex::C => (Vertex::A, Vertex::B),
        }
    }
}

/// Side labels of a `Triangle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    AB,
    AC,
    BC,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::AB, Side::AC, Side::BC];

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Side::AB => "AB",
            Side::AC => "AC",
            Side::BC => "BC",
        }
    }

    #[inline]
    pub fn endpoints(self) -> (Vertex, Vertex) {
        match self {
            Side::AB => (Vertex::A, Vertex::B),
            Side::AC => (Vertex::A, Vertex::C),
            Side::BC => (Vertex::B, Vertex::C),
        }
    }

    /// Vertex not on this side.
    #[inline]
    pub fn opposite(self) -> Vertex {
        match self {
            Side::AB => Vertex::C,
            Side::AC => Vertex::B,
            Side::BC => Vertex::A,
        }
    }
}

/// Triangle `{A, B, C}`; validity is checked by `is_valid_triangle`, not enforced here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    #[serde(rename = "A")]
    pub a: Point,
    #[serde(rename = "B")]
    pub b: Point,
    #[serde(rename = "C")]
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Convenience constructor from coordinate pairs.
    #[inline]
    pub fn from_xy(pts: [(f64, f64); 3]) -> Self {
        Self {
            a: Point::new(pts[0].0, pts[0].1),
            b: Point::new(pts[1].0, pts[1].1),
            c: Point::new(pts[2].0, pts[2].1),
        }
    }

    #[inline]
    pub fn vertex(&self, v: Vertex) -> Point {
        match v {
            Vertex::A => self.a,
            Vertex::B => self.b,
            Vertex::C => self.c,
        }
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Apply `f` to every vertex, keeping labels.
    #[inline]
    pub fn map(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            a: f(self.a),
            b: f(self.b),
            c: f(self.c),
        }
    }
}

/// Side lengths keyed by label.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    #[serde(rename = "AB")]
    pub ab: f64,
    #[serde(rename = "AC")]
    pub ac: f64,
    #[serde(rename = "BC")]
    pub bc: f64,
}

impl Sides {
    #[inline]
    pub fn get(&self, s: Side) -> f64 {
        match s {
            Side::AB => self.ab,
            Side::AC => self.ac,
            Side::BC => self.bc,
        }
    }

    /// Longest side; ties resolve to the first in `AB, AC, BC` order.
    pub fn longest(&self) -> Side {
        let mut best = Side::AB;
        for s in [Side::AC, Side::BC] {
            if self.get(s) > self.get(best) {
                best = s;
            }
        }
        best
    }
}

/// Interior angles in degrees keyed by vertex.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
    #[serde(rename = "C")]
    pub c: f64,
}

impl Angles {
    #[inline]
    pub fn get(&self, v: Vertex) -> f64 {
        match v {
            Vertex::A => self.a,
            Vertex::B => self.b,
            Vertex::C => self.c,
        }
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.a + self.b + self.c
    }
}

/// Derived measurements of a triangle; never cached.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub sides: Sides,
    pub angles: Angles,
}
