//! Tolerance-based plane geometry for triangles.
//!
//! Purpose
//! - Provide the small set of measurements every learning module leans on:
//!   distances, interior angles, areas, the apex bisector foot, reflections.
//! - Keep everything a pure function of its inputs. Nothing is cached;
//!   `measure_triangle` is O(1) and cheap enough to call per event.
//!
//! Conventions
//! - Points live in abstract plane units; renderers apply their own scale.
//! - Vertex `a` of a `Triangle` is the apex/reference vertex.
//! - Comparisons take an explicit tolerance (see `Tolerances`).
//! - Degenerate inputs never panic: bisector and reflection fall back to
//!   documented safe values instead.
//!
//! Code cross-refs: `congruence` (consumes `Measurement`), `fold` (consumes the
//! bisector foot and reflections).

mod constructions;
mod measure;
pub mod rand;
mod types;

pub use constructions::{
    angle_bisector_intersection, fold_point_position, midpoint, reflect_point,
    BISECTOR_PARALLEL_EPS,
};
pub use measure::{
    angle, area, calculate_third_angle, centroid, create_isosceles_triangle, distance,
    interior_angle_deg, is_angle_equal, is_equal, is_point_in_triangle, is_valid_triangle,
    measure_triangle,
};
pub use types::{Angles, Measurement, Point, Side, Sides, Tolerances, Triangle, Vertex, DEFAULT_TOLERANCE};
