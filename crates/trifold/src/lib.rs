//! Domain core of the triangle-folding lessons.
//!
//! Layers, leaf first:
//! - `geom`: tolerance-based plane geometry for triangles.
//! - `congruence`: SSS/SAS/ASA/RHS/RHA evaluation between two triangles.
//! - `fold`: the paper fold along the apex bisector (overlap, feedback, keyframes).
//! - `chips`: evidence chips and their registry.
//! - `activity`: the guarded step machine of a lesson.
//! - `session`: one learner session tying registry and machine together.
//!
//! API Policy
//! - Consumed by the lesson front end and `trifold-cli`. `api` and `prelude`
//!   are the convenience surfaces; module paths may still move.

pub mod activity;
pub mod api;
pub mod chips;
pub mod congruence;
pub mod error;
pub mod fold;
pub mod geom;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeometryError, GuardFailure};
pub use geom::{Point, Tolerances, Triangle};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::activity::{ActivityContext, ActivityMachine, Event, Step};
    pub use crate::chips::ChipRegistry;
    pub use crate::congruence::{check_congruence, CongruenceCondition, CongruenceKind};
    pub use crate::fold::{detect_overlap, fold_triangle_along_bisector, FoldCfg};
    pub use crate::geom::rand::{draw_triangle, rigid_copy, ReplayToken, TriangleCfg};
    pub use crate::geom::{measure_triangle, Point, Tolerances, Triangle};
    pub use crate::session::{ActivitySession, SessionCfg, SessionSnapshot};
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
