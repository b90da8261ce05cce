//! Curated flat API for the lesson front end and the CLI.
//!
//! Names follow the lesson vocabulary rather than the module layout. Prefer
//! these re-exports in callers that touch several layers at once.

// Plane geometry
pub use crate::geom::{
    angle_bisector_intersection, area, calculate_third_angle, centroid, create_isosceles_triangle,
    distance, fold_point_position, interior_angle_deg, is_point_in_triangle, is_valid_triangle,
    measure_triangle, midpoint, reflect_point, Measurement, Point, Tolerances, Triangle,
};
// Practice sampling
pub use crate::geom::rand::{
    draw_triangle, rigid_copy, ReplayToken as PracticeToken, TriangleCfg as PracticeCfg,
};
// Congruence criteria
pub use crate::congruence::{
    check_asa, check_bisector_fold_congruence, check_congruence, check_folded_triangle_congruence,
    check_rha, check_rhs, check_sas, check_sss, CongruenceCondition, CongruenceKind,
};
// Fold model
pub use crate::fold::{
    calculate_feedback_intensity, clamp_fold_angle, detect_overlap, fold_triangle_along_bisector,
    generate_fold_keyframes, validate_fold, FeedbackTier, FoldCfg, FoldResult, OverlapReport,
    DEFAULT_KEYFRAME_STEPS,
};
// Evidence chips
pub use crate::chips::{ChipRegistry, ChipRegistryState, ChipValidationResult, Progress};
// Activity flow
pub use crate::activity::{step_metadata, ActivityContext, ActivityMachine, Event, Step, StepMeta};
pub use crate::session::{ActivitySession, SessionCfg, SessionSnapshot};
