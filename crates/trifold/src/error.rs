//! Typed failures.
//!
//! Most operations in this crate have no failure mode: degenerate geometry falls
//! back to safe values and "not applicable" answers are `None`/`false`. The two
//! enums below cover the remaining cases.

use thiserror::Error;

/// Invalid domain input to a geometry helper.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// Two interior angles that cannot belong to one triangle.
    #[error("angles {a}° and {b}° cannot be two angles of a triangle")]
    InvalidAngles { a: f64, b: f64 },
}

/// Why the activity refused to advance. The `Display` text is what the
/// presentation layer shows from `ActivityContext::error`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GuardFailure {
    #[error("Fold the triangle to at least {required}° first (currently {angle}°).")]
    FoldTooShallow { angle: f64, required: f64 },
    #[error("Not quite. Look again at how the two folded halves match up.")]
    WrongAnswer,
    #[error("Collect the evidence for a congruence rule before moving on.")]
    MissingEvidence,
}
