//! Triangle congruence evaluator.
//!
//! Five criteria (SAS, ASA, SSS, RHS, RHA), each a deterministic first-match
//! search over a fixed list of vertex-label patterns, plus the specialised SAS
//! argument used by the folding lesson.
//!
//! Determinism
//! - Results depend only on the inputs, the tolerance and the fixed pattern
//!   order. Near-equal measurements can still pick a different pattern under
//!   floating-point noise; callers that need a canonical pairing should not
//!   rely on `elements` beyond display.

mod rules;
mod types;

pub use rules::{
    check_asa, check_bisector_fold_congruence, check_congruence, check_folded_triangle_congruence,
    check_rha, check_rhs, check_sas, check_sss, ACUTE_LIMIT_DEG,
};
pub use types::{CongruenceCondition, CongruenceKind};
