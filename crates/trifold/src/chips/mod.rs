//! Evidence chips for the congruence lesson.
//!
//! A chip is one collectible fact ("AB", "∠BAD", "AD is shared", …). The
//! registry decides when a chip may be collected from the current triangle and
//! fold point, tracks what the learner has gathered, and checks the collection
//! against the SAS argument.
//!
//! Lifecycle
//! - Chips start uncollected and unavailable.
//! - `update_availability` re-evaluates every rule (call it after each
//!   geometry change).
//! - `collect_chip` flips `collected` once; `uncollect_chip` reverses it.
//! - `reset` rebuilds the registry from `CHIP_DEFINITIONS`.

mod registry;
mod rules;
mod types;

pub use registry::{is_sas_chip_set_complete, ChipRegistry};
pub use rules::ChipRule;
pub use types::{
    is_known_chip, Chip, ChipDef, ChipKind, ChipRegistryState, ChipState, ChipValidationResult,
    Progress, ANGLE_BAD, ANGLE_CAD, CHIP_DEFINITIONS, COMMON_AD, DISCOVERY_PATTERNS, GIVEN_AB_AC,
    REQUIRED_SAS_CHIPS, SIDE_AB, SIDE_AC, SIDE_BD, SIDE_CD,
};

#[cfg(test)]
mod tests;
