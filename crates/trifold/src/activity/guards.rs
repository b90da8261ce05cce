//! Transition guards: pure predicates over the context.

use super::types::ActivityContext;
use crate::chips::{is_known_chip, DISCOVERY_PATTERNS};

/// Fold needed before the action step can finish.
pub const MIN_FOLD_ANGLE_DEG: f64 = 90.0;

/// Expected answer of the inquiry step.
pub const CORRECT_ANSWER: &str = "congruence";

pub fn can_proceed_from_action(ctx: &ActivityContext) -> bool {
    ctx.fold_angle >= MIN_FOLD_ANGLE_DEG
}

pub fn can_proceed_from_inquiry(ctx: &ActivityContext) -> bool {
    ctx.selected_answer.as_deref() == Some(CORRECT_ANSWER)
}

/// At least one of `DISCOVERY_PATTERNS` is fully collected.
pub fn can_proceed_from_discovery(ctx: &ActivityContext) -> bool {
    DISCOVERY_PATTERNS
        .iter()
        .any(|pattern| pattern.iter().all(|id| ctx.has_chip(id)))
}

/// Known chip id that is not collected yet.
pub fn has_valid_chip(ctx: &ActivityContext, chip_id: &str) -> bool {
    is_known_chip(chip_id) && !ctx.has_chip(chip_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chips::{ANGLE_BAD, ANGLE_CAD, COMMON_AD, GIVEN_AB_AC, SIDE_AB};

    fn with_chips(ids: &[&str]) -> ActivityContext {
        ActivityContext {
            collected_chips: ids.iter().map(|s| s.to_string()).collect(),
            ..ActivityContext::initial()
        }
    }

    #[test]
    fn action_needs_ninety_degrees() {
        let mut ctx = ActivityContext::initial();
        ctx.fold_angle = 89.9;
        assert!(!can_proceed_from_action(&ctx));
        ctx.fold_angle = 90.0;
        assert!(can_proceed_from_action(&ctx));
    }

    #[test]
    fn inquiry_needs_the_exact_answer() {
        let mut ctx = ActivityContext::initial();
        assert!(!can_proceed_from_inquiry(&ctx));
        ctx.selected_answer = Some("similarity".into());
        assert!(!can_proceed_from_inquiry(&ctx));
        ctx.selected_answer = Some(CORRECT_ANSWER.into());
        assert!(can_proceed_from_inquiry(&ctx));
    }

    #[test]
    fn discovery_accepts_any_pattern() {
        assert!(!can_proceed_from_discovery(&with_chips(&[ANGLE_BAD, ANGLE_CAD, COMMON_AD])));
        assert!(can_proceed_from_discovery(&with_chips(&[
            GIVEN_AB_AC,
            ANGLE_BAD,
            ANGLE_CAD,
            COMMON_AD
        ])));
    }

    #[test]
    fn chip_guard_rejects_unknown_and_duplicates() {
        let ctx = with_chips(&[SIDE_AB]);
        assert!(!has_valid_chip(&ctx, SIDE_AB));
        assert!(!has_valid_chip(&ctx, "angle-XYZ"));
        assert!(has_valid_chip(&ctx, COMMON_AD));
    }
}
