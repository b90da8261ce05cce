use super::*;
use crate::congruence::CongruenceKind;
use crate::geom::{angle_bisector_intersection, Point, Triangle};

fn iso() -> Triangle {
    Triangle::from_xy([(2.0, 0.5), (1.0, 2.5), (3.0, 2.5)])
}

fn ready_registry() -> (ChipRegistry, Triangle, Option<Point>) {
    let t = iso();
    let d = Some(angle_bisector_intersection(&t));
    let mut reg = ChipRegistry::default();
    reg.update_availability(&t, d);
    (reg, t, d)
}

#[test]
fn fresh_registry_has_nothing_available() {
    let reg = ChipRegistry::default();
    assert_eq!(reg.chips().len(), CHIP_DEFINITIONS.len());
    assert!(reg.chips().iter().all(|c| !c.collected && !c.is_available));
    assert!(reg.available_chips().is_empty());
    assert_eq!(reg.progress().collected, 0);
}

#[test]
fn availability_follows_the_fold_point() {
    let t = iso();
    let mut reg = ChipRegistry::default();
    reg.update_availability(&t, None);
    let ids: Vec<&str> = reg.available_chips().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![GIVEN_AB_AC, SIDE_AB, SIDE_AC]);

    reg.update_availability(&t, Some(angle_bisector_intersection(&t)));
    assert_eq!(reg.available_chips().len(), CHIP_DEFINITIONS.len());
}

#[test]
fn collect_twice_succeeds_once() {
    let (mut reg, t, d) = ready_registry();
    assert!(reg.collect_chip(SIDE_AB, &t, d));
    assert!(!reg.collect_chip(SIDE_AB, &t, d));
    assert!(reg.chip(SIDE_AB).unwrap().collected);
    assert_eq!(reg.collected_ids(), &[SIDE_AB.to_string()]);
}

#[test]
fn collect_rejects_unknown_unavailable_and_stale() {
    let t = iso();
    let d = Some(angle_bisector_intersection(&t));
    let mut reg = ChipRegistry::default();
    assert!(!reg.collect_chip("side-XY", &t, d));
    // Not yet marked available.
    assert!(!reg.collect_chip(COMMON_AD, &t, d));

    reg.update_availability(&t, d);
    // Cached as available, but the fold point is gone at collection time.
    assert!(!reg.collect_chip(COMMON_AD, &t, None));
    assert!(!reg.chip(COMMON_AD).unwrap().is_available);
    assert!(reg.collected_ids().is_empty());
}

#[test]
fn uncollect_reverses_and_rejects_uncollected() {
    let (mut reg, t, d) = ready_registry();
    assert!(!reg.uncollect_chip(ANGLE_BAD));
    assert!(reg.collect_chip(ANGLE_BAD, &t, d));
    assert!(reg.collect_chip(ANGLE_CAD, &t, d));
    assert!(reg.uncollect_chip(ANGLE_BAD));
    assert!(!reg.chip(ANGLE_BAD).unwrap().collected);
    assert_eq!(reg.collected_ids(), &[ANGLE_CAD.to_string()]);
    // Collectable again.
    assert!(reg.collect_chip(ANGLE_BAD, &t, d));
}

#[test]
fn progress_never_exceeds_total() {
    let (mut reg, t, d) = ready_registry();
    for def in CHIP_DEFINITIONS.iter() {
        reg.collect_chip(def.id, &t, d);
        reg.collect_chip(def.id, &t, d);
        let p = reg.progress();
        assert!(p.collected <= p.total);
    }
    assert_eq!(reg.progress().percentage, 100);
    assert_eq!(reg.collected_chips().len(), CHIP_DEFINITIONS.len());
}

#[test]
fn sas_set_completion_predicate() {
    assert!(!is_sas_chip_set_complete(&[SIDE_AB, SIDE_AC, COMMON_AD]));
    assert!(is_sas_chip_set_complete(&[
        SIDE_AB, SIDE_AC, COMMON_AD, ANGLE_BAD, ANGLE_CAD
    ]));
    let empty: [&str; 0] = [];
    assert!(!is_sas_chip_set_complete(&empty));
}

#[test]
fn validation_feedback_tiers() {
    let (mut reg, t, d) = ready_registry();
    let r = reg.validate_collection(&t, d);
    assert!(!r.is_valid);
    assert_eq!(r.missing_chips.len(), 5);
    assert_eq!(r.completion_percentage, 0);
    assert_eq!(r.congruence_type, None);
    assert!(r.feedback.starts_with("Keep exploring"));

    for id in [SIDE_AB, SIDE_AC, COMMON_AD] {
        assert!(reg.collect_chip(id, &t, d));
    }
    let r = reg.validate_collection(&t, d);
    assert_eq!(r.missing_chips, vec![ANGLE_BAD, ANGLE_CAD]);
    assert_eq!(r.completion_percentage, 60);
    assert_eq!(r.feedback, "2 pieces of evidence still missing.");

    assert!(reg.collect_chip(ANGLE_BAD, &t, d));
    let r = reg.validate_collection(&t, d);
    assert_eq!(r.feedback, "Almost there! Still missing: ∠CAD.");

    assert!(reg.collect_chip(ANGLE_CAD, &t, d));
    let r = reg.validate_collection(&t, d);
    assert!(r.is_valid);
    assert_eq!(r.congruence_type, Some(CongruenceKind::Sas));
    assert_eq!(r.completion_percentage, 100);
    assert!(reg.check_sas_completion());
}

#[test]
fn complete_evidence_without_fold_point_is_not_valid() {
    let (mut reg, t, d) = ready_registry();
    for id in REQUIRED_SAS_CHIPS {
        assert!(reg.collect_chip(id, &t, d));
    }
    let r = reg.validate_collection(&t, None);
    assert!(!r.is_valid);
    assert!(r.missing_chips.is_empty());
    assert_eq!(reg.next_hint(&t, None), reg.validate_collection(&t, None).feedback);
}

#[test]
fn hints_follow_required_order() {
    let (mut reg, t, d) = ready_registry();
    assert_eq!(reg.next_hint(&t, d), reg.chip(ANGLE_BAD).unwrap().hint);
    assert!(reg.collect_chip(ANGLE_BAD, &t, d));
    assert_eq!(reg.next_hint(&t, d), reg.chip(ANGLE_CAD).unwrap().hint);
    for id in [ANGLE_CAD, SIDE_AB, SIDE_AC, COMMON_AD] {
        assert!(reg.collect_chip(id, &t, d));
    }
    assert!(reg.next_hint(&t, d).starts_with("All the evidence is in"));
}

#[test]
fn export_import_round_trip() {
    let (mut reg, t, d) = ready_registry();
    assert!(reg.collect_chip(COMMON_AD, &t, d));
    assert!(reg.collect_chip(SIDE_AB, &t, d));
    let state = reg.export_state();
    assert_eq!(state.collected_chips, vec![COMMON_AD, SIDE_AB]);

    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"collectedChips\""));
    assert!(json.contains("\"isAvailable\""));
    let parsed: ChipRegistryState = serde_json::from_str(&json).unwrap();

    let mut restored = ChipRegistry::default();
    restored.import_state(&parsed);
    assert_eq!(restored.export_state(), state);
    assert_eq!(restored.chips(), reg.chips());
    // Rules come back from the static catalogue.
    assert_eq!(restored.chip(COMMON_AD).unwrap().rule, Some(ChipRule::FoldPointOnBase));
}

#[test]
fn import_skips_unknown_ids() {
    let mut state = ChipRegistryState::default();
    state.collected_chips = vec!["bogus".into(), SIDE_AB.into(), SIDE_AB.into()];
    state.chip_states.insert(
        "bogus".into(),
        ChipState {
            collected: true,
            is_available: true,
        },
    );
    let mut reg = ChipRegistry::default();
    reg.import_state(&state);
    assert_eq!(reg.collected_ids(), &[SIDE_AB.to_string()]);
    assert!(reg.chip(SIDE_AB).unwrap().collected);
    assert!(reg.chip("bogus").is_none());
}

#[test]
fn reset_restores_fresh_state() {
    let (mut reg, t, d) = ready_registry();
    assert!(reg.collect_chip(SIDE_AB, &t, d));
    reg.reset();
    assert!(reg.collected_ids().is_empty());
    assert_eq!(reg.export_state(), ChipRegistry::default().export_state());
}
