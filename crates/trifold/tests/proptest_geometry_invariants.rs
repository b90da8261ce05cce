//! Property-based invariant tests for the lesson core.
//!
//! 1. Measured interior angles of a non-degenerate triangle sum to 180°.
//! 2. `is_equal` is symmetric.
//! 3. Every valid triangle is SAS-congruent to itself.
//! 4. Rigid copies (mirrored or not) are found congruent.
//! 5. Reflecting twice across the same line is the identity.
//! 6. `clamp_fold_angle` always lands in [0, 180].
//! 7. Keyframes: `steps + 1` values from `start` to `end`.
//! 8. Session: machine and registry agree on the collected chips after any
//!    event sequence, and `RESET_MODULE` restores the initial context.

use proptest::prelude::*;
use trifold::activity::{ActivityContext, Event, Step};
use trifold::chips::CHIP_DEFINITIONS;
use trifold::congruence::{check_congruence, CongruenceKind};
use trifold::fold::{clamp_fold_angle, generate_fold_keyframes};
use trifold::geom::rand::{draw_triangle, rigid_copy, ReplayToken, TriangleCfg};
use trifold::geom::{area, is_equal, measure_triangle, reflect_point, Point, Tolerances, Triangle};
use trifold::session::ActivitySession;

// ── Strategy helpers ──────────────────────────────────────────────────

fn point_strategy() -> impl Strategy<Value = Point> {
    (-10.0f64..10.0, -10.0f64..10.0).prop_map(|(x, y)| Point::new(x, y))
}

fn triangle_strategy() -> impl Strategy<Value = Triangle> {
    (point_strategy(), point_strategy(), point_strategy())
        .prop_map(|(a, b, c)| Triangle::new(a, b, c))
        .prop_filter("non-degenerate", |t| area(t) > 1e-2)
}

fn token_strategy() -> impl Strategy<Value = ReplayToken> {
    (any::<u64>(), any::<u64>()).prop_map(|(s, i)| ReplayToken::new(s, i))
}

fn chip_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0..CHIP_DEFINITIONS.len()).prop_map(|i| CHIP_DEFINITIONS[i].id.to_string()),
        Just("angle-XYZ".to_string()),
    ]
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        (-20.0f64..200.0).prop_map(|angle| Event::SetFoldAngle { angle }),
        chip_id_strategy().prop_map(|chip_id| Event::CollectChip { chip_id }),
        chip_id_strategy().prop_map(|chip_id| Event::UncollectChip { chip_id }),
        prop_oneof![Just("congruence"), Just("similarity"), Just("needs-proof")]
            .prop_map(|a| Event::SelectAnswer { answer: a.to_string() }),
        Just(Event::CompleteStep),
        Just(Event::ProceedToNext),
        Just(Event::ProceedToPrev),
        Just(Event::SkipDiscovery),
        Just(Event::BackToDiscovery),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Angle sum
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn angles_sum_to_180(t in triangle_strategy()) {
        let sum = measure_triangle(&t).angles.sum();
        prop_assert!((sum - 180.0).abs() < 1e-6, "angle sum {} for {:?}", sum, t);
    }

    #[test]
    fn sampled_angles_sum_to_180(tok in token_strategy()) {
        let t = draw_triangle(TriangleCfg::default(), tok);
        prop_assert!((measure_triangle(&t).angles.sum() - 180.0).abs() < 1e-6);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Equality symmetry
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn is_equal_symmetric(a in -1e3f64..1e3, b in -1e3f64..1e3, tol in 0.0f64..1.0) {
        prop_assert_eq!(is_equal(a, b, tol), is_equal(b, a, tol));
        prop_assert!(is_equal(a, a, tol));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–4. Congruence of a triangle with itself and with rigid copies
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn triangle_is_sas_congruent_to_itself(t in triangle_strategy()) {
        let tol = Tolerances::default();
        let cond = check_congruence(&t, &t, &tol);
        prop_assert_eq!(cond.map(|c| c.kind), Some(CongruenceKind::Sas));
    }

    #[test]
    fn rigid_copies_are_congruent(tok in token_strategy(), reflect in any::<bool>()) {
        let tol = Tolerances::default();
        let t = draw_triangle(TriangleCfg::default(), tok);
        let u = rigid_copy(&t, tok.next(), reflect);
        prop_assert!(check_congruence(&t, &u, &tol).is_some(), "{:?} vs {:?}", t, u);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Reflection is an involution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reflect_twice_is_identity(p in point_strategy(), s in point_strategy(), e in point_strategy()) {
        prop_assume!((e - s).norm() > 1e-1);
        let back = reflect_point(reflect_point(p, s, e), s, e);
        prop_assert!((back - p).norm() < 1e-8, "{:?} -> {:?}", p, back);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6–7. Fold angle range and keyframes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clamp_stays_in_range(angle in any::<f64>()) {
        let c = clamp_fold_angle(angle);
        prop_assert!((0.0..=180.0).contains(&c), "{} -> {}", angle, c);
    }

    #[test]
    fn keyframes_span_start_to_end(start in 0.0f64..180.0, end in 0.0f64..180.0, steps in 0usize..200) {
        let frames: Vec<f64> = generate_fold_keyframes(start, end, steps).collect();
        prop_assert_eq!(frames.len(), steps + 1);
        let last = frames[frames.len() - 1];
        prop_assert!((last - end).abs() < 1e-9);
        if steps > 0 {
            prop_assert!((frames[0] - start).abs() < 1e-12);
        }
        let (lo, hi) = (start.min(end), start.max(end));
        prop_assert!(frames.iter().all(|f| *f >= lo - 1e-9 && *f <= hi + 1e-9));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Session synchronization and reset
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn session_views_stay_in_sync(events in prop::collection::vec(event_strategy(), 0..60)) {
        let t = Triangle::from_xy([(2.0, 0.5), (1.0, 2.5), (3.0, 2.5)]);
        let mut s = ActivitySession::new(t);
        for ev in events {
            s.dispatch(ev);
            prop_assert_eq!(
                s.machine().context().collected_chips.as_slice(),
                s.registry().collected_ids()
            );
            let angle = s.machine().context().fold_angle;
            prop_assert!((0.0..=180.0).contains(&angle));
        }
        prop_assert_eq!(s.dispatch(Event::ResetModule), Step::Action);
        prop_assert_eq!(s.machine().context(), &ActivityContext::initial());
        prop_assert!(s.registry().collected_ids().is_empty());
    }
}
