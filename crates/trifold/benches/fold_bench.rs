//! Criterion benchmarks for the fold model and a scripted session.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use trifold::activity::Event;
use trifold::chips::REQUIRED_SAS_CHIPS;
use trifold::fold::{detect_overlap, fold_triangle_along_bisector, generate_fold_keyframes, FoldCfg};
use trifold::geom::rand::{draw_triangle, ReplayToken, TriangleCfg};
use trifold::session::ActivitySession;

fn bench_fold(c: &mut Criterion) {
    let cfg = FoldCfg::default();
    let t = draw_triangle(TriangleCfg::isosceles(), ReplayToken::new(3, 0));
    let mut group = c.benchmark_group("fold");
    for &angle in &[45.0, 120.0, 175.0] {
        group.bench_with_input(BenchmarkId::new("fold_triangle", angle as u32), &angle, |b, &a| {
            b.iter(|| fold_triangle_along_bisector(&t, a))
        });
        group.bench_with_input(BenchmarkId::new("detect_overlap", angle as u32), &angle, |b, &a| {
            b.iter(|| detect_overlap(&t, a, &cfg))
        });
    }
    for &steps in &[10usize, 30, 120] {
        group.bench_with_input(BenchmarkId::new("keyframes", steps), &steps, |b, &n| {
            b.iter(|| generate_fold_keyframes(0.0, 180.0, n).sum::<f64>())
        });
    }
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let t = draw_triangle(TriangleCfg::isosceles(), ReplayToken::new(5, 0));
    let mut script = vec![
        Event::SetFoldAngle { angle: 120.0 },
        Event::CompleteStep,
        Event::SelectAnswer {
            answer: "congruence".into(),
        },
        Event::CompleteStep,
    ];
    script.extend(REQUIRED_SAS_CHIPS.iter().map(|id| Event::CollectChip {
        chip_id: id.to_string(),
    }));
    script.push(Event::CompleteStep);

    c.bench_function("session/full_discovery_script", |b| {
        b.iter_batched(
            || (ActivitySession::new(t), script.clone()),
            |(mut s, events)| {
                for ev in events {
                    s.dispatch(ev);
                }
                s.validate()
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_fold, bench_session);
criterion_main!(benches);
