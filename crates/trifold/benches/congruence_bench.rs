//! Criterion benchmarks for the congruence criteria.
//! Pairs are rigid copies (rule found early) or perturbed copies (all rules fail).
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use trifold::congruence::{check_congruence, check_rha, check_rhs, check_sss};
use trifold::geom::rand::{draw_triangle, rigid_copy, ReplayToken, TriangleCfg};
use trifold::geom::{Tolerances, Triangle};

fn pairs(n: usize, seed: u64, reflect: bool, perturb: f64) -> Vec<(Triangle, Triangle)> {
    let mut tok = ReplayToken::new(seed, 0);
    (0..n)
        .map(|_| {
            let t = draw_triangle(TriangleCfg::default(), tok);
            let mut u = rigid_copy(&t, tok, reflect);
            u.c.x += perturb;
            tok = tok.next();
            (t, u)
        })
        .collect()
}

fn bench_congruence(c: &mut Criterion) {
    let tol = Tolerances::default();
    let mut group = c.benchmark_group("congruence");
    for (name, reflect, perturb) in [("rigid", false, 0.0), ("mirrored", true, 0.0), ("perturbed", false, 0.3)] {
        let ps = pairs(64, 17, reflect, perturb);
        group.bench_with_input(BenchmarkId::new("check_congruence", name), &ps, |b, ps| {
            b.iter(|| {
                ps.iter()
                    .filter(|(t, u)| check_congruence(t, u, &tol).is_some())
                    .count()
            })
        });
        group.bench_with_input(BenchmarkId::new("check_sss", name), &ps, |b, ps| {
            b.iter(|| ps.iter().filter(|(t, u)| check_sss(t, u, &tol).is_some()).count())
        });
    }
    let right = Triangle::from_xy([(0.0, 0.0), (3.0, 0.0), (0.0, 4.0)]);
    let right2 = Triangle::from_xy([(4.0, 0.0), (0.0, 0.0), (0.0, 3.0)]);
    group.bench_function("check_rhs_right", |b| b.iter(|| check_rhs(&right, &right2, &tol)));
    group.bench_function("check_rha_right", |b| b.iter(|| check_rha(&right, &right2, &tol)));
    group.finish();
}

criterion_group!(benches, bench_congruence);
criterion_main!(benches);
