//! Random practice triangles (seeded, replayable).
//!
//! Purpose
//! - Generate exercise triangles and congruent copies of them (rotated,
//!   translated, optionally mirrored) for practice rounds, tests and benches.
//!
//! Model
//! - Base `BC` is horizontal at `y = height`, apex `A` sits above the base
//!   midpoint shifted by a bounded fraction of the base. Shift 0 gives an
//!   isosceles triangle.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Matrix2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, Triangle};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TriangleCfg {
    /// Base length range `[min, max]`.
    pub base: (f64, f64),
    /// Height range `[min, max]`.
    pub height: (f64, f64),
    /// Max apex shift as a fraction of the base. Clamped to [0, 0.49].
    pub apex_shift_frac: f64,
}

impl Default for TriangleCfg {
    fn default() -> Self {
        Self {
            base: (2.0, 6.0),
            height: (1.5, 5.0),
            apex_shift_frac: 0.3,
        }
    }
}

impl TriangleCfg {
    /// Isosceles-only variant (apex over the base midpoint).
    pub fn isosceles() -> Self {
        Self {
            apex_shift_frac: 0.0,
            ..Self::default()
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

fn sample_range<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    let lo = lo.max(1e-6);
    let hi = hi.max(lo);
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

/// Draw a valid triangle with the apex near the origin.
pub fn draw_triangle(cfg: TriangleCfg, tok: ReplayToken) -> Triangle {
    let mut rng = tok.to_std_rng();
    let base = sample_range(&mut rng, cfg.base);
    let height = sample_range(&mut rng, cfg.height);
    let shift_frac = cfg.apex_shift_frac.clamp(0.0, 0.49);
    let shift = (rng.gen::<f64>() * 2.0 - 1.0) * shift_frac * base;
    Triangle::new(
        Point::new(shift, 0.0),
        Point::new(-base * 0.5, height),
        Point::new(base * 0.5, height),
    )
}

/// Congruent copy of `t` under a random rotation and translation, optionally
/// mirrored first. Vertex labels are preserved.
pub fn rigid_copy(t: &Triangle, tok: ReplayToken, reflect: bool) -> Triangle {
    let mut rng = tok.to_std_rng();
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let offset = Point::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
    let rot = Matrix2::new(theta.cos(), -theta.sin(), theta.sin(), theta.cos());
    let m = if reflect {
        rot * Matrix2::new(-1.0, 0.0, 0.0, 1.0)
    } else {
        rot
    };
    t.map(|p| m * p + offset)
}
