//! Paper-fold model along the apex angle bisector.
//!
//! Purpose
//! - Split a triangle along `AD` (D = bisector foot on `BC`) into a left half
//!   `(A, B, D)` and a right half `(A, D, C)` and describe how much of them
//!   overlaps at a given fold angle.
//! - Turn the fold angle into coarse feedback tiers and animation keyframes.
//!
//! Model
//! - The fold angle runs from 0° (flat, unfolded) to 180° (folded over).
//! - `overlap_area` is a heuristic: `min(area) · sin(angle) · 0.5` above 90°.
//!   It is not a polygon intersection.
//! - All thresholds live in `FoldCfg` so the lesson can be tuned without
//!   touching the code.

use serde::{Deserialize, Serialize};

use crate::geom::{angle_bisector_intersection, area, distance, is_valid_triangle, Point, Triangle};

/// Pedagogical tuning constants for the fold model (degrees).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoldCfg {
    /// Above this angle the halves start to overlap.
    pub overlap_start_deg: f64,
    /// From here base angles `B` and `C` lie on each other.
    pub angle_overlap_deg: f64,
    /// From here the two segments of `BC` coincide as well.
    pub segment_overlap_deg: f64,
    /// Step boundaries for `calculate_feedback_intensity`.
    pub feedback_breakpoints_deg: [f64; 3],
    /// From here the crease (and its foot `D`) counts as visible.
    pub crease_visible_deg: f64,
}

impl Default for FoldCfg {
    fn default() -> Self {
        Self {
            overlap_start_deg: 85.0,
            angle_overlap_deg: 90.0,
            segment_overlap_deg: 170.0,
            feedback_breakpoints_deg: [30.0, 80.0, 95.0],
            crease_visible_deg: 90.0,
        }
    }
}

/// Largest fold angle.
pub const MAX_FOLD_DEG: f64 = 180.0;

/// Clamp an external slider value into `[0, 180]`. NaN maps to 0.
#[inline]
pub fn clamp_fold_angle(angle: f64) -> f64 {
    if angle.is_nan() {
        0.0
    } else {
        angle.clamp(0.0, MAX_FOLD_DEG)
    }
}

/// Result of folding at one angle; recomputed per query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoldResult {
    /// `(A, D)`.
    pub fold_line: (Point, Point),
    pub left_triangle: Triangle,
    pub right_triangle: Triangle,
    pub overlap_area: f64,
    pub is_valid: bool,
}

/// Fold `t` along its apex bisector.
pub fn fold_triangle_along_bisector(t: &Triangle, fold_angle: f64) -> FoldResult {
    let d = angle_bisector_intersection(t);
    let left = Triangle::new(t.a, t.b, d);
    let right = Triangle::new(t.a, d, t.c);
    let overlap_area = if fold_angle > 90.0 {
        area(&left).min(area(&right)) * fold_angle.min(MAX_FOLD_DEG).to_radians().sin() * 0.5
    } else {
        0.0
    };
    FoldResult {
        fold_line: (t.a, d),
        left_triangle: left,
        right_triangle: right,
        overlap_area,
        is_valid: is_valid_triangle(t),
    }
}

/// Named overlapping parts, as reported by `detect_overlap`.
pub const OVERLAP_ANGLE_B: &str = "angle-B";
pub const OVERLAP_ANGLE_C: &str = "angle-C";
pub const OVERLAP_BASE_SEGMENTS: &str = "side-BC-segments";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapReport {
    pub is_overlapping: bool,
    /// 0–100.
    pub overlap_percentage: f64,
    pub overlapping_elements: Vec<String>,
}

impl OverlapReport {
    fn none() -> Self {
        Self {
            is_overlapping: false,
            overlap_percentage: 0.0,
            overlapping_elements: Vec::new(),
        }
    }
}

/// Which parts of the two halves lie on each other at `fold_angle`.
///
/// Invalid triangles never overlap.
pub fn detect_overlap(t: &Triangle, fold_angle: f64, cfg: &FoldCfg) -> OverlapReport {
    if !is_valid_triangle(t) || fold_angle <= cfg.overlap_start_deg {
        return OverlapReport::none();
    }
    let span = MAX_FOLD_DEG - cfg.overlap_start_deg;
    let frac = if span > 0.0 {
        ((fold_angle - cfg.overlap_start_deg) / span).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let mut elements = Vec::new();
    if fold_angle >= cfg.angle_overlap_deg {
        elements.push(OVERLAP_ANGLE_B.to_string());
        elements.push(OVERLAP_ANGLE_C.to_string());
    }
    if fold_angle >= cfg.segment_overlap_deg {
        elements.push(OVERLAP_BASE_SEGMENTS.to_string());
    }
    OverlapReport {
        is_overlapping: true,
        overlap_percentage: frac * 100.0,
        overlapping_elements: elements,
    }
}

/// One feedback tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FeedbackTier {
    pub intensity: f64,
    pub color: &'static str,
    pub message: &'static str,
}

/// Tiers below the first, second and third breakpoint, then at/above the third.
pub const FEEDBACK_TIERS: [FeedbackTier; 4] = [
    FeedbackTier {
        intensity: 0.2,
        color: "#9ca3af",
        message: "Start folding along the dashed line.",
    },
    FeedbackTier {
        intensity: 0.5,
        color: "#60a5fa",
        message: "Keep going, the two halves are coming together.",
    },
    FeedbackTier {
        intensity: 0.8,
        color: "#f59e0b",
        message: "Almost there. Watch angle B and angle C.",
    },
    FeedbackTier {
        intensity: 1.0,
        color: "#22c55e",
        message: "The halves line up exactly. What do you notice?",
    },
];

/// Step function over the fold angle; no interpolation between tiers.
pub fn calculate_feedback_intensity(fold_angle: f64, cfg: &FoldCfg) -> FeedbackTier {
    let idx = cfg
        .feedback_breakpoints_deg
        .iter()
        .position(|&bp| fold_angle < bp)
        .unwrap_or(FEEDBACK_TIERS.len() - 1);
    FEEDBACK_TIERS[idx]
}

/// Cubic ease-in-out on `[0, 1]`.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Default number of animation steps.
pub const DEFAULT_KEYFRAME_STEPS: usize = 30;

/// Eased fold angles from `start` to `end`, `steps + 1` values inclusive.
///
/// Pure and finite; clone it before consuming to replay the same sequence.
#[derive(Clone, Debug)]
pub struct FoldKeyframes {
    start: f64,
    end: f64,
    steps: usize,
    next: usize,
}

impl Iterator for FoldKeyframes {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next > self.steps {
            return None;
        }
        let i = self.next;
        self.next += 1;
        if self.steps == 0 {
            return Some(self.end);
        }
        let t = i as f64 / self.steps as f64;
        Some(self.start + (self.end - self.start) * ease_in_out_cubic(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.steps + 1).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for FoldKeyframes {}

pub fn generate_fold_keyframes(start: f64, end: f64, steps: usize) -> FoldKeyframes {
    FoldKeyframes {
        start,
        end,
        steps,
        next: 0,
    }
}

/// A fold line is acceptable when it starts at the apex `A`.
pub fn validate_fold(t: &Triangle, fold_line: (Point, Point), tol: f64) -> bool {
    distance(fold_line.0, t.a) <= tol
}
