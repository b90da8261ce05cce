use std::collections::BTreeMap;

use super::types::{
    Chip, ChipRegistryState, ChipState, ChipValidationResult, Progress, CHIP_DEFINITIONS,
    REQUIRED_SAS_CHIPS,
};
use crate::congruence::{check_folded_triangle_congruence, CongruenceKind};
use crate::geom::{Point, Tolerances, Triangle};

const COMPLETE_HINT: &str = "All the evidence is in. Justify why the two halves are congruent.";
const GENERIC_HINT: &str = "Check the fold again: the evidence must match the folded figure.";

/// Owner of all chips for one session.
///
/// Availability is a cache refreshed by `update_availability`. `collect_chip`
/// re-checks the chip's rule against the geometry passed to it.
#[derive(Clone, Debug)]
pub struct ChipRegistry {
    chips: Vec<Chip>,
    collected: Vec<String>,
    tol: Tolerances,
}

impl Default for ChipRegistry {
    fn default() -> Self {
        Self::new(Tolerances::default())
    }
}

impl ChipRegistry {
    pub fn new(tol: Tolerances) -> Self {
        Self {
            chips: CHIP_DEFINITIONS.iter().map(Chip::from).collect(),
            collected: Vec::new(),
            tol,
        }
    }

    /// All chips in display order.
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn chip(&self, id: &str) -> Option<&Chip> {
        self.chips.iter().find(|c| c.id == id)
    }

    /// Collected ids in collection order.
    pub fn collected_ids(&self) -> &[String] {
        &self.collected
    }

    /// Re-run every chip's rule. Chips without a rule are always available.
    pub fn update_availability(&mut self, triangle: &Triangle, fold_point: Option<Point>) {
        let tol = self.tol;
        for chip in &mut self.chips {
            chip.is_available = chip
                .rule
                .map_or(true, |rule| rule.evaluate(triangle, fold_point, &tol));
        }
        tracing::debug!(
            available = self.chips.iter().filter(|c| c.is_available).count(),
            "chip availability refreshed"
        );
    }

    /// Collect `id`. Returns `false` if the chip is unknown, already collected,
    /// not available, or its rule fails on the geometry passed here.
    pub fn collect_chip(&mut self, id: &str, triangle: &Triangle, fold_point: Option<Point>) -> bool {
        let tol = self.tol;
        let Some(chip) = self.chips.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        if chip.collected || !chip.is_available {
            return false;
        }
        if let Some(rule) = chip.rule {
            if !rule.evaluate(triangle, fold_point, &tol) {
                chip.is_available = false;
                return false;
            }
        }
        chip.collected = true;
        self.collected.push(chip.id.clone());
        tracing::debug!(chip = id, collected = self.collected.len(), "chip collected");
        true
    }

    /// Undo a collection. Returns `false` if `id` is not currently collected.
    pub fn uncollect_chip(&mut self, id: &str) -> bool {
        let Some(chip) = self.chips.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        if !chip.collected {
            return false;
        }
        chip.collected = false;
        self.collected.retain(|c| c != id);
        tracing::debug!(chip = id, "chip uncollected");
        true
    }

    /// Chips that can be collected right now.
    pub fn available_chips(&self) -> Vec<&Chip> {
        self.chips
            .iter()
            .filter(|c| c.is_available && !c.collected)
            .collect()
    }

    /// Collected chips in collection order.
    pub fn collected_chips(&self) -> Vec<&Chip> {
        self.collected.iter().filter_map(|id| self.chip(id)).collect()
    }

    pub fn progress(&self) -> Progress {
        let total = self.chips.len();
        let collected = self.collected.len().min(total);
        Progress {
            collected,
            total,
            percentage: percent(collected, total),
        }
    }

    /// Whether the collected ids cover every required SAS chip.
    pub fn check_sas_completion(&self) -> bool {
        is_sas_chip_set_complete(self.collected.as_slice())
    }

    /// Check the collection against the SAS argument. Complete evidence is
    /// valid only if `fold_point` splits `triangle` into SAS-congruent halves.
    pub fn validate_collection(&self, triangle: &Triangle, fold_point: Option<Point>) -> ChipValidationResult {
        let missing: Vec<String> = REQUIRED_SAS_CHIPS
            .iter()
            .filter(|id| !self.collected.iter().any(|c| c == *id))
            .map(|id| id.to_string())
            .collect();
        let have = REQUIRED_SAS_CHIPS.len() - missing.len();
        let confirmed = fold_point
            .and_then(|d| check_folded_triangle_congruence(triangle, d, &self.tol))
            .is_some();
        let is_valid = missing.is_empty() && confirmed;
        let feedback = if is_valid {
            "SAS: AB = AC, ∠BAD = ∠CAD and AD is shared, so the halves are congruent.".to_string()
        } else {
            match missing.len() {
                0 => GENERIC_HINT.to_string(),
                1 => format!("Almost there! Still missing: {}.", self.label_of(&missing[0])),
                n if n <= 2 => format!("{n} pieces of evidence still missing."),
                _ => "Keep exploring the fold to find more matching parts.".to_string(),
            }
        };
        ChipValidationResult {
            is_valid,
            congruence_type: is_valid.then_some(CongruenceKind::Sas),
            missing_chips: missing,
            completion_percentage: percent(have, REQUIRED_SAS_CHIPS.len()),
            feedback,
        }
    }

    /// Hint for the first missing required chip, in `REQUIRED_SAS_CHIPS` order.
    pub fn next_hint(&self, triangle: &Triangle, fold_point: Option<Point>) -> String {
        let result = self.validate_collection(triangle, fold_point);
        if result.is_valid {
            return COMPLETE_HINT.to_string();
        }
        match result.missing_chips.first().and_then(|id| self.chip(id)) {
            Some(chip) => chip.hint.clone(),
            None => GENERIC_HINT.to_string(),
        }
    }

    pub fn export_state(&self) -> ChipRegistryState {
        ChipRegistryState {
            collected_chips: self.collected.clone(),
            chip_states: self
                .chips
                .iter()
                .map(|c| {
                    (
                        c.id.clone(),
                        ChipState {
                            collected: c.collected,
                            is_available: c.is_available,
                        },
                    )
                })
                .collect::<BTreeMap<_, _>>(),
        }
    }

    /// Restore from `export_state` output. The collected list is authoritative
    /// for `collected`; unknown ids are skipped with a warning.
    pub fn import_state(&mut self, state: &ChipRegistryState) {
        let mut collected: Vec<String> = Vec::with_capacity(state.collected_chips.len());
        for id in &state.collected_chips {
            if self.chip(id).is_none() {
                tracing::warn!(chip = %id, "ignoring unknown collected chip on import");
            } else if !collected.contains(id) {
                collected.push(id.clone());
            }
        }
        for id in state.chip_states.keys() {
            if self.chip(id).is_none() {
                tracing::warn!(chip = %id, "ignoring unknown chip state on import");
            }
        }
        for chip in &mut self.chips {
            chip.collected = collected.contains(&chip.id);
            chip.is_available = state
                .chip_states
                .get(&chip.id)
                .map_or(false, |s| s.is_available);
        }
        self.collected = collected;
    }

    /// Back to the freshly constructed state.
    pub fn reset(&mut self) {
        *self = Self::new(self.tol);
    }

    fn label_of(&self, id: &str) -> String {
        self.chip(id)
            .map_or_else(|| id.to_string(), |c| c.label.clone())
    }
}

/// True iff `ids` contains every id in `REQUIRED_SAS_CHIPS`.
pub fn is_sas_chip_set_complete<S: AsRef<str>>(ids: &[S]) -> bool {
    REQUIRED_SAS_CHIPS
        .iter()
        .all(|req| ids.iter().any(|id| id.as_ref() == *req))
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
