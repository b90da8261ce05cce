//! One learner session: a triangle, its chip registry and the activity machine.
//!
//! The registry is the single authority on chip collection. The machine only
//! mirrors the collected ids, and `dispatch` forwards a chip event to it only
//! after the registry accepted it, so both views stay equal.

use serde::{Deserialize, Serialize};

use crate::activity::{ActivityContext, ActivityMachine, Clock, Event, Step};
use crate::chips::{ChipRegistry, ChipRegistryState, ChipValidationResult, Progress};
use crate::fold::{calculate_feedback_intensity, detect_overlap, FeedbackTier, FoldCfg, OverlapReport};
use crate::geom::{angle_bisector_intersection, Point, Tolerances, Triangle};

/// Tunables of a session. Also the shape of the CLI `--config` file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionCfg {
    pub tolerances: Tolerances,
    pub fold: FoldCfg,
}

/// Plain-data view of a session for persistence and display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub step: Step,
    pub context: ActivityContext,
    pub chips: ChipRegistryState,
    pub progress: Progress,
    pub fold_point: Option<Point>,
}

#[derive(Clone, Debug)]
pub struct ActivitySession {
    triangle: Triangle,
    cfg: SessionCfg,
    registry: ChipRegistry,
    machine: ActivityMachine,
}

impl ActivitySession {
    pub fn new(triangle: Triangle) -> Self {
        Self::with_config(triangle, SessionCfg::default())
    }

    pub fn with_config(triangle: Triangle, cfg: SessionCfg) -> Self {
        let mut session = Self {
            triangle,
            cfg,
            registry: ChipRegistry::new(cfg.tolerances),
            machine: ActivityMachine::new(),
        };
        session.refresh_availability();
        session
    }

    /// Replace the clock used for `completed_at`. Restarts the machine.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.machine = ActivityMachine::with_clock(clock);
        self.registry.reset();
        self.refresh_availability();
        self
    }

    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    pub fn config(&self) -> &SessionCfg {
        &self.cfg
    }

    pub fn registry(&self) -> &ChipRegistry {
        &self.registry
    }

    pub fn machine(&self) -> &ActivityMachine {
        &self.machine
    }

    #[inline]
    pub fn state(&self) -> Step {
        self.machine.state()
    }

    /// Apply one event. Chip events go through the registry first and are
    /// dropped when it rejects them; returns the resulting step.
    pub fn dispatch(&mut self, event: Event) -> Step {
        match &event {
            Event::CollectChip { chip_id } => {
                if !self.machine.can(&event) {
                    tracing::debug!(chip = %chip_id, step = %self.state(), "collect rejected by activity");
                    return self.state();
                }
                let fold_point = self.fold_point();
                if !self.registry.collect_chip(chip_id, &self.triangle, fold_point) {
                    tracing::debug!(chip = %chip_id, "collect rejected by registry");
                    return self.state();
                }
            }
            Event::UncollectChip { chip_id } => {
                if !self.registry.uncollect_chip(chip_id) {
                    return self.state();
                }
            }
            Event::ResetModule => self.registry.reset(),
            _ => {}
        }
        let refresh = matches!(event, Event::SetFoldAngle { .. } | Event::ResetModule);
        let step = self.machine.dispatch(event);
        if refresh {
            self.refresh_availability();
        }
        step
    }

    /// Foot `D` of the apex bisector, once the fold shows the crease.
    pub fn fold_point(&self) -> Option<Point> {
        (self.machine.context().fold_angle >= self.cfg.fold.crease_visible_deg)
            .then(|| angle_bisector_intersection(&self.triangle))
    }

    pub fn overlap(&self) -> OverlapReport {
        detect_overlap(&self.triangle, self.machine.context().fold_angle, &self.cfg.fold)
    }

    pub fn feedback(&self) -> FeedbackTier {
        calculate_feedback_intensity(self.machine.context().fold_angle, &self.cfg.fold)
    }

    pub fn validate(&self) -> ChipValidationResult {
        self.registry.validate_collection(&self.triangle, self.fold_point())
    }

    pub fn next_hint(&self) -> String {
        self.registry.next_hint(&self.triangle, self.fold_point())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            step: self.state(),
            context: self.machine.context().clone(),
            chips: self.registry.export_state(),
            progress: self.registry.progress(),
            fold_point: self.fold_point(),
        }
    }

    fn refresh_availability(&mut self) {
        let fold_point = self.fold_point();
        self.registry.update_availability(&self.triangle, fold_point);
    }
}
