use std::time::{SystemTime, UNIX_EPOCH};

use super::guards::{
    can_proceed_from_action, can_proceed_from_discovery, can_proceed_from_inquiry, has_valid_chip,
    MIN_FOLD_ANGLE_DEG,
};
use super::metadata::{step_metadata, StepMeta};
use super::types::{ActivityContext, Event, Step};
use crate::error::GuardFailure;
use crate::fold::clamp_fold_angle;

/// Source of `completed_at` stamps (ms since the Unix epoch).
pub type Clock = fn() -> u64;

pub fn system_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Guarded state machine over one `ActivityContext`.
///
/// Events are applied one at a time, in dispatch order. A rejected event
/// leaves the step unchanged; a rejected `CompleteStep`/`ProceedToNext`
/// additionally records the reason in `context().error`.
#[derive(Clone, Debug)]
pub struct ActivityMachine {
    step: Step,
    ctx: ActivityContext,
    clock: Clock,
}

impl Default for ActivityMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityMachine {
    pub fn new() -> Self {
        Self::with_clock(system_clock_ms)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            step: Step::Action,
            ctx: ActivityContext::initial(),
            clock,
        }
    }

    #[inline]
    pub fn state(&self) -> Step {
        self.step
    }

    #[inline]
    pub fn context(&self) -> &ActivityContext {
        &self.ctx
    }

    /// Display metadata of the current step.
    #[inline]
    pub fn metadata(&self) -> &'static StepMeta {
        step_metadata(self.step)
    }

    /// Whether `event` would be accepted in the current state.
    pub fn can(&self, event: &Event) -> bool {
        match event {
            Event::SetFoldAngle { .. }
            | Event::HighlightElements { .. }
            | Event::ResetModule
            | Event::Error { .. } => true,
            Event::CollectChip { chip_id } => {
                self.step == Step::Discovery && has_valid_chip(&self.ctx, chip_id)
            }
            Event::UncollectChip { chip_id } => self.ctx.has_chip(chip_id),
            Event::SelectAnswer { .. } => matches!(self.step, Step::Inquiry | Step::Misconception),
            Event::CompleteStep | Event::ProceedToNext => {
                self.step.next().is_some() && self.guard_failure().is_none()
            }
            Event::ProceedToPrev => self.step.prev().is_some(),
            Event::SkipDiscovery => self.step == Step::Discovery,
            Event::BackToDiscovery => self.step == Step::Justification,
        }
    }

    /// Apply one event and return the resulting step.
    pub fn dispatch(&mut self, event: Event) -> Step {
        let from = self.step;
        match event {
            Event::SetFoldAngle { angle } => self.ctx.fold_angle = clamp_fold_angle(angle),
            Event::HighlightElements { elements } => {
                self.ctx.highlighted_elements = elements.into_iter().collect();
            }
            Event::Error { error } => self.ctx.error = Some(error),
            Event::ResetModule => self.reset(),
            Event::CollectChip { chip_id } => {
                if self.step == Step::Discovery && has_valid_chip(&self.ctx, &chip_id) {
                    self.ctx.collected_chips.push(chip_id);
                }
            }
            Event::UncollectChip { chip_id } => self.ctx.collected_chips.retain(|c| *c != chip_id),
            Event::SelectAnswer { answer } => {
                if matches!(self.step, Step::Inquiry | Step::Misconception) {
                    self.ctx.selected_answer = Some(answer);
                }
            }
            Event::CompleteStep | Event::ProceedToNext => self.advance(),
            Event::ProceedToPrev => {
                if let Some(prev) = self.step.prev() {
                    self.enter(prev);
                }
            }
            Event::SkipDiscovery => {
                if self.step == Step::Discovery {
                    self.ctx.step_completion.insert(Step::Discovery, true);
                    self.enter(Step::Justification);
                }
            }
            Event::BackToDiscovery => {
                if self.step == Step::Justification {
                    self.enter(Step::Discovery);
                }
            }
        }
        if self.step != from {
            tracing::debug!(from = %from, to = %self.step, "activity step changed");
        }
        self.step
    }

    fn guard_failure(&self) -> Option<GuardFailure> {
        match self.step {
            Step::Action if !can_proceed_from_action(&self.ctx) => Some(GuardFailure::FoldTooShallow {
                angle: self.ctx.fold_angle,
                required: MIN_FOLD_ANGLE_DEG,
            }),
            Step::Inquiry if !can_proceed_from_inquiry(&self.ctx) => Some(GuardFailure::WrongAnswer),
            Step::Discovery if !can_proceed_from_discovery(&self.ctx) => {
                Some(GuardFailure::MissingEvidence)
            }
            _ => None,
        }
    }

    fn advance(&mut self) {
        let Some(next) = self.step.next() else {
            return;
        };
        if let Some(failure) = self.guard_failure() {
            tracing::debug!(step = %self.step, %failure, "guard rejected transition");
            self.ctx.error = Some(failure.to_string());
            return;
        }
        self.ctx.step_completion.insert(self.step, true);
        self.enter(next);
    }

    fn enter(&mut self, step: Step) {
        self.step = step;
        self.ctx.error = None;
        if step == Step::Completed {
            self.ctx.completed_at = Some((self.clock)());
        }
    }

    fn reset(&mut self) {
        self.step = Step::Action;
        self.ctx = ActivityContext::initial();
    }
}
