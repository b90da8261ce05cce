//! Step sequencing for the folding lesson.
//!
//! Flow: `action → inquiry → discovery → misconception → justification →
//! completed`, with `SkipDiscovery` (discovery → justification),
//! `BackToDiscovery` (justification → discovery), `ProceedToPrev` from every
//! non-initial step and `ResetModule` from everywhere.
//!
//! Guards are pure functions of the context (`guards`). `SetFoldAngle` is
//! accepted in every step so the fold stays live. Step text for the UI lives in
//! `metadata`.
//!
//! The machine stores chip ids only; `ChipRegistry` stays the authority on
//! whether a chip may be collected (see `session::ActivitySession`).

pub mod guards;
mod machine;
mod metadata;
mod types;

pub use machine::{system_clock_ms, ActivityMachine, Clock};
pub use metadata::{step_metadata, AnswerOption, StepMeta};
pub use types::{ActivityContext, Event, Step};
