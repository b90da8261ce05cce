//! Steps, events and the shared context of the activity.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Pedagogical steps, in flow order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Action,
    Inquiry,
    Discovery,
    Misconception,
    Justification,
    Completed,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Action,
        Step::Inquiry,
        Step::Discovery,
        Step::Misconception,
        Step::Justification,
        Step::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Step::Action => "action",
            Step::Inquiry => "inquiry",
            Step::Discovery => "discovery",
            Step::Misconception => "misconception",
            Step::Justification => "justification",
            Step::Completed => "completed",
        }
    }

    /// Following step in the main flow; `None` for `Completed`.
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Action => Some(Step::Inquiry),
            Step::Inquiry => Some(Step::Discovery),
            Step::Discovery => Some(Step::Misconception),
            Step::Misconception => Some(Step::Justification),
            Step::Justification => Some(Step::Completed),
            Step::Completed => None,
        }
    }

    /// Preceding step; `None` for `Action`.
    pub fn prev(self) -> Option<Step> {
        match self {
            Step::Action => None,
            Step::Inquiry => Some(Step::Action),
            Step::Discovery => Some(Step::Inquiry),
            Step::Misconception => Some(Step::Discovery),
            Step::Justification => Some(Step::Misconception),
            Step::Completed => Some(Step::Justification),
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self == Step::Completed
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the machine reacts to. On the wire: `{"type": "SET_FOLD_ANGLE", "angle": 95}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    SetFoldAngle {
        angle: f64,
    },
    CollectChip {
        #[serde(rename = "chipId")]
        chip_id: String,
    },
    UncollectChip {
        #[serde(rename = "chipId")]
        chip_id: String,
    },
    SelectAnswer {
        answer: String,
    },
    HighlightElements {
        elements: Vec<String>,
    },
    CompleteStep,
    ProceedToNext,
    ProceedToPrev,
    ResetModule,
    SkipDiscovery,
    BackToDiscovery,
    Error {
        error: String,
    },
}

/// Mutable record owned by the machine; changed only through `dispatch`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContext {
    /// Degrees, always within `[0, 180]`.
    pub fold_angle: f64,
    /// Chip ids in collection order, no duplicates.
    pub collected_chips: Vec<String>,
    pub selected_answer: Option<String>,
    pub highlighted_elements: BTreeSet<String>,
    pub step_completion: BTreeMap<Step, bool>,
    pub error: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub completed_at: Option<u64>,
}

impl ActivityContext {
    /// The fixed snapshot the machine starts from and resets to.
    pub fn initial() -> Self {
        Self {
            fold_angle: 0.0,
            collected_chips: Vec::new(),
            selected_answer: None,
            highlighted_elements: BTreeSet::new(),
            step_completion: Step::ALL.iter().map(|&s| (s, false)).collect(),
            error: None,
            completed_at: None,
        }
    }

    #[inline]
    pub fn has_chip(&self, id: &str) -> bool {
        self.collected_chips.iter().any(|c| c == id)
    }

    #[inline]
    pub fn is_step_complete(&self, step: Step) -> bool {
        self.step_completion.get(&step).copied().unwrap_or(false)
    }
}

impl Default for ActivityContext {
    fn default() -> Self {
        Self::initial()
    }
}
