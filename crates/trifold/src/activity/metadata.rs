//! Static display text per step. Read by presentation code; the machine never
//! interprets it.

use serde::Serialize;

use super::types::Step;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnswerOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StepMeta {
    pub title: &'static str,
    pub instruction: &'static str,
    pub hint: Option<&'static str>,
    pub options: &'static [AnswerOption],
}

const ACTION: StepMeta = StepMeta {
    title: "Fold the triangle",
    instruction: "Drag the slider to fold the isosceles triangle along the dashed line.",
    hint: Some("Fold past 90° so the two halves meet."),
    options: &[],
};

const INQUIRY: StepMeta = StepMeta {
    title: "What do you see?",
    instruction: "The two halves lie exactly on top of each other. What does that tell you?",
    hint: Some("Same shape and same size..."),
    options: &[
        AnswerOption {
            id: "congruence",
            label: "The two halves are congruent",
        },
        AnswerOption {
            id: "similarity",
            label: "The two halves are only similar",
        },
        AnswerOption {
            id: "coincidence",
            label: "It only works for this drawing",
        },
    ],
};

const DISCOVERY: StepMeta = StepMeta {
    title: "Collect the evidence",
    instruction: "Collect the sides and angles that match when the triangle is folded.",
    hint: Some("Look for two sides and the angle between them."),
    options: &[],
};

const MISCONCEPTION: StepMeta = StepMeta {
    title: "Check your reasoning",
    instruction: "A classmate says the base angles are equal because they look equal. Is that enough?",
    hint: None,
    options: &[
        AnswerOption {
            id: "needs-proof",
            label: "No, we need a congruence argument",
        },
        AnswerOption {
            id: "looks-enough",
            label: "Yes, the drawing shows it",
        },
    ],
};

const JUSTIFICATION: StepMeta = StepMeta {
    title: "Write the justification",
    instruction: "Explain why triangle ABD is congruent to triangle ACD.",
    hint: Some("AB = AC, ∠BAD = ∠CAD and AD is shared: SAS."),
    options: &[],
};

const COMPLETED: StepMeta = StepMeta {
    title: "Well done",
    instruction: "The base angles of an isosceles triangle are equal.",
    hint: None,
    options: &[],
};

pub fn step_metadata(step: Step) -> &'static StepMeta {
    match step {
        Step::Action => &ACTION,
        Step::Inquiry => &INQUIRY,
        Step::Discovery => &DISCOVERY,
        Step::Misconception => &MISCONCEPTION,
        Step::Justification => &JUSTIFICATION,
        Step::Completed => &COMPLETED,
    }
}
