//! Chip records, the static catalogue and the plain result/export types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::rules::ChipRule;
use crate::congruence::CongruenceKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipKind {
    Side,
    Angle,
    Common,
    Given,
}

pub const SIDE_AB: &str = "side-AB";
pub const SIDE_AC: &str = "side-AC";
pub const ANGLE_BAD: &str = "angle-BAD";
pub const ANGLE_CAD: &str = "angle-CAD";
pub const COMMON_AD: &str = "common-AD";
pub const GIVEN_AB_AC: &str = "given-AB-AC";
pub const SIDE_BD: &str = "side-BD";
pub const SIDE_CD: &str = "side-CD";

/// Evidence for the SAS argument of the fold lesson, in hint order.
pub const REQUIRED_SAS_CHIPS: [&str; 5] = [ANGLE_BAD, ANGLE_CAD, SIDE_AB, SIDE_AC, COMMON_AD];

/// Chip sets that let the discovery step finish. Any one suffices.
pub const DISCOVERY_PATTERNS: [&[&str]; 3] = [
    &REQUIRED_SAS_CHIPS,
    // SAS with the isosceles premise taken as given.
    &[GIVEN_AB_AC, ANGLE_BAD, ANGLE_CAD, COMMON_AD],
    // SSS on the two halves.
    &[SIDE_AB, SIDE_AC, SIDE_BD, SIDE_CD, COMMON_AD],
];

/// Static chip definition.
#[derive(Clone, Copy, Debug)]
pub struct ChipDef {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ChipKind,
    pub rule: Option<ChipRule>,
    pub hint: &'static str,
    pub order: u32,
}

pub const CHIP_DEFINITIONS: [ChipDef; 8] = [
    ChipDef {
        id: GIVEN_AB_AC,
        label: "AB = AC (given)",
        kind: ChipKind::Given,
        rule: None,
        hint: "The problem tells you the triangle is isosceles.",
        order: 0,
    },
    ChipDef {
        id: SIDE_AB,
        label: "AB",
        kind: ChipKind::Side,
        rule: Some(ChipRule::IsoscelesSides),
        hint: "Compare side AB of the left half with the right half.",
        order: 1,
    },
    ChipDef {
        id: SIDE_AC,
        label: "AC",
        kind: ChipKind::Side,
        rule: Some(ChipRule::IsoscelesSides),
        hint: "Side AC lands exactly on side AB when folded.",
        order: 2,
    },
    ChipDef {
        id: ANGLE_BAD,
        label: "∠BAD",
        kind: ChipKind::Angle,
        rule: Some(ChipRule::BisectorSplit),
        hint: "Look at the angle between AB and the fold line AD.",
        order: 3,
    },
    ChipDef {
        id: ANGLE_CAD,
        label: "∠CAD",
        kind: ChipKind::Angle,
        rule: Some(ChipRule::BisectorSplit),
        hint: "Look at the angle between AC and the fold line AD.",
        order: 4,
    },
    ChipDef {
        id: COMMON_AD,
        label: "AD (common)",
        kind: ChipKind::Common,
        rule: Some(ChipRule::FoldPointOnBase),
        hint: "Which side belongs to both halves at once?",
        order: 5,
    },
    ChipDef {
        id: SIDE_BD,
        label: "BD",
        kind: ChipKind::Side,
        rule: Some(ChipRule::BaseHalves),
        hint: "The fold cuts the base BC at D. Compare BD with DC.",
        order: 6,
    },
    ChipDef {
        id: SIDE_CD,
        label: "CD",
        kind: ChipKind::Side,
        rule: Some(ChipRule::BaseHalves),
        hint: "The fold cuts the base BC at D. Compare CD with DB.",
        order: 7,
    },
];

/// Whether `id` names a chip in the static catalogue.
pub fn is_known_chip(id: &str) -> bool {
    CHIP_DEFINITIONS.iter().any(|d| d.id == id)
}

/// One collectible piece of evidence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chip {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ChipKind,
    pub collected: bool,
    pub is_available: bool,
    pub rule: Option<ChipRule>,
    pub hint: String,
    pub order: u32,
}

impl From<&ChipDef> for Chip {
    fn from(d: &ChipDef) -> Self {
        Self {
            id: d.id.to_string(),
            label: d.label.to_string(),
            kind: d.kind,
            collected: false,
            is_available: false,
            rule: d.rule,
            hint: d.hint.to_string(),
            order: d.order,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub collected: usize,
    pub total: usize,
    /// 0–100, rounded.
    pub percentage: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipValidationResult {
    pub is_valid: bool,
    pub congruence_type: Option<CongruenceKind>,
    pub missing_chips: Vec<String>,
    /// Share of the required chips collected, 0–100.
    pub completion_percentage: u32,
    pub feedback: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipState {
    pub collected: bool,
    pub is_available: bool,
}

/// Serializable snapshot of a registry. Rules are not part of it; they are
/// re-attached from `CHIP_DEFINITIONS` on import.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipRegistryState {
    pub collected_chips: Vec<String>,
    pub chip_states: BTreeMap<String, ChipState>,
}
