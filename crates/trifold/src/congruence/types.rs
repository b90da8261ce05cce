use serde::{Deserialize, Serialize};
use std::fmt;

/// Classical triangle-congruence criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CongruenceKind {
    Sss,
    Sas,
    Asa,
    Rhs,
    Rha,
}

impl CongruenceKind {
    /// Order in which `check_congruence` tries the criteria.
    pub const PRIORITY: [CongruenceKind; 5] = [
        CongruenceKind::Sas,
        CongruenceKind::Asa,
        CongruenceKind::Sss,
        CongruenceKind::Rhs,
        CongruenceKind::Rha,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CongruenceKind::Sss => "SSS",
            CongruenceKind::Sas => "SAS",
            CongruenceKind::Asa => "ASA",
            CongruenceKind::Rhs => "RHS",
            CongruenceKind::Rha => "RHA",
        }
    }
}

impl fmt::Display for CongruenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A matched criterion. `elements` lists the matched pairs in the order the
/// criterion names them, e.g. `["AB=DE", "∠A=∠D", "AC=DF"]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CongruenceCondition {
    #[serde(rename = "type")]
    pub kind: CongruenceKind,
    pub elements: Vec<String>,
    pub is_valid: bool,
}

impl CongruenceCondition {
    pub(crate) fn matched(kind: CongruenceKind, elements: Vec<String>) -> Self {
        Self {
            kind,
            elements,
            is_valid: true,
        }
    }
}
