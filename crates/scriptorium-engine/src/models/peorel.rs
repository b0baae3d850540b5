use serde::Serialize;

use super::evidence::Evidence;
use super::graph::PeoplaId;
use super::peopla::Peopla;
use super::value::Bundle;

/// A directed relation fact: `is` stands in `label` to `to` (SON to ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Peorel {
    pub is: PeoplaId,
    pub to: PeoplaId,
    pub label: String,
    /// Nesting depth of the relation line that declared it.
    pub depth: usize,
    pub attributes: Bundle,
    pub evidence: Evidence,
}

impl Peorel {
    pub fn new(is: PeoplaId, to: PeoplaId, label: impl Into<String>, depth: usize) -> Self {
        Self {
            is,
            to,
            label: label.into(),
            depth,
            attributes: Bundle::new(),
            evidence: Evidence::default(),
        }
    }

    /// Same label and depth, same `is` and `to` names, and the `is` peoplas
    /// carry the same ids.
    pub fn matches_identity(&self, other: &Peorel, peoplas: &[Peopla]) -> bool {
        let (a_is, a_to) = (&peoplas[self.is.0], &peoplas[self.to.0]);
        let (b_is, b_to) = (&peoplas[other.is.0], &peoplas[other.to.0]);
        self.label == other.label
            && self.depth == other.depth
            && a_is.name == b_is.name
            && a_to.name == b_to.name
            && a_is.local_id == b_is.local_id
            && a_is.global_id == b_is.global_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Gender implied by a kinship label. Anything not in the table is unknown.
pub fn gender_inference(label: &str) -> Gender {
    match label {
        "SON" | "FATHER" => Gender::Male,
        "DAUG" | "MOTHER" => Gender::Female,
        _ => Gender::Unknown,
    }
}
