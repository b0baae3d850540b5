use serde::Serialize;

use super::actions::ActionLog;
use super::evidence::Evidence;
use super::graph::PeoplaId;
use super::peopla::Peopla;

/// An event tying one source peopla to one or more targets, such as a sale
/// (`vs`, directed) or a joint appearance (`w/`, undirected).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionGroup {
    pub kind: String,
    pub directed: bool,
    pub source: PeoplaId,
    pub targets: Vec<PeoplaId>,
    pub actions: ActionLog,
    pub evidence: Evidence,
}

impl ActionGroup {
    pub fn new(
        kind: impl Into<String>,
        directed: bool,
        source: PeoplaId,
        targets: Vec<PeoplaId>,
    ) -> Self {
        Self {
            kind: kind.into(),
            directed,
            source,
            targets,
            actions: ActionLog::default(),
            evidence: Evidence::default(),
        }
    }

    /// Same kind and direction, same source name, and targets that match
    /// pairwise by peopla identity.
    pub fn matches_identity(&self, other: &ActionGroup, peoplas: &[Peopla]) -> bool {
        self.kind == other.kind
            && self.directed == other.directed
            && peoplas[self.source.0].name == peoplas[other.source.0].name
            && self.targets.len() == other.targets.len()
            && self
                .targets
                .iter()
                .zip(&other.targets)
                .all(|(a, b)| peoplas[a.0].matches_identity(&peoplas[b.0]))
    }
}
