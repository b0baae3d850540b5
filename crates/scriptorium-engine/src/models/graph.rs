//! # Document Graph
//!
//! Arena holding every entity found in a transcription. Entities refer to
//! each other through typed handles, so breadcrumbs and "current" pointers in
//! the parser stay plain `Copy` values.
//!
//! Registration is idempotent: a candidate that matches an existing entity's
//! identity resolves to the existing handle, and the evidence line is added
//! to that entity instead.

use std::fmt;

use serde::Serialize;

use super::action_group::ActionGroup;
use super::peopla::Peopla;
use super::peorel::Peorel;

macro_rules! handle {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub usize);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $label, self.0 + 1)
            }
        }
    };
}

handle!(PeoplaId, "peopla");
handle!(PeorelId, "peorel");
handle!(ActionGroupId, "agroup");

/// The object most recently touched by the parser; embedded attributes land here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Peopla(PeoplaId),
    ActionGroup(ActionGroupId),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentGraph {
    peoplas: Vec<Peopla>,
    peorels: Vec<Peorel>,
    action_groups: Vec<ActionGroup>,
}

impl DocumentGraph {
    /// Registers `candidate`, or resolves it to an existing match, and
    /// records `line` as evidence.
    pub fn register_peopla(&mut self, candidate: Peopla, line: usize) -> PeoplaId {
        let id = match self.peoplas.iter().position(|p| p.matches_identity(&candidate)) {
            Some(idx) => PeoplaId(idx),
            None => {
                log::info!(
                    "Creating {} peopla {:?} ({:?}) {{{:?}}}",
                    candidate.kind.as_str(),
                    candidate.name,
                    candidate.local_id,
                    candidate.global_id
                );
                self.peoplas.push(candidate);
                PeoplaId(self.peoplas.len() - 1)
            }
        };
        self.peoplas[id.0].evidence.record(line);
        id
    }

    pub fn register_peorel(&mut self, candidate: Peorel, line: usize) -> PeorelId {
        let existing = self
            .peorels
            .iter()
            .position(|r| r.matches_identity(&candidate, &self.peoplas));
        let id = match existing {
            Some(idx) => PeorelId(idx),
            None => {
                log::info!(
                    "Creating peorel: {} is a {} to {}",
                    self.peoplas[candidate.is.0].name,
                    candidate.label,
                    self.peoplas[candidate.to.0].name
                );
                self.peorels.push(candidate);
                PeorelId(self.peorels.len() - 1)
            }
        };
        self.peorels[id.0].evidence.record(line);
        id
    }

    /// Registers an action group. A newly created group is also linked from
    /// its source and target peoplas.
    pub fn register_action_group(&mut self, candidate: ActionGroup, line: usize) -> ActionGroupId {
        let existing = self
            .action_groups
            .iter()
            .position(|g| g.matches_identity(&candidate, &self.peoplas));
        let id = match existing {
            Some(idx) => ActionGroupId(idx),
            None => {
                log::info!(
                    "Creating {} {} action group with {} target(s)",
                    if candidate.directed { "directed" } else { "undirected" },
                    candidate.kind,
                    candidate.targets.len()
                );
                let id = ActionGroupId(self.action_groups.len());
                let members = std::iter::once(candidate.source)
                    .chain(candidate.targets.iter().copied());
                for member in members {
                    let links = &mut self.peoplas[member.0].action_groups;
                    if !links.contains(&id) {
                        links.push(id);
                    }
                }
                self.action_groups.push(candidate);
                id
            }
        };
        self.action_groups[id.0].evidence.record(line);
        id
    }

    pub fn peopla(&self, id: PeoplaId) -> &Peopla {
        &self.peoplas[id.0]
    }

    pub fn peopla_mut(&mut self, id: PeoplaId) -> &mut Peopla {
        &mut self.peoplas[id.0]
    }

    pub fn peorel(&self, id: PeorelId) -> &Peorel {
        &self.peorels[id.0]
    }

    pub fn action_group(&self, id: ActionGroupId) -> &ActionGroup {
        &self.action_groups[id.0]
    }

    pub fn action_group_mut(&mut self, id: ActionGroupId) -> &mut ActionGroup {
        &mut self.action_groups[id.0]
    }

    pub fn peoplas(&self) -> &[Peopla] {
        &self.peoplas
    }

    pub fn peorels(&self) -> &[Peorel] {
        &self.peorels
    }

    pub fn action_groups(&self) -> &[ActionGroup] {
        &self.action_groups
    }

    /// First peopla with the given name.
    pub fn find_peopla(&self, name: &str) -> Option<(PeoplaId, &Peopla)> {
        self.peoplas
            .iter()
            .enumerate()
            .find(|(_, p)| p.name == name)
            .map(|(idx, p)| (PeoplaId(idx), p))
    }
}
