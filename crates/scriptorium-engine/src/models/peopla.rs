use serde::Serialize;

use super::actions::ActionLog;
use super::evidence::Evidence;
use super::graph::ActionGroupId;
use super::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeoplaKind {
    Person,
    Place,
}

impl PeoplaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Place => "place",
        }
    }
}

/// A person or a place named in the transcription.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Peopla {
    pub name: String,
    pub kind: PeoplaKind,
    pub local_id: Option<String>,
    pub global_id: Option<String>,
    pub actions: ActionLog,
    pub evidence: Evidence,
    /// Action groups this peopla takes part in, as source or target.
    pub action_groups: Vec<ActionGroupId>,
}

impl Peopla {
    pub fn new(
        name: impl Into<String>,
        kind: PeoplaKind,
        local_id: Option<String>,
        global_id: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            local_id,
            global_id,
            actions: ActionLog::default(),
            evidence: Evidence::default(),
            action_groups: Vec::new(),
        }
    }

    pub fn person(name: impl Into<String>) -> Self {
        Self::new(name, PeoplaKind::Person, None, None)
    }

    /// Same name and the same local or global id. Two missing ids count as
    /// the same id.
    pub fn matches_identity(&self, other: &Peopla) -> bool {
        self.name == other.name
            && (self.local_id == other.local_id || self.global_id == other.global_id)
    }

    /// Most recently recorded value of `key` on any of this peopla's actions.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.actions.find(key)
    }

    /// Value inferred for the `GENDER` pseudo-action, if any relation implied one.
    pub fn gender(&self) -> Option<&str> {
        self.actions
            .latest("GENDER")
            .and_then(|g| g.attributes.get("value"))
            .and_then(Value::as_text)
    }
}
