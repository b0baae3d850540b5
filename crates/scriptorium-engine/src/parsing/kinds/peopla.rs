use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Peopla, PeoplaKind};

static DECLARATION: OnceLock<Regex> = OnceLock::new();

/// Group prefix in front of a peopla: `vs[...]` or `w/[...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupPrefix {
    /// `vs`: directed.
    Versus,
    /// `w/`: undirected.
    With,
}

impl GroupPrefix {
    pub fn is_directed(self) -> bool {
        matches!(self, Self::Versus)
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Versus => "vs",
            Self::With => "w/",
        }
    }
}

/// A peopla reference: `@[Johnshill]`, `[Adam, Jean](5){guid}`, `vs[Kerr]*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeoplaDecl {
    pub place: bool,
    pub group: Option<GroupPrefix>,
    pub name: String,
    pub local_id: Option<String>,
    pub global_id: Option<String>,
    /// Trailing `*`.
    pub inherits: bool,
}

impl PeoplaDecl {
    pub const PLACE: char = '@';

    /// Parses a body with its leading markup already removed.
    pub fn parse(body: &str) -> Option<Self> {
        let re = DECLARATION.get_or_init(|| {
            Regex::new(r"^(@)?(w/|vs)?\[(.*?)\](?:\((.*?)\))?(?:\{(.*?)\})?(\*)?$")
                .expect("Invalid peopla declaration regex")
        });
        let caps = re.captures(body.trim_end())?;

        let group = caps.get(2).map(|m| match m.as_str() {
            "vs" => GroupPrefix::Versus,
            _ => GroupPrefix::With,
        });

        Some(Self {
            place: caps.get(1).is_some(),
            group,
            name: caps[3].to_string(),
            local_id: caps.get(4).map(|m| m.as_str().to_string()),
            global_id: caps.get(5).map(|m| m.as_str().to_string()),
            inherits: caps.get(6).is_some(),
        })
    }

    pub fn kind(&self) -> PeoplaKind {
        if self.place {
            PeoplaKind::Place
        } else {
            PeoplaKind::Person
        }
    }

    pub fn to_peopla(&self) -> Peopla {
        Peopla::new(
            self.name.clone(),
            self.kind(),
            self.local_id.clone(),
            self.global_id.clone(),
        )
    }
}

impl fmt::Display for PeoplaDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.place {
            write!(f, "{}", Self::PLACE)?;
        }
        if let Some(group) = self.group {
            f.write_str(group.as_str())?;
        }
        write!(f, "[{}]", self.name)?;
        if let Some(local) = &self.local_id {
            write!(f, "({local})")?;
        }
        if let Some(global) = &self.global_id {
            write!(f, "{{{global}}}")?;
        }
        if self.inherits {
            f.write_str("*")?;
        }
        Ok(())
    }
}
