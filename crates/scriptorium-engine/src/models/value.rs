use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::graph::PeorelId;

/// Attribute bundle: key to value, sorted by key.
pub type Bundle = BTreeMap<String, Value>;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    /// Multi-valued header fields carried into a bundle by inheritance.
    List(Vec<String>),
    Nested(Bundle),
    /// Relation facts that evidence a derived attribute such as `GENDER`.
    Peorels(Vec<PeorelId>),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join("; ")),
            Self::Nested(bundle) => {
                f.write_str("{")?;
                for (i, (k, v)) in bundle.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}={v}")?;
                }
                f.write_str("}")
            }
            Self::Peorels(ids) => {
                let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
                write!(f, "peorel {}", ids.join(","))
            }
        }
    }
}

/// Merges `incoming` into `target`. Later values win, except relation
/// evidence lists which accumulate.
pub fn merge_bundle(target: &mut Bundle, incoming: Bundle) {
    for (key, value) in incoming {
        match target.get_mut(&key) {
            Some(Value::Peorels(existing)) if matches!(value, Value::Peorels(_)) => {
                if let Value::Peorels(more) = value {
                    for id in more {
                        if !existing.contains(&id) {
                            existing.push(id);
                        }
                    }
                }
            }
            _ => {
                target.insert(key, value);
            }
        }
    }
}

/// Flattens nested bundles into `parent_child` keys. Lists become `; `
/// joined text.
pub fn flatten_bundle(bundle: &Bundle) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    flatten_into(&mut out, None, bundle);
    out
}

fn flatten_into(out: &mut BTreeMap<String, String>, prefix: Option<&str>, bundle: &Bundle) {
    for (key, value) in bundle {
        let key = match prefix {
            Some(p) => format!("{p}_{key}"),
            None => key.clone(),
        };
        match value {
            Value::Nested(inner) => flatten_into(out, Some(&key), inner),
            other => {
                out.insert(key, other.to_string());
            }
        }
    }
}
