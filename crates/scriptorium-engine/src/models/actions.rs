use serde::{Serialize, Serializer};

use super::evidence::Evidence;
use super::value::{Bundle, Value, merge_bundle};

/// One occurrence of an action (a baptism, a sale, a derived gender...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionInstance {
    pub attributes: Bundle,
    pub evidence: Evidence,
}

/// Actions recorded against an entity, in the order their labels first
/// appeared. Each label keeps every instance in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionLog {
    entries: Vec<(String, Vec<ActionInstance>)>,
}

impl ActionLog {
    /// Starts a new instance of `label`.
    pub fn add_instance(&mut self, label: &str, attributes: Bundle, line: usize) {
        self.instances_mut(label).push(ActionInstance {
            attributes,
            evidence: Evidence::at(line),
        });
    }

    /// Merges into the latest instance of `label`, creating it if needed.
    pub fn update(&mut self, label: &str, attributes: Bundle, line: usize) {
        let instances = self.instances_mut(label);
        if instances.is_empty() {
            instances.push(ActionInstance::default());
        }
        if let Some(latest) = instances.last_mut() {
            merge_bundle(&mut latest.attributes, attributes);
            latest.evidence.record(line);
        }
    }

    pub fn instances(&self, label: &str) -> &[ActionInstance] {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_slice())
            .unwrap_or_default()
    }

    pub fn latest(&self, label: &str) -> Option<&ActionInstance> {
        self.instances(label).last()
    }

    /// Most recent value of `key` across all actions.
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .rev()
            .flat_map(|(_, instances)| instances.iter().rev())
            .find_map(|instance| instance.attributes.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ActionInstance])> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_slice()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn instances_mut(&mut self, label: &str) -> &mut Vec<ActionInstance> {
        let idx = match self.entries.iter().position(|(l, _)| l == label) {
            Some(idx) => idx,
            None => {
                self.entries.push((label.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }
}

impl Serialize for ActionLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(l, v)| (l, v)))
    }
}
