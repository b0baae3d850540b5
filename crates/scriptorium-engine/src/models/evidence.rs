use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Source line numbers supporting a recorded fact. Always sorted, never
/// duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Evidence(BTreeSet<usize>);

impl Evidence {
    pub fn at(line: usize) -> Self {
        Self(BTreeSet::from([line]))
    }

    pub fn record(&mut self, line: usize) {
        self.0.insert(line);
    }

    pub fn extend(&mut self, other: &Evidence) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn contains(&self, line: usize) -> bool {
        self.0.contains(&line)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.lines().collect()
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.lines().map(|l| l.to_string()).collect();
        f.write_str(&lines.join(","))
    }
}
