use std::sync::OnceLock;

use regex::Regex;

static RELATION: OnceLock<Regex> = OnceLock::new();

/// Label of a `*LABEL*` relation line.
pub fn relation_label(body: &str) -> Option<&str> {
    let re = RELATION.get_or_init(|| Regex::new(r"^\*(.*)\*$").expect("Invalid relation regex"));
    re.captures(body.trim_end())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
