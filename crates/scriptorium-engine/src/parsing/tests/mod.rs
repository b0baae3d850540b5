//! Driver behaviour over whole documents.

mod entities;

use std::collections::BTreeMap;

use super::{ParsedDocument, parse_str, snapshot};
use crate::settings::Settings;

/// Joins lines into a document with a trailing newline.
fn doc(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn settings() -> Settings {
    let keys = BTreeMap::from([("FARMER".to_string(), "OCCUPATION".to_string())]);
    Settings::new(["SOURCE"], keys).unwrap()
}

/// Parses with the test settings and checks structural invariants.
fn parse(lines: &[&str]) -> ParsedDocument {
    let parsed = parse_str(&doc(lines), &settings()).unwrap();
    snapshot::invariants(lines.len(), &parsed);
    parsed
}
