use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::markup::ContentMarkup;

static LEADING_RUN: OnceLock<Regex> = OnceLock::new();

/// Whether a line applies to the source and targets of an open group
/// (`Full`) or only to its latest target (`Leaf`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Scope {
    Full,
    Leaf,
}

/// Removes every `(` from the leading markup run of a content line.
///
/// Returns the stripped line and its scope: `Leaf` if a marker was present,
/// `Full` if not, `None` for non-content lines. Inside a data table `(`
/// introduces a local identifier, so the line is left alone.
pub fn extract_scope(line: &str, in_table: bool) -> (String, Option<Scope>) {
    if in_table || ContentMarkup::strip_marker(line).is_none() {
        return (line.to_string(), None);
    }

    let re = LEADING_RUN
        .get_or_init(|| Regex::new(r"^(###[(\t>]*)(.*)$").expect("Invalid scope regex"));
    let Some(caps) = re.captures(line) else {
        return (line.to_string(), None);
    };

    let run = &caps[1];
    if run.contains(ContentMarkup::SCOPE) {
        let stripped = run.replace(ContentMarkup::SCOPE, "");
        (format!("{stripped}{}", &caps[2]), Some(Scope::Leaf))
    } else {
        (line.to_string(), Some(Scope::Full))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("###\t(>\tX", "###\t>\tX", Some(Scope::Leaf))]
    #[case("###\t(\tX(i-1)", "###\t\tX(i-1)", Some(Scope::Leaf))]
    #[case("###\t[X](i-1)", "###\t[X](i-1)", Some(Scope::Full))]
    #[case("TEST", "TEST", None)]
    #[case("", "", None)]
    #[case("!", "!", None)]
    #[case("##    X", "##    X", None)]
    fn extracts_scope(#[case] line: &str, #[case] stripped: &str, #[case] scope: Option<Scope>) {
        assert_eq!(extract_scope(line, false), (stripped.to_string(), scope));
    }

    #[rstest]
    #[case("###\t(>\tX")]
    #[case("###\t[X](i-1)")]
    #[case("###\t>\t\tBIRTH")]
    fn stripping_is_idempotent(#[case] line: &str) {
        let (once, _) = extract_scope(line, false);
        let (twice, scope) = extract_scope(&once, false);

        assert_eq!(once, twice);
        assert_eq!(scope, Some(Scope::Full));
    }

    #[test]
    fn disabled_inside_tables() {
        assert_eq!(extract_scope("###\t(12)", true), ("###\t(12)".to_string(), None));
    }
}
