use std::sync::OnceLock;

use regex::Regex;

static ACTION: OnceLock<Regex> = OnceLock::new();

/// An action label such as `BAPTISM`, or `PROPRIETOR*` when the action
/// inherits the document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDecl {
    pub label: String,
    pub inherits: bool,
}

impl ActionDecl {
    pub fn parse(body: &str) -> Option<Self> {
        let re =
            ACTION.get_or_init(|| Regex::new(r"^([^*]+)(\*)?$").expect("Invalid action regex"));
        let caps = re.captures(body.trim())?;
        let label = caps[1].trim_end().to_string();
        if label.is_empty() {
            return None;
        }
        Some(Self {
            label,
            inherits: caps.get(2).is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("OF", "OF", false)]
    #[case("PROPRIETOR*", "PROPRIETOR", true)]
    #[case("TENANT IN   ", "TENANT IN", false)]
    fn parses_actions(#[case] body: &str, #[case] label: &str, #[case] inherits: bool) {
        assert_eq!(
            ActionDecl::parse(body),
            Some(ActionDecl {
                label: label.into(),
                inherits
            })
        );
    }

    #[test]
    fn rejects_relations() {
        assert_eq!(ActionDecl::parse("*SON*"), None);
    }
}
