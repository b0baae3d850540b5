use std::sync::OnceLock;

use regex::Regex;

static MARKER: OnceLock<Regex> = OnceLock::new();
static DEFINITION: OnceLock<Regex> = OnceLock::new();

/// Block id of a `^N:` shortcut marker body.
pub fn shortcut_marker(body: &str) -> Option<&str> {
    let re = MARKER
        .get_or_init(|| Regex::new(r"^\^(\d+):$").expect("Invalid shortcut marker regex"));
    re.captures(body.trim_end())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// One line inside a shortcut block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutDef {
    /// `!NAME`: sets the configured key for `NAME` to `NAME`.
    Property(String),
    /// `NAME*`: files the document header under `NAME`.
    InheritsHeader(String),
    /// Anything else matching the definition shape; ignored with a warning.
    Unrecognised(String),
}

impl ShortcutDef {
    pub fn parse(body: &str) -> Option<Self> {
        let re = DEFINITION.get_or_init(|| {
            Regex::new(r"^(!?)([^*\[\]{}^]+?)\s*(\*?)$").expect("Invalid shortcut definition regex")
        });
        let caps = re.captures(body.trim())?;
        let name = caps[2].to_string();

        Some(if !caps[1].is_empty() {
            Self::Property(name)
        } else if !caps[3].is_empty() {
            Self::InheritsHeader(name)
        } else {
            Self::Unrecognised(name)
        })
    }
}
