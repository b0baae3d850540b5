use std::sync::OnceLock;

use regex::Regex;

use crate::error::ParseError;

static TITLE: OnceLock<Regex> = OnceLock::new();
static TAG: OnceLock<Regex> = OnceLock::new();

/// `#[title]` or `##TAG: value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderLine {
    Title(String),
    Tag { tag: String, value: String },
}

impl HeaderLine {
    pub const TITLE_OPEN: &'static str = "#[";

    /// Returns `Ok(None)` for lines that are not header lines at all. A title
    /// missing its closing bracket is malformed.
    pub fn parse(text: &str, line: usize) -> Result<Option<Self>, ParseError> {
        if text.starts_with(Self::TITLE_OPEN) {
            let re = TITLE
                .get_or_init(|| Regex::new(r"^#\[(.*)\]\s*$").expect("Invalid title regex"));
            return match re.captures(text) {
                Some(caps) => Ok(Some(Self::Title(caps[1].to_string()))),
                None => Err(ParseError::malformed(line, "title", text)),
            };
        }

        let re = TAG
            .get_or_init(|| Regex::new(r"^##(\w+):\s*(.*?)\s*$").expect("Invalid header regex"));
        Ok(re.captures(text).map(|caps| Self::Tag {
            tag: caps[1].to_string(),
            value: caps[2].to_string(),
        }))
    }
}
