use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Bundle, Value};

static ATTRIBUTE: OnceLock<Regex> = OnceLock::new();

/// A `KEY[value]` pair, optionally approximate (`KEY[value]~`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub const APPROXIMATE: char = '~';

    fn regex() -> &'static Regex {
        ATTRIBUTE
            .get_or_init(|| Regex::new(r"^(.*)\[(.*)\](~)?$").expect("Invalid attribute regex"))
    }

    /// Whether `text` is written as `KEY[value]`, before any shorthand expansion.
    pub fn is_attribute_shaped(text: &str) -> bool {
        Self::regex()
            .captures(text.trim())
            .is_some_and(|caps| !caps[1].is_empty())
    }

    /// Parses an attribute, expanding `BIRTH`, `INF` and the single
    /// character keys `:` (date) and `@` (place).
    pub fn parse(text: &str) -> Option<Self> {
        let text = match text.trim() {
            "BIRTH" => "AGED[BIRTH]",
            "INF" => "AGED[INFANCY]",
            other => other,
        };
        let caps = Self::regex().captures(text)?;

        let key = match &caps[1] {
            ":" => "DATE".to_string(),
            "@" => "AT".to_string(),
            other => other.to_string(),
        };
        let value = if caps.get(3).is_some() {
            format!("approx. {}", &caps[2])
        } else {
            caps[2].to_string()
        };

        Some(Self { key, value })
    }

    pub fn into_bundle(self) -> Bundle {
        Bundle::from([(self.key, Value::Text(self.value))])
    }
}
