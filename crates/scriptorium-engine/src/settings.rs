//! Parser settings: the header tags a document may carry and the mapping used
//! to expand property shortcuts (`!name`) into attribute keys.

use std::collections::BTreeMap;

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    header_tags: Vec<String>,
    macro_keys: BTreeMap<String, String>,
}

impl Settings {
    /// Header tag that is always known, whatever the configuration says.
    pub const TITLE: &'static str = "TITLE";

    /// Builds validated settings. `TITLE` is prepended to the tag list unless
    /// it is already present.
    pub fn new<I, S>(
        header_tags: I,
        macro_keys: BTreeMap<String, String>,
    ) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags = vec![Self::TITLE.to_string()];
        for tag in header_tags {
            let tag = tag.into();
            if tag.trim().is_empty() || !tag.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Err(ParseError::Configuration(format!(
                    "header tag {tag:?} must be a non-empty word"
                )));
            }
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        if let Some((name, _)) = macro_keys
            .iter()
            .find(|(name, key)| name.trim().is_empty() || key.trim().is_empty())
        {
            return Err(ParseError::Configuration(format!(
                "shortcut mapping for {name:?} must name both a shortcut and a key"
            )));
        }

        Ok(Self {
            header_tags: tags,
            macro_keys,
        })
    }

    pub fn header_tags(&self) -> &[String] {
        &self.header_tags
    }

    pub fn knows_tag(&self, tag: &str) -> bool {
        self.header_tags.iter().any(|t| t == tag)
    }

    /// Attribute key a property shortcut expands to.
    pub fn macro_key(&self, name: &str) -> Option<&str> {
        self.macro_keys.get(name).map(String::as_str)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            header_tags: vec![Self::TITLE.to_string()],
            macro_keys: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_always_first() {
        let settings = Settings::new(["SOURCE", "TITLE", "DATE"], BTreeMap::new()).unwrap();
        assert_eq!(settings.header_tags(), ["TITLE", "SOURCE", "DATE"]);
    }

    #[test]
    fn rejects_blank_tags() {
        let result = Settings::new(["SOURCE", " "], BTreeMap::new());
        assert!(matches!(result, Err(ParseError::Configuration(_))));
    }

    #[test]
    fn rejects_empty_macro_key() {
        let keys = BTreeMap::from([("FARMER".to_string(), String::new())]);
        let result = Settings::new(["SOURCE"], keys);
        assert!(matches!(result, Err(ParseError::Configuration(_))));
    }

    #[test]
    fn looks_up_macro_keys() {
        let keys = BTreeMap::from([("FARMER".to_string(), "OCCUPATION".to_string())]);
        let settings = Settings::new(Vec::<String>::new(), keys).unwrap();

        assert_eq!(settings.macro_key("FARMER"), Some("OCCUPATION"));
        assert_eq!(settings.macro_key("WEAVER"), None);
        assert!(settings.knows_tag("TITLE"));
    }
}
