//! # Shortcut Registry
//!
//! Shortcut blocks (`^N:` followed by definition lines) name bundles of
//! default attributes that tables pull in with `^N`. Blocks stay open while
//! definitions arrive and are frozen into a flat lookup map at the next reset.
//! A block id that is defined again replaces the earlier bundle.

use std::collections::BTreeMap;

use crate::models::{Bundle, Header, Value};
use crate::parsing::kinds::ShortcutDef;
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutIssue {
    #[error("no shortcut mapping configured for property {0:?}")]
    UnknownProperty(String),
    #[error("shortcut format not recognised: {0:?}")]
    Unrecognised(String),
    #[error("shortcut definition outside of a shortcut block")]
    NoOpenBlock,
}

#[derive(Debug, Clone, Default)]
pub struct ShortcutRegistry {
    open: Vec<(String, Bundle)>,
    frozen: BTreeMap<String, Bundle>,
}

impl ShortcutRegistry {
    pub fn is_open(&self) -> bool {
        !self.open.is_empty()
    }

    pub fn open_block(&mut self, id: &str) {
        log::debug!("Opening shortcut block ^{id}");
        self.open.push((id.to_string(), Bundle::new()));
    }

    /// Adds a definition to the most recently opened block.
    pub fn define(
        &mut self,
        def: ShortcutDef,
        settings: &Settings,
        header: &Header,
    ) -> Result<(), ShortcutIssue> {
        let Some((id, bundle)) = self.open.last_mut() else {
            return Err(ShortcutIssue::NoOpenBlock);
        };

        match def {
            ShortcutDef::Property(name) => {
                let key = settings
                    .macro_key(&name)
                    .ok_or_else(|| ShortcutIssue::UnknownProperty(name.clone()))?;
                log::debug!("Shortcut ^{id}: {key} = {name}");
                bundle.insert(key.to_string(), Value::Text(name));
            }
            ShortcutDef::InheritsHeader(name) => {
                log::debug!("Shortcut ^{id}: {name} inherits the header");
                bundle.insert(name, Value::Nested(header.inheritable()));
            }
            ShortcutDef::Unrecognised(text) => return Err(ShortcutIssue::Unrecognised(text)),
        }
        Ok(())
    }

    /// Moves every open block into the lookup map. Later blocks win.
    pub fn freeze(&mut self) {
        if self.open.is_empty() {
            return;
        }
        for (id, bundle) in self.open.drain(..) {
            self.frozen.insert(id, bundle);
        }
        log::debug!("Shortcut blocks frozen: {:?}", self.frozen.keys().collect::<Vec<_>>());
    }

    pub fn lookup(&self, id: &str) -> Option<&Bundle> {
        self.frozen.get(id)
    }

    /// Merges the frozen bundles for `ids` in order. Returns the merged
    /// bundle and the ids that were not found.
    pub fn resolve<'a>(&self, ids: &'a [String]) -> (Bundle, Vec<&'a str>) {
        let mut merged = Bundle::new();
        let mut missing = Vec::new();
        for id in ids {
            match self.lookup(id) {
                Some(bundle) => merged.extend(bundle.clone()),
                None => missing.push(id.as_str()),
            }
        }
        (merged, missing)
    }

    pub fn frozen(&self) -> &BTreeMap<String, Bundle> {
        &self.frozen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings() -> Settings {
        let keys = BTreeMap::from([("FARMER".to_string(), "OCCUPATION".to_string())]);
        Settings::new(["SOURCE"], keys).unwrap()
    }

    #[test]
    fn definitions_are_invisible_until_frozen() {
        let mut registry = ShortcutRegistry::default();
        registry.open_block("1");
        registry
            .define(ShortcutDef::Property("FARMER".into()), &settings(), &Header::default())
            .unwrap();

        assert!(registry.lookup("1").is_none());

        registry.freeze();

        assert!(!registry.is_open());
        assert_eq!(
            registry.lookup("1"),
            Some(&Bundle::from([("OCCUPATION".to_string(), Value::from("FARMER"))]))
        );
    }

    #[test]
    fn inherits_header_without_title() {
        let mut header = Header::default();
        header.push("TITLE", "Rental book");
        header.push("SOURCE", "NRS");

        let mut registry = ShortcutRegistry::default();
        registry.open_block("2");
        registry
            .define(ShortcutDef::InheritsHeader("RENTAL".into()), &settings(), &header)
            .unwrap();
        registry.freeze();

        let expected = Bundle::from([(
            "RENTAL".to_string(),
            Value::Nested(Bundle::from([("SOURCE".to_string(), Value::List(vec!["NRS".into()]))])),
        )]);
        assert_eq!(registry.lookup("2"), Some(&expected));
    }

    #[test]
    fn unknown_property_is_reported() {
        let mut registry = ShortcutRegistry::default();
        registry.open_block("1");

        let weaver = ShortcutDef::Property("WEAVER".into());

        let result = registry.define(weaver, &settings(), &Header::default());

        assert_eq!(result, Err(ShortcutIssue::UnknownProperty("WEAVER".into())));
    }

    #[test]
    fn reopened_block_replaces_earlier_definition() {
        let mut registry = ShortcutRegistry::default();
        registry.open_block("1");
        registry
            .define(ShortcutDef::Property("FARMER".into()), &settings(), &Header::default())
            .unwrap();
        registry.freeze();

        registry.open_block("1");
        registry.freeze();

        assert_eq!(registry.lookup("1"), Some(&Bundle::new()));
    }

    #[test]
    fn resolve_reports_missing_ids() {
        let mut registry = ShortcutRegistry::default();
        registry.open_block("1");
        registry
            .define(ShortcutDef::Property("FARMER".into()), &settings(), &Header::default())
            .unwrap();
        registry.freeze();

        let ids = vec!["1".to_string(), "9".to_string()];
        let (bundle, missing) = registry.resolve(&ids);

        assert_eq!(bundle.len(), 1);
        assert_eq!(missing, vec!["9"]);
    }
}
