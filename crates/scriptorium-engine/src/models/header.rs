use serde::{Serialize, Serializer};

use super::value::{Bundle, Value};
use crate::settings::Settings;

/// Document header: every `##TAG:` value in order of appearance, plus the
/// `#[...]` title filed under `TITLE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    fields: Vec<(String, Vec<String>)>,
}

impl Header {
    pub fn push(&mut self, tag: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(t, _)| t == tag) {
            Some((_, values)) => values.push(value),
            None => self.fields.push((tag.to_string(), vec![value])),
        }
    }

    pub fn values(&self, tag: &str) -> &[String] {
        self.fields
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, v)| v.as_slice())
            .unwrap_or_default()
    }

    pub fn title(&self) -> Option<&str> {
        self.values(Settings::TITLE).first().map(String::as_str)
    }

    /// Header fields other than the title, as a bundle that actions and
    /// shortcuts marked with `*` inherit.
    pub fn inheritable(&self) -> Bundle {
        self.fields
            .iter()
            .filter(|(tag, _)| tag != Settings::TITLE)
            .map(|(tag, values)| (tag.clone(), Value::List(values.clone())))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields.iter().map(|(t, v)| (t.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Header {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.fields.iter().map(|(t, v)| (t, v)))
    }
}
