//! Tabular block syntax.
//!
//! A table opens with a header written with a literal `\t` marker (backslash,
//! `t`), so it can never be mistaken for a content line:
//!
//! ```text
//! ###\tNAME\tPAID:AMOUNT^1^2
//! Kerr<TAB>3s
//! ###<TAB>{guid}
//! ###\tEND
//! ```

use std::sync::OnceLock;

use regex::Regex;

static CELL_SPLIT: OnceLock<Regex> = OnceLock::new();

/// Literal `\t` separator used in table headers.
pub const SEPARATOR: &str = "\\t";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeader {
    pub columns: Vec<String>,
    /// Shortcut block ids referenced after `^`.
    pub shortcuts: Vec<String>,
}

impl TableHeader {
    pub fn marker() -> String {
        format!("###{SEPARATOR}")
    }

    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix(Self::marker().as_str())?;
        if is_end(text) {
            return None;
        }

        let (columns, shortcuts) = match rest.split_once('^') {
            Some((columns, refs)) => (columns, refs),
            None => (rest, ""),
        };

        let columns = columns
            .split(SEPARATOR)
            .flat_map(|c| c.split('\t'))
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect();
        let shortcuts = shortcuts
            .split('^')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Some(Self { columns, shortcuts })
    }
}

fn is_end(text: &str) -> bool {
    let text = text.trim_end();
    text == format!("###{SEPARATOR}END") || text == "###\tEND"
}

/// A line read while a table is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLine {
    End,
    /// `[/]`: the manuscript wrapped a row; carries no data.
    LineBreak,
    Comment,
    Blank,
    Ids {
        local_id: Option<String>,
        global_id: Option<String>,
    },
    Row(Vec<String>),
}

impl TableLine {
    pub fn classify(text: &str) -> Self {
        if is_end(text) {
            return Self::End;
        }
        if text.trim() == "[/]" {
            return Self::LineBreak;
        }
        if text.starts_with('!') {
            return Self::Comment;
        }
        if text.trim().is_empty() {
            return Self::Blank;
        }
        if let Some(id) = text.strip_prefix("###\t").map(str::trim_end) {
            let local_id = between(id, '(', ')');
            let global_id = between(id, '{', '}');
            if local_id.is_some() || global_id.is_some() {
                return Self::Ids {
                    local_id,
                    global_id,
                };
            }
        }

        let re = CELL_SPLIT.get_or_init(|| Regex::new(r"\t+").expect("Invalid cell regex"));
        Self::Row(re.split(text.trim_end()).map(String::from).collect())
    }
}

fn between(s: &str, open: char, close: char) -> Option<String> {
    let inner = s.strip_prefix(open)?.strip_suffix(close)?;
    Some(inner.trim_end().to_string())
}
