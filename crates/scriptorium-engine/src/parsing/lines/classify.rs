use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use super::markup::{ContentMarkup, LeadingMarkup};
use crate::parsing::rope::{LineRef, Span};

static ANNOTATION: OnceLock<Regex> = OnceLock::new();
static HEADER: OnceLock<Regex> = OnceLock::new();
static SHORTCUT_MARKER: OnceLock<Regex> = OnceLock::new();
static SHORTCUT_DEFINITION: OnceLock<Regex> = OnceLock::new();
static PEOPLA: OnceLock<Regex> = OnceLock::new();
static RELATION: OnceLock<Regex> = OnceLock::new();
static ACTION_GROUP: OnceLock<Regex> = OnceLock::new();

/// Removes editor-private deletion markers (`[<-]`, with any whitespace
/// before them).
pub fn strip_annotations(text: &str) -> Cow<'_, str> {
    ANNOTATION
        .get_or_init(|| Regex::new(r"\s*\[<-\]").expect("Invalid annotation regex"))
        .replace_all(text, "")
}

/// Shapes a content body could take. More than one may be set; the parser
/// state decides which reading wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shapes {
    pub shortcut_marker: bool,
    pub shortcut_definition: bool,
    pub peopla: bool,
    pub relation: bool,
    pub action_group: bool,
}

impl Shapes {
    pub fn of(body: &str) -> Self {
        let shortcut_marker = SHORTCUT_MARKER
            .get_or_init(|| Regex::new(r"^\^\d+:$").expect("Invalid shortcut regex"));
        let shortcut_definition = SHORTCUT_DEFINITION.get_or_init(|| {
            Regex::new(r"^[^*\[\]{}^]+\*?$").expect("Invalid shortcut definition regex")
        });
        let peopla = PEOPLA.get_or_init(|| {
            Regex::new(r"^@?\[.*\](\(.*\))?(\{.*\})?\*?$").expect("Invalid peopla regex")
        });
        let relation =
            RELATION.get_or_init(|| Regex::new(r"^\*.*\*$").expect("Invalid relation regex"));
        let action_group = ACTION_GROUP
            .get_or_init(|| Regex::new(r"^(vs|w/)").expect("Invalid action group regex"));

        Self {
            shortcut_marker: shortcut_marker.is_match(body),
            shortcut_definition: shortcut_definition.is_match(body),
            peopla: peopla.is_match(body),
            relation: relation.is_match(body),
            action_group: action_group.is_match(body),
        }
    }
}

/// A `###<TAB>` line, decomposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub markup: LeadingMarkup,
    pub body: String,
    pub shapes: Shapes,
}

impl ContentLine {
    pub fn depth(&self) -> usize {
        self.markup.depth
    }

    pub fn extra_tabs(&self) -> usize {
        self.markup.extra_tabs
    }

    pub fn indent(&self) -> usize {
        self.markup.indent()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// `!` comment.
    Ignore,
    /// `#[title]` or `##TAG: value`.
    Header,
    Content(ContentLine),
    /// Anything else, including table rows.
    Other,
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone)]
pub struct LineClass {
    pub number: usize,
    pub span: Span,
    /// Line text with annotations and the newline removed.
    pub text: String,
    pub kind: LineKind,
}

impl LineClass {
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    pub fn content(&self) -> Option<&ContentLine> {
        match &self.kind {
            LineKind::Content(c) => Some(c),
            _ => None,
        }
    }
}

/// Classifies transcription lines independently of surrounding context.
pub struct TranscriptionLineClassifier;

impl TranscriptionLineClassifier {
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = strip_annotations(lr.content()).into_owned();
        let kind = self.classify_text(&text);
        LineClass {
            number: lr.number,
            span: lr.span,
            text,
            kind,
        }
    }

    pub fn classify_text(&self, text: &str) -> LineKind {
        let header =
            HEADER.get_or_init(|| Regex::new(r"^(##\w+:|#\[)").expect("Invalid header regex"));

        if text.trim().is_empty() {
            LineKind::Blank
        } else if text.starts_with('!') {
            LineKind::Ignore
        } else if let Some(rest) = ContentMarkup::strip_marker(text) {
            let markup = ContentMarkup::strip_prefixes(rest);
            let body = rest[markup.offset..].trim_end().to_string();
            let shapes = Shapes::of(&body);
            LineKind::Content(ContentLine {
                markup,
                body,
                shapes,
            })
        } else if header.is_match(text) {
            LineKind::Header
        } else {
            LineKind::Other
        }
    }
}
