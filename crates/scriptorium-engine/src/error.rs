use serde::Serialize;

use crate::parsing::rope::Span;

/// Fatal parse failures. Anything recoverable is reported as a [`Diagnostic`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: malformed {shape}: {text:?}")]
    MalformedLine {
        line: usize,
        shape: &'static str,
        text: String,
    },
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl ParseError {
    pub fn malformed(line: usize, shape: &'static str, text: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            shape,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// A shortcut, identifier or macro key was used before it was defined.
    UnresolvedReference,
    /// The surrounding context did not say which entity a line belongs to.
    AmbiguousContext,
}

/// A recoverable problem found while parsing. The offending contribution is
/// dropped and parsing carries on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    /// Where the line sits in the transcription text.
    pub span: Span,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {:?}: {}", self.line, self.kind, self.message)
    }
}
