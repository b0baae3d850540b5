use serde::Serialize;

/// Byte range `[start, end)` of one transcription line, newline included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// The spanned text of `source`, or `None` if `source` is not the text
    /// the span was taken from.
    pub fn text_in(self, source: &str) -> Option<&str> {
        source.get(self.start..self.end)
    }
}
