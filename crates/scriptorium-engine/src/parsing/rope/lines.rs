use xi_rope::Rope;

use super::span::Span;

/// One physical line of a transcription.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 1-based line number, used as evidence for every fact read from the line.
    pub number: usize,
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text, newline included.
    pub text: String,
}

impl LineRef {
    /// The line text without its trailing newline.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over numbered lines with their byte spans.
///
/// Uses `lines_raw` so the spans of consecutive lines tile the rope exactly.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(idx, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            number: idx + 1,
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
