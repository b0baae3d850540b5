/// Leading markup of a content line.
///
/// Owns the syntax of the run that sits between the `###<TAB>` content marker
/// and the body: `>`+tab nesting markers, bare tabs, and the `(` leaf-scope
/// marker, in any order.
pub struct ContentMarkup;

impl ContentMarkup {
    /// Prefix of every content line.
    pub const MARKER: &'static str = "###\t";
    /// One level of nesting.
    pub const DEPTH: &'static str = ">\t";
    /// Marks an attribute or relation as applying to the latest target only.
    pub const SCOPE: char = '(';

    /// Returns the text after the content marker, if `line` is a content line.
    pub fn strip_marker(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }

    /// Walks the leading markup run of `s` (text after the content marker).
    ///
    /// Handles `>\t>\t[X]`, `(>\t[X]`, `>\t\t\tBIRTH` and so on. A `>` that is
    /// not followed by a tab ends the run.
    pub fn strip_prefixes(s: &str) -> LeadingMarkup {
        let b = s.as_bytes();
        let mut markup = LeadingMarkup::default();
        let mut i = 0usize;

        while i < b.len() {
            if b[i] == b'>' && b.get(i + 1) == Some(&b'\t') {
                markup.depth += 1;
                i += 2;
            } else if b[i] == b'\t' {
                markup.extra_tabs += 1;
                i += 1;
            } else if b[i] == Self::SCOPE as u8 {
                markup.leaf_scope = true;
                i += 1;
            } else {
                break;
            }
        }
        markup.offset = i;
        markup
    }
}

/// Counts read from the leading markup run of a content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeadingMarkup {
    /// Number of `>`+tab markers.
    pub depth: usize,
    /// Tabs that are not part of a depth marker.
    pub extra_tabs: usize,
    /// Whether a `(` appeared in the run.
    pub leaf_scope: bool,
    /// Byte index where the body starts.
    pub offset: usize,
}

impl LeadingMarkup {
    /// Total tab count after the content marker.
    pub fn indent(&self) -> usize {
        self.depth + self.extra_tabs
    }

    pub fn is_empty(&self) -> bool {
        self.offset == 0
    }
}
