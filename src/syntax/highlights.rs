//! Span types produced by the line classifier

/// Classification of a run of characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Keyword,
    Plain,
}

impl SpanKind {
    /// Color scheme role name for this kind
    pub const fn role(self) -> &'static str {
        match self {
            SpanKind::Keyword => "keyword",
            SpanKind::Plain => "plain",
        }
    }
}

/// A tagged run of characters within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSpan {
    /// Start column (0-indexed, inclusive)
    pub start: usize,
    /// End column (exclusive)
    pub end: usize,
    pub kind: SpanKind,
}

impl TaggedSpan {
    pub const fn new(start: usize, end: usize, kind: SpanKind) -> Self {
        Self { start, end, kind }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The characters of `text` covered by this span
    pub fn slice<'a>(&self, text: &'a [u8]) -> &'a [u8] {
        &text[self.start..self.end]
    }
}
