//! Substring keyword classifier
//!
//! Keywords are matched as plain substrings, not as whole words: `printf`
//! contains `int` and gets it highlighted. At each column the longest matching
//! keyword wins.

use super::highlights::{SpanKind, TaggedSpan};

/// Keywords highlighted when the config does not provide its own list
pub const DEFAULT_KEYWORDS: &[&str] = &["for", "unsigned", "int", "char"];

pub fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Longest keyword matching `text` at `start`, as its length
fn keyword_at(text: &[u8], start: usize, keywords: &[String]) -> Option<usize> {
    let rest = &text[start..];
    keywords
        .iter()
        .map(|k| k.as_bytes())
        .filter(|k| !k.is_empty() && rest.starts_with(k))
        .map(<[u8]>::len)
        .max()
}

/// Partition `text` into keyword and plain spans.
///
/// The spans are in order, never overlap, and cover every column of `text`.
/// Adjacent plain characters are merged into one span; an empty line has no
/// spans.
pub fn classify_line(text: &[u8], keywords: &[String]) -> Vec<TaggedSpan> {
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut col = 0;

    while col < text.len() {
        match keyword_at(text, col, keywords) {
            Some(len) => {
                if plain_start < col {
                    spans.push(TaggedSpan::new(plain_start, col, SpanKind::Plain));
                }
                spans.push(TaggedSpan::new(col, col + len, SpanKind::Keyword));
                col += len;
                plain_start = col;
            }
            None => col += 1,
        }
    }

    if plain_start < text.len() {
        spans.push(TaggedSpan::new(plain_start, text.len(), SpanKind::Plain));
    }

    spans
}
