//! Keyword highlighting
//!
//! Lines are classified into contiguous spans, each tagged as keyword or
//! plain text. Classification is a pure function of the line and the keyword
//! list; nothing is cached between calls.
//!
//! ## Pipeline
//!
//! ```text
//! line bytes → classify_line → [TaggedSpan] → render_feed → [EditorChar]
//! ```

mod classifier;
mod highlights;

pub use classifier::{classify_line, default_keywords, DEFAULT_KEYWORDS};
pub use highlights::{SpanKind, TaggedSpan};
