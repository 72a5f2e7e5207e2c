//! Text utilities shared by every parser
//!
//! - Sanitize: artifact-line removal and blank-line collapsing
//! - Links: URL and markdown-link stripping for biographical snippets
//! - Segments: numbered-marker segmentation (`1)` and `(1)` styles)
//! - Sentences: whitespace normalization, sentence and clause splitting

pub mod sanitize;
pub mod links;
pub mod segments;
pub mod sentences;

// Re-export commonly used functions
pub use sanitize::{is_artifact_line, sanitize};
pub use links::strip_links;
pub use segments::{clean_segment, extract_segments, Segment, SegmentMarker};
pub use sentences::{normalize_whitespace, split_sentences, split_sentences_and_clauses};
