//! Segment Extractor
//!
//! Cuts text into the spans between consecutive numbering markers. Shared by
//! the founder-analysis, recommendation and (indirectly) report parsers.
//!
//! Numerals are not validated: gaps, repeats and out-of-order numbers are all
//! kept in order of appearance.

use once_cell::sync::Lazy;
use regex::Regex;

/// `N)` at the start of the text, a line or a clause
static RE_BARE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[\s:;,])(\d{1,3})\)").unwrap());

/// `(N)` anywhere
static RE_PAREN_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d{1,3})\)").unwrap());

/// Numbering convention to split on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMarker {
    /// `1) Market ... 2) Team ...`
    Bare,
    /// `(1) Close round (2) Sign agreement`
    Parenthesized,
}

impl SegmentMarker {
    fn pattern(&self) -> &'static Regex {
        match self {
            SegmentMarker::Bare => &RE_BARE_MARKER,
            SegmentMarker::Parenthesized => &RE_PAREN_MARKER,
        }
    }
}

/// Content between one marker and the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub number: u32,     // numeral as written
    pub start: usize,    // byte offset where raw content begins (after the marker)
    pub end: usize,      // byte offset of the next marker, or text length
    pub content: String, // trimmed, trailing separators removed
}

/// Locate every marker left to right and return the non-empty spans between them.
pub fn extract_segments(text: &str, marker: SegmentMarker) -> Vec<Segment> {
    // (numeral, marker start, content start)
    let markers: Vec<(u32, usize, usize)> = marker
        .pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?.as_str().parse().ok()?;
            Some((number, whole.start(), whole.end()))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .filter_map(|(i, &(number, _, start))| {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.1);
            let content = clean_segment(&text[start..end]);
            if content.is_empty() {
                None
            } else {
                Some(Segment { number, start, end, content })
            }
        })
        .collect()
}

/// Trim and drop trailing `.`, `,` and `;` separators.
pub fn clean_segment(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '.' | ',' | ';'))
        .to_string()
}
