//! Founder-Analysis Parser
//!
//! Input is the founder agent's `analysis` narrative, typically:
//!
//! ```text
//! Analysis: 1) Founder-market fit - Ex-Stripe PM - Two exits. 2) Team. Small but senior.
//! Bottom line - Strong operators. Hiring a CTO is the main gap.
//! ```
//!
//! Output order: the "Bottom line" section (when present) first, then one
//! section per numbered segment.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Section;
use crate::utils::{extract_segments, split_sentences, SegmentMarker};

pub const BOTTOM_LINE_TITLE: &str = "Bottom line";

const DASH_DELIMITER: &str = " - ";

static RE_ANALYSIS_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^analysis\s*:\s*").unwrap());

static RE_BOTTOM_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bbottom\s+line\s*[-–—:]\s*").unwrap());

/// Parse a founder-analysis narrative into sections. Never fails; blank input
/// yields no sections.
pub fn parse_founder_analysis(text: &str) -> Vec<Section> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    let text = RE_ANALYSIS_LABEL.replace(text, "");

    let (body, bottom_line) = split_bottom_line(&text);

    let mut sections: Vec<Section> = bottom_line.into_iter().collect();

    let segments = extract_segments(body, SegmentMarker::Bare);
    if segments.is_empty() {
        tracing::debug!("Founder analysis has no numbered markers, splitting on dashes");
        sections.extend(Section::new("", body.split(DASH_DELIMITER)));
        return sections;
    }

    sections.extend(segments.iter().filter_map(|segment| {
        let (title, body) = split_title(&segment.content);
        Section::new(title, body_bullets(body))
    }));

    sections
}

/// Detach a trailing "Bottom line - ..." clause as its own section.
///
/// Only the last occurrence counts, and only when no numbered segment follows it.
fn split_bottom_line(text: &str) -> (&str, Option<Section>) {
    let Some(m) = RE_BOTTOM_LINE.find_iter(text).last() else {
        return (text, None);
    };

    let content = &text[m.end()..];
    if !extract_segments(content, SegmentMarker::Bare).is_empty() {
        tracing::debug!("Bottom line clause is followed by numbered segments, leaving it in place");
        return (text, None);
    }

    let section = Section::new(BOTTOM_LINE_TITLE, split_sentences(content));
    (&text[..m.start()], section)
}

/// `Title - body`, else `Title. body`, else untitled.
fn split_title(segment: &str) -> (&str, &str) {
    if let Some((title, body)) = segment.split_once(DASH_DELIMITER) {
        (title, body)
    } else if let Some((title, body)) = segment.split_once('.') {
        (title, body)
    } else {
        ("", segment)
    }
}

/// Dash-separated parts, else sentences, else the whole body.
fn body_bullets(body: &str) -> Vec<String> {
    let parts: Vec<String> = body
        .split(DASH_DELIMITER)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if !parts.is_empty() {
        return parts;
    }

    let sentences = split_sentences(body);
    if !sentences.is_empty() {
        return sentences;
    }

    let whole = body.trim();
    if whole.is_empty() {
        Vec::new()
    } else {
        vec![whole.to_string()]
    }
}
