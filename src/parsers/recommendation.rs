//! Recommendation Parser
//!
//! `Invest (Lead). Rationale: strong team. Conditions: (1) Close round (2) Sign agreement`
//! becomes a two-entry preface (headline, rationale) and a numbered list.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::RecommendationStructure;
use crate::utils::{extract_segments, normalize_whitespace, SegmentMarker};

static RE_CONDITIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)conditions").unwrap());

static RE_FIRST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(1\)").unwrap());

static RE_RATIONALE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s*Rationale:").unwrap());

/// Leading `Conditions precedent:` style label; stops at the first marker
static RE_TAIL_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^:(]*:\s*").unwrap());

const RATIONALE_TOKEN: &str = "Rationale:";

/// Split a recommendation into preface and numbered conditions. Never fails;
/// an empty structure tells the caller to show the text verbatim.
pub fn parse_recommendation(text: &str) -> RecommendationStructure {
    let split = RE_CONDITIONS
        .find(text)
        .or_else(|| RE_FIRST_MARKER.find(text))
        .map(|m| m.start());

    let preface_raw = match split {
        Some(idx) if idx > 0 => &text[..idx],
        _ => text,
    };
    let preface = split_preface(&normalize_whitespace(preface_raw));

    let numbered = match split {
        Some(idx) => {
            let tail = RE_TAIL_LABEL.replace(&text[idx..], "");
            extract_segments(&tail, SegmentMarker::Parenthesized)
                .into_iter()
                .map(|segment| segment.content)
                .collect()
        }
        None => Vec::new(),
    };

    RecommendationStructure { preface, numbered }
}

/// Headline and `Rationale: ...` clause, when the rationale follows a sentence end
fn split_preface(preface: &str) -> Vec<String> {
    if preface.is_empty() {
        return Vec::new();
    }

    if let Some(m) = RE_RATIONALE.find(preface) {
        let headline = preface[..m.start() + 1].trim();
        let rationale = preface[m.end() - RATIONALE_TOKEN.len()..].trim();
        if !headline.is_empty() {
            return vec![headline.to_string(), rationale.to_string()];
        }
    }

    vec![preface.to_string()]
}
