//! Final-Analysis Parser
//!
//! Recovers topic sections from the integrated narrative. Upstream passes
//! write topic headings either as standalone lines:
//!
//! ```text
//! Market
//!
//! Large and growing TAM.
//! Fragmented competition.
//! ```
//!
//! or inline (`Market: Large TAM. Team: Experienced.`). Strategies are tried in
//! that order and the first one producing sections wins.
//!
//! Multi-line topic content keeps each line as a bullet, minus one leading
//! `-`, `•` or `*` glyph so formatters don't render a second bullet marker.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Section;
use crate::utils::{is_artifact_line, normalize_whitespace, sanitize, split_sentences_and_clauses};

/// Topic headings as written by the integration pass (case-sensitive)
pub const HEADING_KEYWORDS: [&str; 5] = [
    "Market",
    "Product/Tech",
    "Traction/Distribution",
    "Team",
    "Bottom line",
];

static RE_FINAL_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*final\s+analysis\b\s*[:\-–—]?\s*").unwrap());

static RE_INLINE_HEADING: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = HEADING_KEYWORDS.iter().map(|k| regex::escape(k)).collect();
    Regex::new(&format!(r#"(?:^|[\s*"'(\[])({})\s*:"#, alternatives.join("|"))).unwrap()
});

static RE_BULLET_GLYPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[-•*]\s+)").unwrap());

/// One way of recovering sections; None when it finds no structure
pub type Strategy = fn(&str) -> Option<Vec<Section>>;

/// Strategies in priority order
pub const STRATEGIES: [(&str, Strategy); 2] = [
    ("block headings", block_headings),
    ("inline headings", inline_headings),
];

/// Parse the integrated analysis. None means no recognizable structure and
/// the caller should show the raw text.
pub fn parse_final_analysis(text: &str) -> Option<Vec<Section>> {
    let cleaned = sanitize(text);
    let cleaned = RE_FINAL_LABEL.replace(&cleaned, "");

    let result = STRATEGIES.iter().find_map(|(name, strategy)| {
        let sections = strategy(&cleaned)?;
        tracing::debug!("Final analysis structured by {} ({} sections)", name, sections.len());
        Some(sections)
    });

    if result.is_none() {
        tracing::debug!("Final analysis matched no heading strategy");
    }
    result
}

/// Heading lines (`Market` or `Market:`) set off by blank lines, content up
/// to the next heading.
///
/// Text before the first heading is not part of any section.
pub fn block_headings(text: &str) -> Option<Vec<Section>> {
    let lines: Vec<&str> = text.split('\n').collect();
    let is_blank = |i: Option<usize>| i.and_then(|i| lines.get(i)).map_or(true, |l| l.trim().is_empty());

    let headings: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .filter(|(i, _)| is_blank(i.checked_sub(1)) && is_blank(Some(i + 1)))
        .filter_map(|(i, line)| heading_keyword(line).map(|keyword| (i, keyword)))
        .collect();

    let sections: Vec<Section> = headings
        .iter()
        .enumerate()
        .filter_map(|(h, &(line_idx, keyword))| {
            let content_end = headings.get(h + 1).map_or(lines.len(), |next| next.0);
            let content = lines[line_idx + 1..content_end].join("\n");
            Section::new(keyword, to_bullets(&content))
        })
        .collect();

    non_empty(sections)
}

/// `Keyword: content` occurrences anywhere, content up to the next occurrence.
pub fn inline_headings(text: &str) -> Option<Vec<Section>> {
    // (keyword, heading start, content start)
    let matches: Vec<(&str, usize, usize)> = RE_INLINE_HEADING
        .captures_iter(text)
        .filter_map(|caps| {
            let keyword = caps.get(1)?;
            Some((keyword.as_str(), keyword.start(), caps.get(0)?.end()))
        })
        .collect();

    let sections: Vec<Section> = matches
        .iter()
        .enumerate()
        .filter_map(|(i, &(keyword, _, start))| {
            let end = matches.get(i + 1).map_or(text.len(), |next| next.1);
            Section::new(keyword, to_bullets(&text[start..end]))
        })
        .collect();

    non_empty(sections)
}

/// Bullets for one topic's content.
///
/// Two or more meaningful lines are taken as the bullets (leading bullet glyph
/// removed); otherwise the content is split into sentences and capitalised
/// `;` clauses.
pub fn to_bullets(content: &str) -> Vec<String> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_artifact_line(line))
        .collect();

    if lines.len() >= 2 {
        return lines
            .iter()
            .map(|line| RE_BULLET_GLYPH.replace(line, "").trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
    }

    split_sentences_and_clauses(&normalize_whitespace(&lines.join(" ")))
}

fn heading_keyword(line: &str) -> Option<&'static str> {
    let trimmed = line.trim();
    let bare = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
    HEADING_KEYWORDS.iter().copied().find(|keyword| *keyword == bare)
}

fn non_empty(sections: Vec<Section>) -> Option<Vec<Section>> {
    if sections.is_empty() {
        None
    } else {
        Some(sections)
    }
}
