//! Sanitizer
//!
//! Removes generation artifacts before any structural parsing:
//! - Stray single-letter lines ("P", "T.", "M:") sitting between two newlines
//! - Runs of three or more newlines (collapsed to one blank line)

use once_cell::sync::Lazy;
use regex::Regex;

static RE_ARTIFACT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[A-Z][.:]?\s*$").unwrap());

static RE_EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// True for a line holding nothing but a single uppercase letter, optionally
/// followed by `.` or `:`.
pub fn is_artifact_line(line: &str) -> bool {
    RE_ARTIFACT_LINE.is_match(line)
}

/// Strip artifact lines and collapse blank-line runs.
///
/// Only lines with a newline on both sides are candidates, so the first and
/// last line of the text are always kept. Idempotent.
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;

    let kept: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|(i, line)| *i == 0 || *i == last || !is_artifact_line(line))
        .map(|(_, line)| *line)
        .collect();

    RE_EXCESS_NEWLINES
        .replace_all(&kept.join("\n"), "\n\n")
        .into_owned()
}
