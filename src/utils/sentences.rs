//! Sentence and clause splitting shared by the narrative parsers.
//!
//! Boundaries are matched including the first character of the following
//! sentence, then cut at computed offsets, since `regex` has no look-ahead.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// `.`, `!` or `?`, whitespace, then an uppercase letter or opening quote/paren
static RE_SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]\s+[A-Z"'“‘(\[]"#).unwrap());

/// `;`, whitespace, then an uppercase letter, quote or bracket
static RE_CLAUSE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#";\s+[A-Z"'“‘(\[]"#).unwrap());

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Split on sentence boundaries. Terminal punctuation stays with its sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    split_at_boundaries(text, &RE_SENTENCE_BOUNDARY, true)
}

/// Split on sentence boundaries and on `; ` before a capitalised clause.
/// The semicolon itself is dropped.
pub fn split_sentences_and_clauses(text: &str) -> Vec<String> {
    split_sentences(text)
        .iter()
        .flat_map(|sentence| split_at_boundaries(sentence, &RE_CLAUSE_BOUNDARY, false))
        .collect()
}

fn split_at_boundaries(text: &str, boundary: &Regex, keep_delimiter: bool) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece_start = 0;

    for m in boundary.find_iter(text) {
        // The delimiter is a single ASCII byte; the last matched char opens the next piece
        let cut = if keep_delimiter { m.start() + 1 } else { m.start() };
        let next_len = m.as_str().chars().last().map_or(0, char::len_utf8);

        pieces.push(&text[piece_start..cut]);
        piece_start = m.end() - next_len;
    }
    pieces.push(&text[piece_start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
