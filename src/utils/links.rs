//! Link Stripper
//!
//! Cleans biographical snippets scraped from the web. Passes run in order:
//! markdown links are unwrapped before URL removal so their labels survive,
//! and whitespace/punctuation repair runs last over whatever the removals left.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_MARKDOWN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()\s]*)\)").unwrap());

static RE_PAREN_WITH_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^()]*https?://[^()]*\)").unwrap());

static RE_BARE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

static RE_EMPTY_PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\s*\)|\[\s*\]").unwrap());

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static RE_SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,;:])").unwrap());

static RE_REPEATED_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([,;:])(?:\s*[,;:])+").unwrap());

static RE_PUNCT_SPACING: Lazy<Regex> = Lazy::new(|| Regex::new(r"([,;])(\p{L})").unwrap());

/// Remove markdown links, URL-bearing parentheticals and bare URLs.
pub fn strip_links(text: &str) -> String {
    let s = RE_MARKDOWN_LINK.replace_all(text, "$1");
    let s = RE_PAREN_WITH_URL.replace_all(&s, " ");
    let s = RE_BARE_URL.replace_all(&s, " ");
    let s = RE_EMPTY_PARENS.replace_all(&s, " ");
    let s = RE_WHITESPACE.replace_all(&s, " ");
    let s = RE_SPACE_BEFORE_PUNCT.replace_all(&s, "$1");
    let s = RE_REPEATED_PUNCT.replace_all(&s, "$1");
    let s = RE_PUNCT_SPACING.replace_all(&s, "$1 $2");

    s.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':'))
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '-'))
        .to_string()
}
