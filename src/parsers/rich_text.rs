//! Rich-Text Bullet Parser
//!
//! General converter for product/tech and founder-fit narratives that mix
//! headings, hyphen bullets and prose. Normalization runs first (escaped
//! newlines, inline headings, inline bullets), then the text is cut into
//! blank-line separated blocks and handed to each strategy in turn.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::RichBlock;

/// Headings that upstream passes write inline (`Summary: ...`)
pub const INLINE_HEADINGS: [&str; 9] = [
    "summary",
    "founder-market fit and track record",
    "strategic clarity and vision alignment",
    "organizational strengths",
    "key risks and gaps",
    "why the score isn't a 10",
    "why the score isn’t a 10",
    "what to watch",
    "bottom line",
];

/// Additional line prefixes recognized as block headings
pub const BLOCK_HEADINGS: [&str; 7] = [
    "what stands out",
    "gaps and risks",
    "net:",
    "strengths",
    "execution considerations",
    "overall",
    "competitive context",
];

static RE_INLINE_HEADING: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = INLINE_HEADINGS.iter().map(|h| regex::escape(h)).collect();
    Regex::new(&format!(r"(?i)\b({}):[ \t]*", alternatives.join("|"))).unwrap()
});

static RE_ANALYSIS_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*analysis\s*:\s*").unwrap());

static RE_INLINE_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r#" - ([A-Z0-9"'“‘(])"#).unwrap());

static RE_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").unwrap());

const BULLET_PREFIX: &str = "- ";

/// One way of reading the normalized blocks; None when it finds nothing
pub type Strategy = fn(&[&str]) -> Option<Vec<RichBlock>>;

/// Strategies in priority order
pub const STRATEGIES: [(&str, Strategy); 2] = [
    ("headed blocks", headed_blocks),
    ("paragraphs", paragraphs),
];

/// Parse a narrative into heading, bullet-list and paragraph blocks.
/// An empty result means the caller should show the raw text.
pub fn parse_rich_text(text: &str) -> Vec<RichBlock> {
    let normalized = normalize(text);
    let blocks: Vec<&str> = RE_BLANK_LINES.split(&normalized).collect();

    STRATEGIES
        .iter()
        .find_map(|(name, strategy)| {
            let parsed = strategy(&blocks)?;
            tracing::debug!("Rich text structured by {} ({} blocks)", name, parsed.len());
            Some(parsed)
        })
        .unwrap_or_default()
}

/// Headings and bullet lists, with leftover prose as paragraphs.
///
/// Declines when no block carries a heading or a bullet.
pub fn headed_blocks(blocks: &[&str]) -> Option<Vec<RichBlock>> {
    let parsed: Vec<RichBlock> = blocks.iter().flat_map(|block| parse_block(block)).collect();

    let structured = parsed
        .iter()
        .any(|block| !matches!(block, RichBlock::Paragraph(_)));
    structured.then_some(parsed)
}

/// Every non-blank block as one paragraph
pub fn paragraphs(blocks: &[&str]) -> Option<Vec<RichBlock>> {
    let parsed: Vec<RichBlock> = blocks
        .iter()
        .filter_map(|block| {
            let lines = non_blank_lines(block);
            (!lines.is_empty()).then(|| RichBlock::Paragraph(lines.join(" ")))
        })
        .collect();

    (!parsed.is_empty()).then_some(parsed)
}

fn non_blank_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn normalize(text: &str) -> String {
    let s = text.replace("\\n", "\n").replace("\r\n", "\n");
    let s = RE_INLINE_HEADING.replace_all(&s, "${1}:\n");
    let s = RE_ANALYSIS_LABEL.replace(&s, "");

    if RE_INLINE_BULLET.find_iter(&s).count() >= 2 {
        RE_INLINE_BULLET.replace_all(&s, "\n- ${1}").into_owned()
    } else {
        s.into_owned()
    }
}

fn parse_block(block: &str) -> Vec<RichBlock> {
    let lines = non_blank_lines(block);

    let Some((first, rest)) = lines.split_first() else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    let body = if is_heading(first) {
        blocks.push(RichBlock::Heading(first.to_string()));
        rest
    } else {
        &lines[..]
    };

    let (bullets, prose): (Vec<&str>, Vec<&str>) =
        body.iter().partition(|line| line.starts_with(BULLET_PREFIX));

    let bullets: Vec<String> = bullets
        .iter()
        .map(|line| line[BULLET_PREFIX.len()..].trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    if !bullets.is_empty() {
        blocks.push(RichBlock::BulletList(bullets));
    }
    if !prose.is_empty() {
        blocks.push(RichBlock::Paragraph(prose.join(" ")));
    }

    blocks
}

/// Case-insensitive prefix match against the heading vocabulary
pub fn is_heading(line: &str) -> bool {
    let lower = line.to_lowercase();
    INLINE_HEADINGS
        .iter()
        .chain(BLOCK_HEADINGS.iter())
        .any(|heading| lower.starts_with(heading))
}
