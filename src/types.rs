use serde::{Deserialize, Serialize};

/// Placeholder rendered for absent or empty values
pub const PLACEHOLDER: &str = "—";

/// Titled (or untitled) group of bullets recovered from narrative text
///
/// An empty title means "untitled, render as a flat list". Sections are never
/// constructed without at least one bullet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,        // "Market", "Bottom line", or ""
    pub bullets: Vec<String>, // non-empty, trimmed
}

impl Section {
    /// Build a section, dropping blank bullets. Returns None when nothing is left.
    pub fn new<T, I, S>(title: T, bullets: I) -> Option<Self>
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bullets: Vec<String> = bullets
            .into_iter()
            .map(|b| b.as_ref().trim().to_string())
            .filter(|b| !b.is_empty())
            .collect();

        if bullets.is_empty() {
            return None;
        }

        Some(Self {
            title: title.into().trim().to_string(),
            bullets,
        })
    }

    pub fn is_untitled(&self) -> bool {
        self.title.is_empty()
    }
}

/// Recommendation split into headline/rationale and a numbered conditions list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationStructure {
    pub preface: Vec<String>,  // 0-2 entries: headline, then "Rationale: ..."
    pub numbered: Vec<String>, // conditions in order of appearance
}

impl RecommendationStructure {
    /// Both parts empty: the caller shows the original text verbatim
    pub fn is_empty(&self) -> bool {
        self.preface.is_empty() && self.numbered.is_empty()
    }
}

/// One labeled entry of a rendered mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub label: String,
    pub value: DocumentValue,
}

/// Display tree for arbitrary JSON-like values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DocumentValue {
    Scalar(String),
    Sequence(Vec<DocumentValue>),
    Mapping(Vec<MappingEntry>),
}

impl DocumentValue {
    pub fn placeholder() -> Self {
        DocumentValue::Scalar(PLACEHOLDER.to_string())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, DocumentValue::Scalar(s) if s == PLACEHOLDER)
    }
}

/// Block recovered from heading/bullet/paragraph narratives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RichBlock {
    Heading(String),
    BulletList(Vec<String>),
    Paragraph(String),
}
