use serde::{Deserialize, Serialize};

use crate::types::{DocumentValue, RecommendationStructure, RichBlock, Section};

/// Structured rendition of one analysis response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReport {
    pub company: Option<String>, // from ingestion.structured.name
    pub panels: Vec<ReportPanel>,
}

impl StructuredReport {
    /// Find a panel by payload key ("Final Analysis", "ingestion.structured", ...)
    pub fn panel(&self, key: &str) -> Option<&ReportPanel> {
        self.panels.iter().find(|panel| panel.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

/// One payload field, structured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPanel {
    pub key: String,   // payload key
    pub title: String, // display title
    pub blocks: Vec<ReportBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportBlock {
    pub label: Option<String>, // "Integrated Analysis", "Recommendation", ...
    pub content: ReportContent,
}

impl ReportBlock {
    pub fn unlabeled(content: ReportContent) -> Self {
        Self { label: None, content }
    }

    pub fn labeled(label: impl Into<String>, content: ReportContent) -> Self {
        Self {
            label: Some(label.into()),
            content,
        }
    }
}

/// Output of whichever tier of the fallback chain succeeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReportContent {
    Sections(Vec<Section>),
    Recommendation(RecommendationStructure),
    RichText(Vec<RichBlock>),
    Value(DocumentValue),
    RawText(String),
}

impl ReportContent {
    /// Short name of the tier, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ReportContent::Sections(_) => "sections",
            ReportContent::Recommendation(_) => "recommendation",
            ReportContent::RichText(_) => "rich_text",
            ReportContent::Value(_) => "value",
            ReportContent::RawText(_) => "raw_text",
        }
    }
}
