use rayon::prelude::*;
use serde_json::{Map, Value};
use std::path::Path;
use std::time::Instant;

use crate::config::EngineConfig;
use crate::document::{humanize_label, render_with_depth};
use crate::error::{ReportError, Result};
use crate::parsers::{parse_final_analysis, parse_founder_analysis, parse_recommendation, parse_rich_text};
use crate::report::fields::{
    field_spec, FieldSpec, NarrativeKind, ANALYSIS_FIELDS, PROFILE_KEY, PROFILE_LINK_KEYS, PROFILE_TITLE,
};
use crate::report::types::*;
use crate::utils::strip_links;

/// Turns analysis payloads into structured reports
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: EngineConfig,
}

impl ReportGenerator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Structure a `{ingestion, analysis}` response, or a bare analysis object.
    ///
    /// Known fields come first in display order, then any other analysis
    /// keys in payload order. Non-object payloads produce an empty report.
    pub fn generate(&self, payload: &Value) -> StructuredReport {
        let start = Instant::now();

        let (ingestion, analysis) = split_payload(payload);
        let structured = ingestion.and_then(|i| i.get("structured"));

        let mut panels = Vec::new();

        if let Some(profile) = structured.and_then(|s| self.profile_panel(s)) {
            panels.push(profile);
        }

        if let Some(analysis) = analysis {
            for spec in ANALYSIS_FIELDS.iter() {
                if let Some(value) = analysis.get(spec.key) {
                    panels.extend(self.panel(spec.key, spec.title, Some(spec), value));
                }
            }
            for (key, value) in analysis.iter().filter(|(key, _)| field_spec(key).is_none()) {
                panels.extend(self.panel(key, &panel_title(key), None, value));
            }
        }

        let company = structured
            .and_then(|s| s.get("name"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        tracing::info!(
            "Structured report for {} ({} panels) in {:.1}ms",
            company.as_deref().unwrap_or("unnamed company"),
            panels.len(),
            start.elapsed().as_secs_f64() * 1000.0,
        );

        StructuredReport { company, panels }
    }

    /// Parse JSON text and structure it. The top level must be an object.
    pub fn generate_from_str(&self, json: &str) -> Result<StructuredReport> {
        let payload: Value = serde_json::from_str(json)?;
        if !payload.is_object() {
            return Err(ReportError::InvalidPayload(format!(
                "expected a JSON object at the top level, found {}",
                json_type_name(&payload)
            )));
        }
        Ok(self.generate(&payload))
    }

    /// Read a JSON payload from disk and structure it.
    pub fn generate_from_path(&self, path: impl AsRef<Path>) -> Result<StructuredReport> {
        let json = std::fs::read_to_string(path.as_ref())?;
        self.generate_from_str(&json)
    }

    /// Structure independent payloads in parallel, preserving input order.
    pub fn generate_batch(&self, payloads: &[Value]) -> Vec<StructuredReport> {
        payloads.par_iter().map(|payload| self.generate(payload)).collect()
    }

    fn panel(&self, key: &str, title: &str, spec: Option<&FieldSpec>, value: &Value) -> Option<ReportPanel> {
        let blocks = self.field_blocks(spec, value);
        if blocks.is_empty() {
            return None;
        }
        Some(ReportPanel {
            key: key.to_string(),
            title: title.to_string(),
            blocks,
        })
    }

    fn field_blocks(&self, spec: Option<&FieldSpec>, value: &Value) -> Vec<ReportBlock> {
        match (value, spec) {
            (Value::String(text), Some(spec)) => match spec.primary {
                Some(kind) => structure_text(kind, text)
                    .map(ReportBlock::unlabeled)
                    .into_iter()
                    .collect(),
                None => self.value_blocks(value),
            },
            (Value::Object(map), Some(spec)) if !spec.narratives.is_empty() => {
                self.object_blocks(spec, map)
            }
            _ => self.value_blocks(value),
        }
    }

    /// Non-narrative keys as one generic block, then each narrative in payload order
    fn object_blocks(&self, spec: &FieldSpec, map: &Map<String, Value>) -> Vec<ReportBlock> {
        let mut remainder = Map::new();
        let mut narratives = Vec::new();

        for (key, value) in map {
            match (spec.narrative(key), value.as_str()) {
                (Some(narrative), Some(text)) => {
                    if let Some(content) = structure_text(narrative.kind, text) {
                        narratives.push(ReportBlock::labeled(narrative.label, content));
                    }
                }
                _ => {
                    remainder.insert(key.clone(), value.clone());
                }
            }
        }

        let mut blocks = Vec::with_capacity(narratives.len() + 1);
        if !remainder.is_empty() {
            blocks.extend(self.value_blocks(&Value::Object(remainder)));
        }
        blocks.extend(narratives);
        blocks
    }

    fn value_blocks(&self, value: &Value) -> Vec<ReportBlock> {
        vec![ReportBlock::unlabeled(ReportContent::Value(render_with_depth(
            value,
            self.config.max_depth,
        )))]
    }

    fn profile_panel(&self, structured: &Value) -> Option<ReportPanel> {
        let Value::Object(map) = structured else {
            return self.panel(PROFILE_KEY, PROFILE_TITLE, None, structured);
        };

        if !self.config.strip_profile_links {
            return self.panel(PROFILE_KEY, PROFILE_TITLE, None, structured);
        }

        let cleaned: Map<String, Value> = map
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(text) if !PROFILE_LINK_KEYS.contains(&key.as_str()) => {
                        Value::String(strip_links(text))
                    }
                    other => other.clone(),
                };
                (key.clone(), value)
            })
            .collect();

        self.panel(PROFILE_KEY, PROFILE_TITLE, None, &Value::Object(cleaned))
    }
}

/// Run one narrative through its fallback chain. None for blank text.
///
/// - Founder analysis: founder parser, then rich text, then raw text
/// - Final analysis: heading strategies, then rich text, then raw text
/// - Recommendation: recommendation parser, then raw text
/// - Rich text: rich-text parser, then raw text
pub fn structure_text(kind: NarrativeKind, text: &str) -> Option<ReportContent> {
    if text.trim().is_empty() {
        return None;
    }

    let content = match kind {
        NarrativeKind::FounderAnalysis => {
            let sections = parse_founder_analysis(text);
            if sections.is_empty() {
                tracing::debug!("Founder analysis unstructured, falling back to rich text");
                rich_text_or_raw(text)
            } else {
                ReportContent::Sections(sections)
            }
        }
        NarrativeKind::FinalAnalysis => match parse_final_analysis(text) {
            Some(sections) => ReportContent::Sections(sections),
            None => {
                tracing::debug!("Final analysis unstructured, falling back to rich text");
                rich_text_or_raw(text)
            }
        },
        NarrativeKind::Recommendation => {
            let recommendation = parse_recommendation(text);
            if recommendation.is_empty() {
                raw_text(text)
            } else {
                ReportContent::Recommendation(recommendation)
            }
        }
        NarrativeKind::RichText => rich_text_or_raw(text),
    };

    tracing::debug!("{:?} narrative structured as {}", kind, content.kind());
    Some(content)
}

fn rich_text_or_raw(text: &str) -> ReportContent {
    let blocks = parse_rich_text(text);
    if blocks.is_empty() {
        raw_text(text)
    } else {
        ReportContent::RichText(blocks)
    }
}

fn raw_text(text: &str) -> ReportContent {
    ReportContent::RawText(text.trim().to_string())
}

/// `{ingestion, analysis}` wrapper, or the payload itself as the analysis
fn split_payload(payload: &Value) -> (Option<&Value>, Option<&Map<String, Value>>) {
    let Value::Object(map) = payload else {
        return (None, None);
    };

    match map.get("analysis") {
        Some(Value::Object(analysis)) => (map.get("ingestion"), Some(analysis)),
        _ if map.contains_key("ingestion") => (map.get("ingestion"), None),
        _ => (None, Some(map)),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Display label for an arbitrary payload key
pub fn panel_title(key: &str) -> String {
    humanize_label(key)
}
