//! Generic Value Renderer
//!
//! Turns any JSON value into a `DocumentValue` display tree. Used for every
//! payload field that has no narrative parser, and for the non-narrative keys
//! of fields that do.

use serde_json::Value;

use crate::types::{DocumentValue, MappingEntry};

/// Default nesting limit; deeper values render as the placeholder
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Render with the default depth limit.
pub fn render(value: &Value) -> DocumentValue {
    render_with_depth(value, DEFAULT_MAX_DEPTH)
}

/// Render, treating anything nested deeper than `max_depth` as the placeholder.
pub fn render_with_depth(value: &Value, max_depth: usize) -> DocumentValue {
    render_at(value, 0, max_depth)
}

fn render_at(value: &Value, depth: usize, max_depth: usize) -> DocumentValue {
    if depth > max_depth {
        tracing::debug!("Value nested deeper than {} levels, rendering placeholder", max_depth);
        return DocumentValue::placeholder();
    }

    match value {
        Value::Null => DocumentValue::placeholder(),
        Value::String(s) => DocumentValue::Scalar(s.clone()),
        Value::Number(n) => DocumentValue::Scalar(n.to_string()),
        Value::Bool(b) => DocumentValue::Scalar(b.to_string()),
        Value::Array(items) if items.is_empty() => DocumentValue::placeholder(),
        Value::Array(items) => DocumentValue::Sequence(
            items
                .iter()
                .map(|item| render_at(item, depth + 1, max_depth))
                .collect(),
        ),
        Value::Object(map) if map.is_empty() => DocumentValue::placeholder(),
        Value::Object(map) => DocumentValue::Mapping(
            map.iter()
                .map(|(key, item)| MappingEntry {
                    label: humanize_label(key),
                    value: render_at(item, depth + 1, max_depth),
                })
                .collect(),
        ),
    }
}

/// `market_size` -> `Market Size`, `go-to-market  plan` -> `Go To Market Plan`.
///
/// Only the first letter of each word is touched; `IntegratedAnalysis` and
/// `USP` keep their casing.
pub fn humanize_label(key: &str) -> String {
    key.replace(|c: char| c == '-' || c == '_', " ")
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
