use crate::report::types::StructuredReport;
use serde_json;

/// JSON formatter for structured reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &StructuredReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &StructuredReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}
