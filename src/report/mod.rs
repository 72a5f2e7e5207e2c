pub mod types;
pub mod fields;
pub mod generator;
pub mod formatters;

pub use types::{ReportBlock, ReportContent, ReportPanel, StructuredReport};
pub use fields::{field_spec, FieldSpec, NarrativeKey, NarrativeKind, ANALYSIS_FIELDS};
pub use generator::{structure_text, ReportGenerator};
pub use formatters::{JsonFormatter, MarkdownFormatter};
