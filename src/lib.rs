//! VC Report Structuring Engine
//!
//! Turns the free-text narratives of a startup-analysis response into
//! display-ready structure: titled bullet sections, numbered conditions,
//! heading/bullet/paragraph blocks, and labeled trees for everything else.
//!
//! Layout:
//! - `utils/`: sanitizing, link stripping, segment extraction, sentence splitting
//! - `parsers/`: founder, final-analysis, recommendation and rich-text parsers
//! - `document`: generic value renderer
//! - `report/`: field table, report assembly, markdown and JSON formatters
//!
//! Every parser is total. Unparseable text falls back to a simpler
//! structure, ending at the raw text itself.

pub mod utils;
pub mod types;
pub mod document;
pub mod parsers;
pub mod report;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use types::{DocumentValue, MappingEntry, RecommendationStructure, RichBlock, Section, PLACEHOLDER};
pub use document::{humanize_label, render, render_with_depth};
pub use parsers::{parse_final_analysis, parse_founder_analysis, parse_recommendation, parse_rich_text};
pub use utils::{extract_segments, sanitize, strip_links, SegmentMarker};
pub use report::{
    structure_text, JsonFormatter, MarkdownFormatter, NarrativeKind, ReportBlock, ReportContent,
    ReportGenerator, ReportPanel, StructuredReport,
};
pub use config::EngineConfig;
pub use error::{ReportError, Result};
