//! Narrative parsers
//!
//! Each parser is chosen by payload field, never by sniffing the text:
//! - `founder`: numbered founder analysis with a "Bottom line" clause
//! - `final_analysis`: integrated multi-topic narrative (block then inline headings)
//! - `recommendation`: headline, rationale and numbered conditions
//! - `rich_text`: heading/bullet/paragraph mixes (product, founder fit)
//!
//! None of them fail. An empty (or None) result means "fall back one tier".

pub mod founder;
pub mod final_analysis;
pub mod recommendation;
pub mod rich_text;

pub use founder::parse_founder_analysis;
pub use final_analysis::parse_final_analysis;
pub use recommendation::parse_recommendation;
pub use rich_text::parse_rich_text;
