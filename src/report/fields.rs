//! Payload field table
//!
//! Maps each known analysis key to the parser used for its narratives.
//! Selection is by field identity only.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

pub const PROFILE_KEY: &str = "ingestion.structured";
pub const PROFILE_TITLE: &str = "Company Profile";

/// Profile keys left untouched by link stripping
pub const PROFILE_LINK_KEYS: [&str; 1] = ["citations"];

/// Parser family for a narrative string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeKind {
    FounderAnalysis,
    FinalAnalysis,
    Recommendation,
    RichText,
}

/// Narrative key inside an object-valued field
#[derive(Debug, Clone, Copy)]
pub struct NarrativeKey {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: NarrativeKind,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub primary: Option<NarrativeKind>, // parser when the whole value is a string
    pub narratives: &'static [NarrativeKey],
}

impl FieldSpec {
    pub fn narrative(&self, key: &str) -> Option<&NarrativeKey> {
        self.narratives.iter().find(|n| n.key == key)
    }
}

const fn narrative(key: &'static str, label: &'static str, kind: NarrativeKind) -> NarrativeKey {
    NarrativeKey { key, label, kind }
}

const FINAL_NARRATIVES: &[NarrativeKey] = &[
    narrative("IntegratedAnalysis", "Integrated Analysis", NarrativeKind::FinalAnalysis),
    narrative("recommendation", "Recommendation", NarrativeKind::Recommendation),
];

const PRODUCT_NARRATIVES: &[NarrativeKey] = &[
    narrative("features_analysis", "Features Analysis", NarrativeKind::RichText),
    narrative("tech_stack_evaluation", "Tech Stack Evaluation", NarrativeKind::RichText),
    narrative("usp_assessment", "USP Assessment", NarrativeKind::RichText),
];

const FOUNDER_NARRATIVES: &[NarrativeKey] =
    &[narrative("analysis", "Analysis", NarrativeKind::FounderAnalysis)];

const IDEA_FIT_NARRATIVES: &[NarrativeKey] =
    &[narrative("rationale", "Rationale", NarrativeKind::RichText)];

/// Known analysis fields, in display order
pub static ANALYSIS_FIELDS: [FieldSpec; 8] = [
    FieldSpec {
        key: "Final Analysis",
        title: "Final Analysis",
        primary: Some(NarrativeKind::FinalAnalysis),
        narratives: FINAL_NARRATIVES,
    },
    FieldSpec {
        key: "Market Analysis",
        title: "Market Analysis",
        primary: Some(NarrativeKind::RichText),
        narratives: &[],
    },
    FieldSpec {
        key: "Product Analysis",
        title: "Product Analysis",
        primary: Some(NarrativeKind::RichText),
        narratives: PRODUCT_NARRATIVES,
    },
    FieldSpec {
        key: "Founder Analysis",
        title: "Founder Analysis",
        primary: Some(NarrativeKind::FounderAnalysis),
        narratives: FOUNDER_NARRATIVES,
    },
    FieldSpec {
        key: "Founder Segmentation",
        title: "Founder Segmentation",
        primary: None,
        narratives: &[],
    },
    FieldSpec {
        key: "Founder Idea Fit",
        title: "Founder Idea Fit",
        primary: Some(NarrativeKind::RichText),
        narratives: IDEA_FIT_NARRATIVES,
    },
    FieldSpec {
        key: "Categorical Prediction",
        title: "Categorical Prediction",
        primary: None,
        narratives: &[],
    },
    FieldSpec {
        key: "Categorization",
        title: "Categorization",
        primary: None,
        narratives: &[],
    },
];

static FIELD_INDEX: Lazy<FxHashMap<&'static str, &'static FieldSpec>> =
    Lazy::new(|| ANALYSIS_FIELDS.iter().map(|spec| (spec.key, spec)).collect());

/// Spec for a payload key, if it is a known field
pub fn field_spec(key: &str) -> Option<&'static FieldSpec> {
    FIELD_INDEX.get(key).copied()
}
