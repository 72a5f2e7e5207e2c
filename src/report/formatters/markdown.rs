use crate::report::types::{ReportBlock, ReportContent, ReportPanel, StructuredReport};
use crate::types::{DocumentValue, RecommendationStructure, RichBlock, Section};

pub const DEFAULT_TITLE: &str = "Analysis Report";

/// Markdown formatter for structured reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &StructuredReport) -> String {
        let mut md = String::with_capacity(4096);

        md.push_str(&format!(
            "# {}\n\n",
            report.company.as_deref().unwrap_or(DEFAULT_TITLE)
        ));

        for panel in &report.panels {
            Self::format_panel(&mut md, panel);
        }

        // Single trailing newline
        let trimmed = md.trim_end().len();
        md.truncate(trimmed);
        md.push('\n');
        md
    }

    fn format_panel(md: &mut String, panel: &ReportPanel) {
        md.push_str(&format!("## {}\n\n", panel.title));
        for block in &panel.blocks {
            Self::format_block(md, block);
        }
    }

    fn format_block(md: &mut String, block: &ReportBlock) {
        if let Some(label) = &block.label {
            md.push_str(&format!("### {}\n\n", label));
        }

        match &block.content {
            ReportContent::Sections(sections) => Self::format_sections(md, sections),
            ReportContent::Recommendation(rec) => Self::format_recommendation(md, rec),
            ReportContent::RichText(blocks) => Self::format_rich_text(md, blocks),
            ReportContent::Value(value) => Self::format_value(md, value),
            ReportContent::RawText(text) => md.push_str(&format!("{}\n\n", text)),
        }
    }

    fn format_sections(md: &mut String, sections: &[Section]) {
        for section in sections {
            if !section.is_untitled() {
                md.push_str(&format!("**{}**\n\n", section.title));
            }
            for bullet in &section.bullets {
                md.push_str(&format!("- {}\n", bullet));
            }
            md.push('\n');
        }
    }

    fn format_recommendation(md: &mut String, rec: &RecommendationStructure) {
        for paragraph in &rec.preface {
            md.push_str(&format!("{}\n\n", paragraph));
        }
        if !rec.numbered.is_empty() {
            for (i, condition) in rec.numbered.iter().enumerate() {
                md.push_str(&format!("{}. {}\n", i + 1, condition));
            }
            md.push('\n');
        }
    }

    fn format_rich_text(md: &mut String, blocks: &[RichBlock]) {
        for block in blocks {
            match block {
                RichBlock::Heading(heading) => md.push_str(&format!("#### {}\n\n", heading)),
                RichBlock::BulletList(items) => {
                    for item in items {
                        md.push_str(&format!("- {}\n", item));
                    }
                    md.push('\n');
                }
                RichBlock::Paragraph(text) => md.push_str(&format!("{}\n\n", text)),
            }
        }
    }

    fn format_value(md: &mut String, value: &DocumentValue) {
        match value {
            DocumentValue::Scalar(text) => md.push_str(&format!("{}\n\n", text)),
            nested => {
                Self::format_items(md, nested, 0);
                md.push('\n');
            }
        }
    }

    /// Nested list, two spaces per level
    fn format_items(md: &mut String, value: &DocumentValue, indent: usize) {
        let pad = "  ".repeat(indent);

        match value {
            DocumentValue::Scalar(text) => md.push_str(&format!("{}- {}\n", pad, text)),
            DocumentValue::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    match item {
                        DocumentValue::Scalar(text) => md.push_str(&format!("{}- {}\n", pad, text)),
                        nested => {
                            md.push_str(&format!("{}- Item {}\n", pad, i + 1));
                            Self::format_items(md, nested, indent + 1);
                        }
                    }
                }
            }
            DocumentValue::Mapping(entries) => {
                for entry in entries {
                    match &entry.value {
                        DocumentValue::Scalar(text) => {
                            md.push_str(&format!("{}- **{}:** {}\n", pad, entry.label, text))
                        }
                        nested => {
                            md.push_str(&format!("{}- **{}:**\n", pad, entry.label));
                            Self::format_items(md, nested, indent + 1);
                        }
                    }
                }
            }
        }
    }
}
