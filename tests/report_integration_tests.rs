// Report Integration Tests
//
// Purpose: Structure complete analysis responses end to end and check the
// parser fallback chain, panel ordering and both output formats.
// Run with: cargo test --test report_integration_tests

use serde_json::{json, Value};
use vc_report_structurer::report::NarrativeKind;
use vc_report_structurer::utils::sanitize;
use vc_report_structurer::{
    parse_final_analysis, parse_founder_analysis, parse_recommendation, parse_rich_text, render,
    structure_text, DocumentValue, EngineConfig, JsonFormatter, MappingEntry, MarkdownFormatter,
    ReportContent, ReportGenerator, RichBlock, StructuredReport,
};

// Helper: A realistic analysis response
fn sample_payload() -> Value {
    json!({
        "ingestion": {
            "structured": {
                "name": "Acme Robotics",
                "description": "Warehouse robots. See [site](https://acme.io) (https://acme.io/about)",
                "citations": ["https://news.example.com/acme"]
            }
        },
        "analysis": {
            "Quantitative Decision": {"outcome": "Successful", "probability": 0.72},
            "Founder Analysis": {
                "analysis": "1) Market - Big and growing. 2) Team - Strong. Bottom line - Invest.",
                "competency_score": 8
            },
            "Categorization": {"industry": "Robotics", "stage": "Seed"},
            "Market Analysis": "Summary: Fragmented market. - Incumbents are slow - Buyers want automation",
            "Final Analysis": {
                "overall_score": 7.5,
                "IntegratedAnalysis": "Market: Large TAM.\n\nTeam: Experienced.",
                "recommendation": "Invest (Lead). Rationale: strong team. Conditions: (1) Close round (2) Sign agreement"
            },
            "Product Analysis": {"features_analysis": "   "},
            "Founder Idea Fit": ""
        }
    })
}

fn scalar(text: &str) -> DocumentValue {
    DocumentValue::Scalar(text.to_string())
}

fn entry<'a>(value: &'a DocumentValue, label: &str) -> Option<&'a DocumentValue> {
    match value {
        DocumentValue::Mapping(entries) => entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| &e.value),
        _ => None,
    }
}

fn generate(payload: &Value) -> StructuredReport {
    ReportGenerator::default().generate(payload)
}

// =========================================================================
// Section 1: Report assembly
// =========================================================================

#[test]
fn test_panel_order_and_empty_panels() {
    let report = generate(&sample_payload());

    let keys: Vec<&str> = report.panels.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "ingestion.structured",
            "Final Analysis",
            "Market Analysis",
            "Founder Analysis",
            "Categorization",
            "Quantitative Decision",
        ]
    );
    assert_eq!(report.company.as_deref(), Some("Acme Robotics"));
    assert_eq!(report.panels[0].title, "Company Profile");
}

#[test]
fn test_final_analysis_panel() {
    let report = generate(&sample_payload());
    let panel = report.panel("Final Analysis").unwrap();

    assert_eq!(panel.blocks.len(), 3);

    let ReportContent::Value(remainder) = &panel.blocks[0].content else {
        panic!("expected generic block first");
    };
    assert_eq!(entry(remainder, "Overall Score"), Some(&scalar("7.5")));

    assert_eq!(panel.blocks[1].label.as_deref(), Some("Integrated Analysis"));
    let ReportContent::Sections(sections) = &panel.blocks[1].content else {
        panic!("expected sections");
    };
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "Market");
    assert_eq!(sections[0].bullets, vec!["Large TAM."]);
    assert_eq!(sections[1].title, "Team");
    assert_eq!(sections[1].bullets, vec!["Experienced."]);

    assert_eq!(panel.blocks[2].label.as_deref(), Some("Recommendation"));
    let ReportContent::Recommendation(rec) = &panel.blocks[2].content else {
        panic!("expected recommendation");
    };
    assert_eq!(rec.preface, vec!["Invest (Lead).", "Rationale: strong team."]);
    assert_eq!(rec.numbered, vec!["Close round", "Sign agreement"]);
}

#[test]
fn test_founder_analysis_panel() {
    let report = generate(&sample_payload());
    let panel = report.panel("Founder Analysis").unwrap();

    // Non-narrative keys come first even when they follow the narrative
    let ReportContent::Value(remainder) = &panel.blocks[0].content else {
        panic!("expected generic block first");
    };
    assert_eq!(entry(remainder, "Competency Score"), Some(&scalar("8")));

    let ReportContent::Sections(sections) = &panel.blocks[1].content else {
        panic!("expected sections");
    };
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Bottom line", "Market", "Team"]);
    assert_eq!(sections[0].bullets, vec!["Invest."]);
}

#[test]
fn test_market_analysis_rich_text() {
    let report = generate(&sample_payload());
    let panel = report.panel("Market Analysis").unwrap();

    assert_eq!(panel.blocks.len(), 1);
    assert!(panel.blocks[0].label.is_none());
    assert_eq!(
        panel.blocks[0].content,
        ReportContent::RichText(vec![
            RichBlock::Heading("Summary:".to_string()),
            RichBlock::BulletList(vec![
                "Incumbents are slow".to_string(),
                "Buyers want automation".to_string(),
            ]),
            RichBlock::Paragraph("Fragmented market.".to_string()),
        ])
    );
}

#[test]
fn test_generic_fields_render_as_trees() {
    let report = generate(&sample_payload());

    let panel = report.panel("Categorization").unwrap();
    assert_eq!(
        panel.blocks[0].content,
        ReportContent::Value(DocumentValue::Mapping(vec![
            MappingEntry {
                label: "Industry".to_string(),
                value: scalar("Robotics"),
            },
            MappingEntry {
                label: "Stage".to_string(),
                value: scalar("Seed"),
            },
        ]))
    );

    let panel = report.panel("Quantitative Decision").unwrap();
    assert_eq!(panel.title, "Quantitative Decision");
    let ReportContent::Value(value) = &panel.blocks[0].content else {
        panic!("expected generic block");
    };
    assert_eq!(entry(value, "Probability"), Some(&scalar("0.72")));
}

#[test]
fn test_profile_link_stripping() {
    let report = generate(&sample_payload());
    let ReportContent::Value(profile) = &report.panels[0].blocks[0].content else {
        panic!("expected generic profile");
    };

    assert_eq!(
        entry(profile, "Description"),
        Some(&scalar("Warehouse robots. See site"))
    );
    assert_eq!(
        entry(profile, "Citations"),
        Some(&DocumentValue::Sequence(vec![scalar("https://news.example.com/acme")]))
    );

    // Disabled through configuration
    let generator = ReportGenerator::new(EngineConfig {
        strip_profile_links: false,
        ..EngineConfig::default()
    });
    let report = generator.generate(&sample_payload());
    let ReportContent::Value(profile) = &report.panels[0].blocks[0].content else {
        panic!("expected generic profile");
    };
    let Some(DocumentValue::Scalar(description)) = entry(profile, "Description") else {
        panic!("expected description");
    };
    assert!(description.contains("https://acme.io"));
}

#[test]
fn test_depth_limit_from_config() {
    let generator = ReportGenerator::new(EngineConfig {
        max_depth: 1,
        ..EngineConfig::default()
    });
    let report = generator.generate(&json!({"Categorization": {"a": {"b": {"c": 1}}}}));

    let ReportContent::Value(value) = &report.panels[0].blocks[0].content else {
        panic!("expected generic block");
    };
    let inner = entry(value, "A").unwrap();
    assert!(entry(inner, "B").unwrap().is_placeholder());
}

#[test]
fn test_batch_preserves_order() {
    let payloads: Vec<Value> = (0..8)
        .map(|i| {
            json!({
                "ingestion": {"structured": {"name": format!("Company {}", i)}},
                "analysis": {"Categorization": {"stage": "Seed"}}
            })
        })
        .collect();

    let reports = ReportGenerator::default().generate_batch(&payloads);

    assert_eq!(reports.len(), 8);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.company, Some(format!("Company {}", i)));
    }
}

#[test]
fn test_generate_from_str() {
    let generator = ReportGenerator::default();
    let json = serde_json::to_string(&sample_payload()).unwrap();

    let report = generator.generate_from_str(&json).unwrap();
    assert_eq!(report, generate(&sample_payload()));

    assert!(generator.generate_from_str("\"just a string\"").is_err());
    assert!(generator.generate_from_str("not json").is_err());
}

// =========================================================================
// Section 2: Fallback chain
// =========================================================================

#[test]
fn test_fallback_chain() {
    // Final analysis without topic headings drops to rich text
    let content = structure_text(NarrativeKind::FinalAnalysis, "Strong quarter overall.").unwrap();
    assert_eq!(
        content,
        ReportContent::RichText(vec![RichBlock::Paragraph("Strong quarter overall.".to_string())])
    );

    // Nothing left after label stripping: raw text
    let content = structure_text(NarrativeKind::FounderAnalysis, "Analysis:").unwrap();
    assert_eq!(content, ReportContent::RawText("Analysis:".to_string()));

    let content = structure_text(NarrativeKind::RichText, "Analysis:").unwrap();
    assert_eq!(content, ReportContent::RawText("Analysis:".to_string()));

    // Blank narratives produce nothing
    for kind in [
        NarrativeKind::FounderAnalysis,
        NarrativeKind::FinalAnalysis,
        NarrativeKind::Recommendation,
        NarrativeKind::RichText,
    ] {
        assert!(structure_text(kind, " \n\t ").is_none());
    }
}

// =========================================================================
// Section 3: Parser properties
// =========================================================================

const CORPUS: &[&str] = &[
    "",
    " ",
    "(",
    ")",
    "1)",
    "((1)",
    "(1)(2)(3)",
    "Conditions",
    "conditions: (1)",
    "Bottom line -",
    "bottom line: ",
    "Market:",
    "Market\n\nTeam\n",
    "Analysis:",
    "Final Analysis:",
    "A\nB.\nC:\n",
    "\\n\\n- \\n",
    " - A - B - C",
    "Rationale: only rationale",
    "Ünïcödé 1) naïve – résumé 2) 🚀 launch. Bottom line — 好.",
    "999) x 1000) y (999) z",
    "[link](http://x.com) (https://y.com/a?b=(c))",
    "Summary: Why the score isn't a 10: Net: what to watch:",
];

#[test]
fn test_parsers_are_total() {
    for text in CORPUS {
        let founder = parse_founder_analysis(text);
        assert!(founder.iter().all(|s| !s.bullets.is_empty()), "{:?}", text);

        if let Some(sections) = parse_final_analysis(text) {
            assert!(!sections.is_empty(), "{:?}", text);
            assert!(sections.iter().all(|s| !s.bullets.is_empty()), "{:?}", text);
        }

        let rec = parse_recommendation(text);
        assert!(rec.numbered.iter().all(|c| !c.is_empty()), "{:?}", text);

        for block in parse_rich_text(text) {
            match block {
                RichBlock::Heading(t) | RichBlock::Paragraph(t) => assert!(!t.is_empty()),
                RichBlock::BulletList(items) => assert!(!items.is_empty()),
            }
        }

        for kind in [
            NarrativeKind::FounderAnalysis,
            NarrativeKind::FinalAnalysis,
            NarrativeKind::Recommendation,
            NarrativeKind::RichText,
        ] {
            assert_eq!(structure_text(kind, text).is_none(), text.trim().is_empty());
        }
    }
}

#[test]
fn test_sanitize_is_idempotent() {
    for text in CORPUS {
        let once = sanitize(text);
        assert_eq!(sanitize(&once), once, "{:?}", text);
    }
}

#[test]
fn test_generate_never_panics_on_odd_shapes() {
    let generator = ReportGenerator::default();
    let payloads = [
        json!(null),
        json!("text"),
        json!({}),
        json!({"ingestion": null}),
        json!({"ingestion": {"structured": "Acme"}, "analysis": null}),
        json!({"analysis": {"Final Analysis": [1, 2], "Founder Analysis": null}}),
        json!({"analysis": {"Final Analysis": {"IntegratedAnalysis": 5, "recommendation": ["x"]}}}),
        json!({"analysis": {"Market Analysis": {}, "Categorization": []}}),
    ];

    for payload in &payloads {
        let report = generator.generate(payload);
        let _ = MarkdownFormatter::format(&report);
        assert!(JsonFormatter::format(&report).is_ok());
    }
}

#[test]
fn test_render_examples() {
    assert!(render(&json!([])).is_placeholder());
    assert!(render(&json!({})).is_placeholder());
    assert_eq!(
        render(&json!({"market_size": "10B"})),
        DocumentValue::Mapping(vec![MappingEntry {
            label: "Market Size".to_string(),
            value: scalar("10B"),
        }])
    );
}

// =========================================================================
// Section 4: Output formats
// =========================================================================

#[test]
fn test_markdown_output() {
    let md = MarkdownFormatter::format(&generate(&sample_payload()));

    assert!(md.starts_with("# Acme Robotics\n\n## Company Profile\n\n"));
    assert!(md.contains("- **Description:** Warehouse robots. See site\n"));
    assert!(md.contains("## Final Analysis\n\n- **Overall Score:** 7.5\n\n### Integrated Analysis\n\n"));
    assert!(md.contains("**Market**\n\n- Large TAM.\n"));
    assert!(md.contains("### Recommendation\n\nInvest (Lead).\n\nRationale: strong team.\n\n1. Close round\n2. Sign agreement\n"));
    assert!(md.contains("#### Summary:\n\n- Incumbents are slow\n"));
    assert!(!md.contains("## Product Analysis"));
}

#[test]
fn test_json_output() {
    let report = generate(&sample_payload());
    let json = JsonFormatter::format(&report).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["company"], "Acme Robotics");
    assert_eq!(value["panels"][0]["key"], "ingestion.structured");
    assert_eq!(value["panels"][1]["blocks"][1]["content"]["kind"], "sections");
    assert_eq!(value["panels"][1]["blocks"][2]["content"]["value"]["numbered"][1], "Sign agreement");
}
