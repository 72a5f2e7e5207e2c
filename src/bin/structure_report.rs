// Structure an analysis response from a file or stdin
//
// Usage: structure_report [PATH | -]
//   REPORT_FORMAT=markdown|json (default markdown)
//   REPORT_MAX_DEPTH, REPORT_STRIP_LINKS: see EngineConfig

use anyhow::{bail, Context};
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vc_report_structurer::{EngineConfig, JsonFormatter, MarkdownFormatter, ReportGenerator};

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Markdown,
    Json,
}

impl OutputFormat {
    fn from_env() -> anyhow::Result<Self> {
        match std::env::var("REPORT_FORMAT") {
            Err(_) => Ok(Self::Markdown),
            Ok(raw) => match raw.trim().to_lowercase().as_str() {
                "" | "markdown" | "md" => Ok(Self::Markdown),
                "json" => Ok(Self::Json),
                other => bail!("unsupported REPORT_FORMAT {:?} (expected markdown or json)", other),
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vc_report_structurer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env().context("reading engine configuration")?;
    let format = OutputFormat::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  REPORT_MAX_DEPTH: {}", config.max_depth);
    tracing::info!("  REPORT_STRIP_LINKS: {}", config.strip_profile_links);
    tracing::info!("  REPORT_FORMAT: {:?}", format);

    let generator = ReportGenerator::new(config);

    let report = match std::env::args().nth(1) {
        Some(path) if path != "-" => generator
            .generate_from_path(&path)
            .with_context(|| format!("structuring payload from {}", path))?,
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("reading payload from stdin")?;
            generator
                .generate_from_str(&input)
                .context("structuring payload from stdin")?
        }
    };

    let output = match format {
        OutputFormat::Markdown => MarkdownFormatter::format(&report),
        OutputFormat::Json => JsonFormatter::format(&report).context("serializing report")?,
    };

    println!("{}", output.trim_end());
    Ok(())
}
