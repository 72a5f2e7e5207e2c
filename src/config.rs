//! Engine configuration
//!
//! Read from environment variables, falling back to defaults:
//! - `REPORT_MAX_DEPTH`: nesting limit for generic rendering (default 16)
//! - `REPORT_STRIP_LINKS`: strip URLs from company-profile text (default true)

use crate::document::DEFAULT_MAX_DEPTH;
use crate::error::{ReportError, Result};

pub const ENV_MAX_DEPTH: &str = "REPORT_MAX_DEPTH";
pub const ENV_STRIP_LINKS: &str = "REPORT_STRIP_LINKS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_depth: usize,
    pub strip_profile_links: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strip_profile_links: true,
        }
    }
}

impl EngineConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup (unset keys keep their default)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_DEPTH) {
            config.max_depth = raw
                .trim()
                .parse()
                .map_err(|_| invalid(ENV_MAX_DEPTH, &raw))?;
        }

        if let Some(raw) = lookup(ENV_STRIP_LINKS) {
            config.strip_profile_links = parse_flag(&raw).ok_or_else(|| invalid(ENV_STRIP_LINKS, &raw))?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: &str) -> ReportError {
    ReportError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    }
}
