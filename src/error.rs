//! Errors for the loading and configuration surfaces.
//!
//! Parsing and rendering never fail; only reading a payload or an
//! environment setting can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: String, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
