//! Error types for the trainplan pipeline.

use thiserror::Error;

/// Errors that can occur while turning a plan into a calendar.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Malformed input: {0}")]
    InputMalformed(String),

    #[error("Reference data unavailable: {0}")]
    ReferenceData(String),

    #[error("Upstream fetch failed: {0}")]
    Fetch(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for trainplan operations.
pub type PlanResult<T> = Result<T, PlanError>;
