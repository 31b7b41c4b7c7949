use chrono::NaiveDate;
use thiserror::Error;

/// Engine-level error type. Every sub-scorer either returns a valid score or
/// one of these before aggregation runs; nothing is silently substituted.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid date range in work entry '{title}': {end} is before {start}")]
    InvalidDateRange {
        title: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("invalid requirement: {0}")]
    InvalidRequirement(String),

    #[error("unknown degree level: '{0}'")]
    UnknownDegreeLevel(String),

    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
