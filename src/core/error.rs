use thiserror::Error;

/// Failure taxonomy of the extraction pipeline.
///
/// Every variant is recovered inside the subsystem and degraded to a
/// zero-confidence "no intent" result; nothing here reaches a caller as a
/// panic. The only fatal condition is a defect in the static pattern catalog
/// or the embedded keyword tables, which aborts at startup instead.
#[derive(Error, Debug)]
pub enum PriceSenseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rule '{rule}' produced an unparsable amount: {source}")]
    RuleConversion {
        rule: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Estimation service error: {0}")]
    EstimationService(String),

    #[error("Estimator response format error: {0}")]
    ResponseFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, PriceSenseError>;
