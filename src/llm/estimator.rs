//! External price estimation, the only I/O-bound tier of the pipeline.
//!
//! The deterministic core depends on nothing but the [`PriceEstimator`]
//! trait, so it can be tested with a scripted stand-in. The LLM-backed
//! implementation validates responses strictly and converts every failure
//! (network, timeout, malformed JSON) into an empty zero-confidence result.
//! It never returns an error and never retries; retry policy belongs to the
//! caller.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::PriceSenseConfig;
use crate::core::error::{PriceSenseError, Result};
use crate::intent::types::EstimateResult;
use crate::llm::factory::LlmProviderFactory;
use crate::llm::prompt::{build_estimation_prompt, SYSTEM_PROMPT};
use crate::llm::providers::base::LlmProvider;
use crate::utils::safe_truncate;

/// Narrow seam between the deterministic core and the external service.
#[async_trait]
pub trait PriceEstimator: Send + Sync {
    async fn estimate(&self, query: &str) -> EstimateResult;
}

const REQUIRED_FIELDS: [&str; 4] = ["min_price", "max_price", "confidence", "reasoning"];

/// Strictly validate an estimator response: exactly the four required fields,
/// with the right types. Anything else is a format error.
pub fn parse_estimate(content: &str) -> Result<EstimateResult> {
    let value: Value = serde_json::from_str(content.trim())
        .map_err(|e| PriceSenseError::ResponseFormat(format!("invalid JSON: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| PriceSenseError::ResponseFormat("response is not a JSON object".to_string()))?;

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(PriceSenseError::ResponseFormat(format!(
                "missing field '{field}'"
            )));
        }
    }
    if let Some(extra) = object
        .keys()
        .find(|key| !REQUIRED_FIELDS.contains(&key.as_str()))
    {
        return Err(PriceSenseError::ResponseFormat(format!(
            "unexpected field '{extra}'"
        )));
    }

    let min_price = optional_amount(&object["min_price"], "min_price")?;
    let max_price = optional_amount(&object["max_price"], "max_price")?;
    let confidence = object["confidence"].as_f64().ok_or_else(|| {
        PriceSenseError::ResponseFormat("field 'confidence' is not a number".to_string())
    })?;
    let reasoning = object["reasoning"]
        .as_str()
        .ok_or_else(|| {
            PriceSenseError::ResponseFormat("field 'reasoning' is not a string".to_string())
        })?
        .to_string();

    Ok(EstimateResult {
        min_price,
        max_price,
        confidence,
        reasoning,
    })
}

fn optional_amount(value: &Value, field: &str) -> Result<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| {
            PriceSenseError::ResponseFormat(format!("field '{field}' is not a finite number"))
        }),
        _ => Err(PriceSenseError::ResponseFormat(format!(
            "field '{field}' is neither a number nor null"
        ))),
    }
}

/// LLM-backed estimator with a hard per-call deadline.
pub struct LlmPriceEstimator {
    provider: Arc<dyn LlmProvider>,
    timeout: Duration,
}

impl LlmPriceEstimator {
    pub fn new(provider: Arc<dyn LlmProvider>, timeout_secs: u64) -> Self {
        Self {
            provider,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn from_config(config: &PriceSenseConfig) -> Self {
        Self::new(
            LlmProviderFactory::from_config(config),
            config.estimator_timeout,
        )
    }
}

#[async_trait]
impl PriceEstimator for LlmPriceEstimator {
    async fn estimate(&self, query: &str) -> EstimateResult {
        let prompt = build_estimation_prompt(query);

        let outcome = tokio::time::timeout(
            self.timeout,
            self.provider.generate(SYSTEM_PROMPT, &prompt, Some("json_object")),
        )
        .await;

        match outcome {
            Err(_) => {
                warn!(
                    "Price estimation timed out after {:?} for '{}'",
                    self.timeout,
                    safe_truncate(query, 50)
                );
                EstimateResult::empty()
            }
            Ok(Err(e)) => {
                warn!(
                    "{}",
                    PriceSenseError::EstimationService(format!(
                        "{e} for '{}'",
                        safe_truncate(query, 50)
                    ))
                );
                EstimateResult::empty()
            }
            Ok(Ok((content, metadata))) => match parse_estimate(&content) {
                Ok(result) => {
                    debug!(
                        "Estimate from {}/{}: {:?}..{:?} (confidence {:.2})",
                        metadata.provider,
                        metadata.model,
                        result.min_price,
                        result.max_price,
                        result.confidence
                    );
                    result
                }
                Err(e) => {
                    warn!("{} (response: '{}')", e, safe_truncate(&content, 200));
                    EstimateResult::empty()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_response_parses() {
        let result = parse_estimate(
            r#"{"min_price": 20.0, "max_price": 60.0, "confidence": 0.85, "reasoning": "typical gadget range"}"#,
        )
        .unwrap();
        assert_eq!(result.min_price, Some(20.0));
        assert_eq!(result.max_price, Some(60.0));
        assert_eq!(result.confidence, 0.85);
        assert_eq!(result.reasoning, "typical gadget range");
    }

    #[test]
    fn test_null_bounds_are_accepted() {
        let result = parse_estimate(
            r#"{"min_price": null, "max_price": 100, "confidence": 0.7, "reasoning": "upper bound only"}"#,
        )
        .unwrap();
        assert_eq!(result.min_price, None);
        assert_eq!(result.max_price, Some(100.0));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = parse_estimate(r#"{"min_price": null, "max_price": 100, "confidence": 0.7}"#)
            .unwrap_err();
        assert!(err.to_string().contains("reasoning"));
    }

    #[test]
    fn test_unexpected_field_is_rejected() {
        let err = parse_estimate(
            r#"{"min_price": null, "max_price": 100, "confidence": 0.7, "reasoning": "x", "currency": "EUR"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("currency"));
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(parse_estimate(
            r#"{"min_price": "cheap", "max_price": null, "confidence": 0.7, "reasoning": "x"}"#
        )
        .is_err());
        assert!(parse_estimate(
            r#"{"min_price": null, "max_price": null, "confidence": "high", "reasoning": "x"}"#
        )
        .is_err());
    }

    #[test]
    fn test_non_json_is_rejected() {
        assert!(parse_estimate("somewhere between 20 and 60 euro, probably").is_err());
        assert!(parse_estimate("[1, 2, 3]").is_err());
        assert!(parse_estimate("").is_err());
    }
}
