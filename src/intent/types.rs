use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Kind of price signal a query expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PatternType {
    Exact,
    Range,
    Below,
    Above,
    Approximate,
    Budget,
    Premium,
    Sale,
    BudgetFallback,
    ExternalEstimate,
    None,
}

impl PatternType {
    /// Confidence boost applied after range normalization. Exact and range
    /// matches carry more lexical evidence than single-keyword hits.
    pub fn confidence_boost(&self) -> f64 {
        match self {
            PatternType::Exact => 1.2,
            PatternType::Range => 1.1,
            _ => 1.0,
        }
    }
}

/// Monetary filter inferred from a search query.
///
/// Built fresh per query and never mutated afterwards. When both bounds are
/// present the normalizer guarantees `min_price <= max_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceIntent {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub confidence: f64,
    pub pattern_type: PatternType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl PriceIntent {
    /// The benign "no price signal" value every failure path degrades to.
    pub fn none() -> Self {
        Self {
            min_price: None,
            max_price: None,
            confidence: 0.0,
            pattern_type: PatternType::None,
            extracted_text: None,
            reasoning: None,
        }
    }

    pub fn has_bounds(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }
}

impl Default for PriceIntent {
    fn default() -> Self {
        Self::none()
    }
}

/// Raw result returned by an external price estimator, validated before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub confidence: f64,
    pub reasoning: String,
}

impl EstimateResult {
    /// Zero-confidence result used when the estimator fails or times out.
    pub fn empty() -> Self {
        Self {
            min_price: None,
            max_price: None,
            confidence: 0.0,
            reasoning: String::new(),
        }
    }
}

/// Coarse store-price band for a single amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PriceBand {
    Budget,
    Mid,
    Premium,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_intent_has_no_signal() {
        let intent = PriceIntent::none();
        assert_eq!(intent.pattern_type, PatternType::None);
        assert_eq!(intent.confidence, 0.0);
        assert!(!intent.has_bounds());
    }

    #[test]
    fn test_pattern_type_string_forms() {
        assert_eq!(PatternType::BudgetFallback.to_string(), "budget_fallback");
        assert_eq!(PatternType::ExternalEstimate.to_string(), "external_estimate");
        assert_eq!(PatternType::None.to_string(), "none");
    }

    #[test]
    fn test_confidence_boosts() {
        assert_eq!(PatternType::Exact.confidence_boost(), 1.2);
        assert_eq!(PatternType::Range.confidence_boost(), 1.1);
        assert_eq!(PatternType::Budget.confidence_boost(), 1.0);
    }

    #[test]
    fn test_intent_serializes_with_snake_case_pattern() {
        let intent = PriceIntent {
            max_price: Some(75.0),
            pattern_type: PatternType::BudgetFallback,
            confidence: 0.8,
            ..PriceIntent::none()
        };
        let json = serde_json::to_string(&intent).unwrap();
        assert!(json.contains("\"budget_fallback\""));
        assert!(!json.contains("reasoning"));
    }
}
