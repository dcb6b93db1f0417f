//! Human-readable rendering of a resolved price intent.

use crate::intent::types::PriceIntent;

/// Fixed message when no bounds were inferred at all.
pub const NO_FILTER_MESSAGE: &str = "No price filter applied.";

/// Bounds closer than this render as a single point price.
const POINT_PRICE_EPSILON: f64 = 0.01;

/// Qualitative label for a confidence score.
pub fn confidence_label(confidence: f64) -> &'static str {
    if confidence > 0.8 {
        "high confidence"
    } else if confidence > 0.5 {
        "medium confidence"
    } else {
        "low confidence"
    }
}

/// One sentence describing the active filter. Both bounds absent always
/// renders the fixed no-filter message, whatever the other metadata says.
pub fn format_intent(intent: &PriceIntent) -> String {
    let label = confidence_label(intent.confidence);
    match (intent.min_price, intent.max_price) {
        (None, None) => NO_FILTER_MESSAGE.to_string(),
        (Some(min), Some(max)) if (max - min).abs() < POINT_PRICE_EPSILON => {
            format!("Searching for products priced at €{min:.2} ({label})")
        }
        (Some(min), Some(max)) => {
            format!("Searching for products between €{min:.2} and €{max:.2} ({label})")
        }
        (Some(min), None) => format!("Searching for products from €{min:.2} ({label})"),
        (None, Some(max)) => format!("Searching for products up to €{max:.2} ({label})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::types::{PatternType, PriceIntent};

    #[test]
    fn test_range_message() {
        let intent = PriceIntent {
            min_price: Some(50.0),
            max_price: Some(100.0),
            confidence: 0.95,
            pattern_type: PatternType::Range,
            ..PriceIntent::none()
        };
        assert_eq!(
            format_intent(&intent),
            "Searching for products between €50.00 and €100.00 (high confidence)"
        );
    }

    #[test]
    fn test_half_open_messages() {
        let from = PriceIntent {
            min_price: Some(200.0),
            confidence: 0.6,
            pattern_type: PatternType::Premium,
            ..PriceIntent::none()
        };
        assert_eq!(
            format_intent(&from),
            "Searching for products from €200.00 (medium confidence)"
        );

        let up_to = PriceIntent {
            max_price: Some(75.0),
            confidence: 0.4,
            pattern_type: PatternType::Budget,
            ..PriceIntent::none()
        };
        assert_eq!(
            format_intent(&up_to),
            "Searching for products up to €75.00 (low confidence)"
        );
    }

    #[test]
    fn test_point_price_message() {
        let intent = PriceIntent {
            min_price: Some(99.999),
            max_price: Some(100.0),
            confidence: 0.9,
            pattern_type: PatternType::Exact,
            ..PriceIntent::none()
        };
        assert!(format_intent(&intent).starts_with("Searching for products priced at €100.00"));
    }

    #[test]
    fn test_no_bounds_always_renders_fixed_message() {
        // metadata other than the bounds must not leak into the message
        let intent = PriceIntent {
            confidence: 0.99,
            pattern_type: PatternType::ExternalEstimate,
            reasoning: Some("guesswork".to_string()),
            ..PriceIntent::none()
        };
        assert_eq!(format_intent(&intent), NO_FILTER_MESSAGE);
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(confidence_label(0.81), "high confidence");
        assert_eq!(confidence_label(0.8), "medium confidence");
        assert_eq!(confidence_label(0.51), "medium confidence");
        assert_eq!(confidence_label(0.5), "low confidence");
        assert_eq!(confidence_label(0.0), "low confidence");
    }
}
