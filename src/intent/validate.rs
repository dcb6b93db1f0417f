//! Range normalization, validation, and price banding.

use crate::intent::types::{PriceBand, PriceIntent};

/// Lower edge of the mid band.
pub const BAND_MID_FLOOR: f64 = 50.0;
/// Lower edge of the premium band.
pub const BAND_PREMIUM_FLOOR: f64 = 200.0;

/// Swap inverted bounds so `min_price <= max_price` always holds.
pub fn normalize_range(mut intent: PriceIntent) -> PriceIntent {
    if let (Some(min), Some(max)) = (intent.min_price, intent.max_price) {
        if min > max {
            intent.min_price = Some(max);
            intent.max_price = Some(min);
        }
    }
    intent
}

/// Whether a pair of bounds is usable as an actual filter. Callers must check
/// this before pushing the bounds into a search backend.
pub fn validate_price_range(min_price: Option<f64>, max_price: Option<f64>) -> bool {
    if matches!(min_price, Some(v) if v < 0.0) {
        return false;
    }
    if matches!(max_price, Some(v) if v < 0.0) {
        return false;
    }
    if let (Some(min), Some(max)) = (min_price, max_price) {
        if min > max {
            return false;
        }
    }
    true
}

/// Coarse band for a single amount.
pub fn price_band(price: f64) -> PriceBand {
    if price < BAND_MID_FLOOR {
        PriceBand::Budget
    } else if price < BAND_PREMIUM_FLOOR {
        PriceBand::Mid
    } else {
        PriceBand::Premium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::types::PatternType;

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let intent = PriceIntent {
            min_price: Some(100.0),
            max_price: Some(50.0),
            pattern_type: PatternType::Range,
            ..PriceIntent::none()
        };
        let normalized = normalize_range(intent);
        assert_eq!(normalized.min_price, Some(50.0));
        assert_eq!(normalized.max_price, Some(100.0));
    }

    #[test]
    fn test_ordered_and_half_open_bounds_are_untouched() {
        let intent = PriceIntent {
            max_price: Some(75.0),
            ..PriceIntent::none()
        };
        assert_eq!(normalize_range(intent.clone()), intent);
    }

    #[test]
    fn test_validate_accepts_open_and_ordered_ranges() {
        assert!(validate_price_range(None, None));
        assert!(validate_price_range(None, Some(100.0)));
        assert!(validate_price_range(Some(50.0), None));
        assert!(validate_price_range(Some(50.0), Some(100.0)));
        assert!(validate_price_range(Some(50.0), Some(50.0)));
    }

    #[test]
    fn test_validate_rejects_negative_and_inverted_ranges() {
        assert!(!validate_price_range(Some(-10.0), Some(100.0)));
        assert!(!validate_price_range(Some(50.0), Some(-20.0)));
        assert!(!validate_price_range(Some(100.0), Some(50.0)));
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(price_band(25.0), PriceBand::Budget);
        assert_eq!(price_band(49.99), PriceBand::Budget);
        assert_eq!(price_band(50.0), PriceBand::Mid);
        assert_eq!(price_band(199.99), PriceBand::Mid);
        assert_eq!(price_band(200.0), PriceBand::Premium);
        assert_eq!(price_band(250.0), PriceBand::Premium);
    }
}
