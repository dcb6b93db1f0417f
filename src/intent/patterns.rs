//! Static catalog of lexical price patterns.
//!
//! One rule per trigger shape, bilingual (Dutch/English) alternations inside
//! each pattern. The catalog is built once at first access and never mutated;
//! an invalid pattern aborts at startup rather than per query.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::intent::types::PatternType;

/// Ceiling implied by a bare budget word ("cheap", "goedkoop").
pub const BUDGET_CEILING: f64 = 75.0;
/// Floor implied by a bare premium word ("expensive", "luxe").
pub const PREMIUM_FLOOR: f64 = 200.0;
/// Ceiling implied by discount vocabulary ("on sale", "korting").
pub const SALE_CEILING: f64 = 100.0;

/// Band applied around an approximate amount ("around 150").
pub const APPROX_LOWER: f64 = 0.8;
pub const APPROX_UPPER: f64 = 1.2;
/// Band applied around an exact amount ("150 euro").
pub const EXACT_LOWER: f64 = 0.9;
pub const EXACT_UPPER: f64 = 1.1;

/// How one bound of a matched rule is produced.
#[derive(Debug, Clone, Copy)]
pub enum Extractor {
    /// This rule does not constrain the bound.
    None,
    /// Fixed amount implied by a qualitative word; scaled by the category
    /// multiplier because "cheap" means a different amount for jewelry than
    /// for socks.
    Constant(f64),
    /// Amount captured from the query text, times a fixed factor. Literal
    /// user-typed amounts are taken at face value and never rescaled by
    /// category context.
    Scaled { group: usize, factor: f64 },
}

impl Extractor {
    pub fn extract(
        &self,
        caps: &Captures<'_>,
        multiplier: f64,
    ) -> Result<Option<f64>, std::num::ParseFloatError> {
        match self {
            Extractor::None => Ok(None),
            Extractor::Constant(value) => Ok(Some(value * multiplier)),
            Extractor::Scaled { group, factor } => {
                let raw = caps.get(*group).map(|m| m.as_str()).unwrap_or_default();
                Ok(Some(parse_amount(raw)? * factor))
            }
        }
    }
}

/// A single entry of the pattern catalog.
#[derive(Clone)]
pub struct PatternRule {
    pub category: PatternType,
    pub pattern: Regex,
    pub min: Extractor,
    pub max: Extractor,
}

impl PatternRule {
    fn new(category: PatternType, pattern: &str, min: Extractor, max: Extractor) -> Self {
        Self {
            category,
            pattern: Regex::new(pattern).expect("invalid price pattern"),
            min,
            max,
        }
    }
}

/// Parse a locale-tolerant amount ("12,50" or "12.50").
pub(crate) fn parse_amount(raw: &str) -> Result<f64, std::num::ParseFloatError> {
    raw.trim().replace(',', ".").parse()
}

lazy_static! {
    pub static ref PATTERN_CATALOG: Vec<PatternRule> = vec![
        // "between 100 and 300 (euro)" / "tussen 50€ en 100€"
        PatternRule::new(
            PatternType::Range,
            r"(?i)\b(?:between|tussen)\s+(\d+(?:[.,]\d+)?)\s*€?\s+(?:and|en)\s+(\d+(?:[.,]\d+)?)\s*(?:euro'?s?\b|eur\b|€)?",
            Extractor::Scaled { group: 1, factor: 1.0 },
            Extractor::Scaled { group: 2, factor: 1.0 },
        ),
        // "50 to 100 euro" / "50 tot 100 euro"
        PatternRule::new(
            PatternType::Range,
            r"(?i)\b(\d+(?:[.,]\d+)?)\s+(?:to|tot)\s+(\d+(?:[.,]\d+)?)\s*(?:euro'?s?\b|eur\b|€)?",
            Extractor::Scaled { group: 1, factor: 1.0 },
            Extractor::Scaled { group: 2, factor: 1.0 },
        ),
        // "under 50", "onder 50 euro", "less than €80", "max 50", "tot 50"
        PatternRule::new(
            PatternType::Below,
            r"(?i)\b(?:under|onder|below|less\s+than|max|tot)\s+(?:€\s*|euro\s+)?(\d+(?:[.,]\d+)?)\s*(?:euro'?s?\b|eur\b|€)?",
            Extractor::None,
            Extractor::Scaled { group: 1, factor: 1.0 },
        ),
        // "above 150", "boven 200 euro", "more than €100", "vanaf 80"
        PatternRule::new(
            PatternType::Above,
            r"(?i)\b(?:above|boven|over|more\s+than|at\s+least|minstens|vanaf)\s+(?:€\s*|euro\s+)?(\d+(?:[.,]\d+)?)\s*(?:euro'?s?\b|eur\b|€)?",
            Extractor::Scaled { group: 1, factor: 1.0 },
            Extractor::None,
        ),
        // "around 150", "rond 100 euro", "ongeveer €75"
        PatternRule::new(
            PatternType::Approximate,
            r"(?i)\b(?:around|about|rond|ongeveer|approximately|circa)\s+(?:€\s*|euro\s+)?(\d+(?:[.,]\d+)?)\s*(?:euro'?s?\b|eur\b|€)?",
            Extractor::Scaled { group: 1, factor: APPROX_LOWER },
            Extractor::Scaled { group: 1, factor: APPROX_UPPER },
        ),
        // "100 euro", "75 eur"
        PatternRule::new(
            PatternType::Exact,
            r"(?i)\b(\d+(?:[.,]\d+)?)\s*(?:euro'?s?\b|eur\b|€)",
            Extractor::Scaled { group: 1, factor: EXACT_LOWER },
            Extractor::Scaled { group: 1, factor: EXACT_UPPER },
        ),
        // "€100", "euro 100"
        PatternRule::new(
            PatternType::Exact,
            r"(?i)(?:€|\beuro\b)\s*(\d+(?:[.,]\d+)?)",
            Extractor::Scaled { group: 1, factor: EXACT_LOWER },
            Extractor::Scaled { group: 1, factor: EXACT_UPPER },
        ),
        // bare budget vocabulary, longest word forms first
        PatternRule::new(
            PatternType::Budget,
            r"(?i)\b(?:goedkoopste|goedkopere|goedkoper|goedkope|goedkoop|cheapest|cheaper|cheap|budget|voordelige|voordelig|affordable)\b",
            Extractor::None,
            Extractor::Constant(BUDGET_CEILING),
        ),
        // bare premium vocabulary
        PatternRule::new(
            PatternType::Premium,
            r"(?i)\b(?:duurste|duurdere|duurder|dure|duur|expensive|luxury|luxe|premium|exclusieve|exclusief|high-end|hoogwaardige|hoogwaardig)\b",
            Extractor::Constant(PREMIUM_FLOOR),
            Extractor::None,
        ),
        // discount vocabulary
        PatternRule::new(
            PatternType::Sale,
            r"(?i)\b(?:on\s+sale|sale|kortingen|korting|aanbiedingen|aanbieding|afgeprijsde|afgeprijsd|discounted|discounts|discount|uitverkoop)\b",
            Extractor::None,
            Extractor::Constant(SALE_CEILING),
        ),
    ];
}
