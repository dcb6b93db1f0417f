//! Last-resort lexical budget detector.
//!
//! Catches budget vocabulary the pattern catalog does not anchor on
//! ("betaalbaar", "inexpensive"). Runs only when no catalog rule matched,
//! before the external estimator is consulted.

use tracing::debug;

use crate::intent::keywords::{contains_term, tokenize, KeywordTables};
use crate::intent::types::{PatternType, PriceIntent};

pub const FALLBACK_BUDGET_CEILING: f64 = 75.0;
pub const FALLBACK_CONFIDENCE: f64 = 0.8;

/// First matching term in list order wins; the list itself is the tie-break.
pub fn budget_fallback(query: &str, keywords: &KeywordTables) -> Option<PriceIntent> {
    let lowered = query.to_lowercase();
    let tokens = tokenize(&lowered);

    for term in &keywords.fallback_budget_terms {
        if contains_term(&lowered, &tokens, term) {
            debug!("Budget fallback keyword matched: {}", term);
            return Some(PriceIntent {
                min_price: None,
                max_price: Some(FALLBACK_BUDGET_CEILING),
                confidence: FALLBACK_CONFIDENCE,
                pattern_type: PatternType::BudgetFallback,
                extracted_text: Some(term.clone()),
                reasoning: None,
            });
        }
    }
    None
}
