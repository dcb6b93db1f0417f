//! Category context classifier.
//!
//! A qualitative price word maps to a different absolute amount depending on
//! what is being bought: "cheap" jewelry costs more than "cheap" socks. The
//! classifier scans the whole query against two disjoint noun sets and yields
//! a scalar used to adjust fixed amounts from qualitative rules.

use crate::intent::keywords::{contains_term, tokenize, KeywordTables};

pub const PREMIUM_MULTIPLIER: f64 = 2.0;
pub const BUDGET_MULTIPLIER: f64 = 0.7;
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Pure function of the query text. Premium membership is checked first and
/// the first hit in either set short-circuits.
pub fn category_multiplier(query: &str, keywords: &KeywordTables) -> f64 {
    let lowered = query.to_lowercase();
    let tokens = tokenize(&lowered);

    if keywords
        .premium_categories
        .iter()
        .any(|term| contains_term(&lowered, &tokens, term))
    {
        return PREMIUM_MULTIPLIER;
    }
    if keywords
        .budget_categories
        .iter()
        .any(|term| contains_term(&lowered, &tokens, term))
    {
        return BUDGET_MULTIPLIER;
    }
    NEUTRAL_MULTIPLIER
}
