//! Three-tier price intent resolution.
//!
//! Tier 1 scans the static pattern catalog and scores every match. Tier 2 is
//! a flat budget keyword list. Tier 3 asks an injected external estimator.
//! Each tier runs only when the previous one produced nothing, and every
//! failure along the way degrades to [`PriceIntent::none`]; resolution never
//! returns an error for malformed input or a flaky estimator.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::cache::{CacheStats, IntentCache};
use crate::core::config::PriceSenseConfig;
use crate::core::error::PriceSenseError;
use crate::intent::cleaner::QueryCleaner;
use crate::intent::context::category_multiplier;
use crate::intent::fallback::budget_fallback;
use crate::intent::keywords::KeywordTables;
use crate::intent::patterns::{PatternRule, PATTERN_CATALOG};
use crate::intent::types::{EstimateResult, PatternType, PriceIntent};
use crate::intent::validate::normalize_range;
use crate::llm::estimator::PriceEstimator;
use crate::utils::safe_truncate;

/// Estimates at or below this confidence are discarded rather than surfaced
/// as a definite filter.
pub const ESTIMATE_CONFIDENCE_FLOOR: f64 = 0.5;

/// A scored catalog match, before normalization and boosting.
pub(crate) struct Candidate {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub confidence: f64,
    pub category: PatternType,
    pub extracted: String,
}

/// Tie-break policy for candidate selection: a challenger displaces the
/// incumbent only on strictly higher confidence, so at equal confidence the
/// first-registered rule wins. Reordering rules with distinct confidences
/// therefore cannot change the outcome.
pub(crate) fn candidate_supersedes(challenger: f64, incumbent: f64) -> bool {
    challenger > incumbent
}

/// Scan rules in catalog order, score each match by how much of the query it
/// covers, and keep the best candidate. A rule whose amount fails to parse is
/// skipped; scanning always continues.
pub(crate) fn scan_rules(
    rules: &[PatternRule],
    normalized: &str,
    multiplier: f64,
) -> Option<Candidate> {
    let query_len = normalized.chars().count();
    let mut best: Option<Candidate> = None;

    for rule in rules {
        let Some(caps) = rule.pattern.captures(normalized) else {
            continue;
        };
        let matched = caps.get(0).map(|m| m.as_str()).unwrap_or_default();

        let min_price = match rule.min.extract(&caps, multiplier) {
            Ok(value) => value,
            Err(source) => {
                warn!(
                    "{}",
                    PriceSenseError::RuleConversion {
                        rule: rule.category.to_string(),
                        source,
                    }
                );
                continue;
            }
        };
        let max_price = match rule.max.extract(&caps, multiplier) {
            Ok(value) => value,
            Err(source) => {
                warn!(
                    "{}",
                    PriceSenseError::RuleConversion {
                        rule: rule.category.to_string(),
                        source,
                    }
                );
                continue;
            }
        };

        let confidence = matched.chars().count() as f64 / query_len as f64;
        if best
            .as_ref()
            .is_none_or(|b| candidate_supersedes(confidence, b.confidence))
        {
            best = Some(Candidate {
                min_price,
                max_price,
                confidence,
                category: rule.category,
                extracted: matched.to_string(),
            });
        }
    }
    best
}

fn finalize(candidate: Candidate) -> PriceIntent {
    let intent = PriceIntent {
        min_price: candidate.min_price,
        max_price: candidate.max_price,
        confidence: candidate.confidence,
        pattern_type: candidate.category,
        extracted_text: Some(candidate.extracted),
        reasoning: None,
    };
    // order matters: swap bounds first, then boost, then clamp
    let mut intent = normalize_range(intent);
    intent.confidence = (intent.confidence * intent.pattern_type.confidence_boost()).clamp(0.0, 1.0);
    intent
}

/// Convert a validated estimator result into an intent, discarding
/// low-confidence guesses and boundless answers.
fn intent_from_estimate(estimate: EstimateResult) -> PriceIntent {
    if estimate.confidence <= ESTIMATE_CONFIDENCE_FLOOR {
        debug!(
            "Discarding low-confidence estimate ({:.2})",
            estimate.confidence
        );
        return PriceIntent::none();
    }
    if estimate.min_price.is_none() && estimate.max_price.is_none() {
        return PriceIntent::none();
    }
    normalize_range(PriceIntent {
        min_price: estimate.min_price,
        max_price: estimate.max_price,
        confidence: estimate.confidence.clamp(0.0, 1.0),
        pattern_type: PatternType::ExternalEstimate,
        extracted_text: None,
        reasoning: Some(estimate.reasoning),
    })
}

/// Resolves the price intent of free-text search queries.
pub struct IntentResolver {
    keywords: KeywordTables,
    cleaner: QueryCleaner,
    estimator: Option<Arc<dyn PriceEstimator>>,
    cache: IntentCache,
}

impl IntentResolver {
    pub fn new(config: &PriceSenseConfig) -> Self {
        let keywords = KeywordTables::load(config.keywords_path.as_deref());
        let cleaner = QueryCleaner::new(&keywords);
        info!(
            "IntentResolver initialized: rules={}, cache_capacity={}",
            PATTERN_CATALOG.len(),
            config.cache_capacity
        );
        Self {
            keywords,
            cleaner,
            estimator: None,
            cache: IntentCache::new(config.cache_capacity, config.cache_ttl),
        }
    }

    /// Attach the external estimation tier.
    pub fn with_estimator(mut self, estimator: Arc<dyn PriceEstimator>) -> Self {
        self.estimator = Some(estimator);
        self
    }

    /// Rule tier only: deterministic, synchronous, no I/O.
    pub fn resolve(&self, query: &str) -> PriceIntent {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return PriceIntent::none();
        }

        let multiplier = category_multiplier(&normalized, &self.keywords);
        match scan_rules(&PATTERN_CATALOG, &normalized, multiplier) {
            Some(candidate) => {
                let intent = finalize(candidate);
                debug!(
                    "Rule match: {} {:?}..{:?} (confidence {:.2}) for '{}'",
                    intent.pattern_type,
                    intent.min_price,
                    intent.max_price,
                    intent.confidence,
                    safe_truncate(&normalized, 50)
                );
                intent
            }
            None => {
                debug!("No rule matched '{}'", safe_truncate(&normalized, 50));
                PriceIntent::none()
            }
        }
    }

    /// Full pipeline: rules, then the budget keyword fallback, then the
    /// external estimator when one is attached. Results are memoized per
    /// exact query string so repeated queries never repeat an external call.
    pub async fn resolve_full(&self, query: &str) -> PriceIntent {
        if let Some(hit) = self.cache.get(query) {
            debug!("Intent cache hit for '{}'", safe_truncate(query, 50));
            return hit;
        }

        let mut intent = self.resolve(query);

        if intent.pattern_type == PatternType::None {
            if let Some(fallback) = budget_fallback(query, &self.keywords) {
                intent = fallback;
            }
        }

        if intent.pattern_type == PatternType::None {
            if let Some(estimator) = &self.estimator {
                let estimate = estimator.estimate(query).await;
                intent = intent_from_estimate(estimate);
                if intent.pattern_type == PatternType::ExternalEstimate {
                    info!(
                        "External estimate accepted: {:?}..{:?} (confidence {:.2})",
                        intent.min_price, intent.max_price, intent.confidence
                    );
                }
            }
        }

        self.cache.put(query, intent.clone());
        intent
    }

    /// Strip price phrases from the original query text.
    pub fn clean(&self, query: &str) -> String {
        self.cleaner.clean(query)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Default for IntentResolver {
    fn default() -> Self {
        Self::new(&PriceSenseConfig::default())
    }
}
