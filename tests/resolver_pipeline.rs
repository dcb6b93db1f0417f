//! End-to-end tier behavior with a scripted estimator standing in for the
//! external service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use pricesense::{
    format_intent, EstimateResult, IntentResolver, PatternType, PriceEstimator, PriceSenseConfig,
};

struct ScriptedEstimator {
    result: EstimateResult,
    calls: AtomicUsize,
}

impl ScriptedEstimator {
    fn new(result: EstimateResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceEstimator for ScriptedEstimator {
    async fn estimate(&self, _query: &str) -> EstimateResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

fn resolver_with(estimator: Arc<ScriptedEstimator>) -> IntentResolver {
    IntentResolver::new(&PriceSenseConfig::default()).with_estimator(estimator)
}

fn estimate(min: Option<f64>, max: Option<f64>, confidence: f64) -> EstimateResult {
    EstimateResult {
        min_price: min,
        max_price: max,
        confidence,
        reasoning: "scripted".to_string(),
    }
}

#[tokio::test]
async fn rules_answer_without_consulting_the_estimator() {
    let estimator = ScriptedEstimator::new(estimate(Some(1.0), Some(2.0), 0.99));
    let resolver = resolver_with(estimator.clone());

    let intent = resolver.resolve_full("under 50 euro").await;
    assert_eq!(intent.pattern_type, PatternType::Below);
    assert_eq!(intent.max_price, Some(50.0));
    assert_eq!(estimator.calls(), 0);
}

#[tokio::test]
async fn fallback_keywords_answer_before_the_estimator() {
    let estimator = ScriptedEstimator::new(estimate(Some(1.0), Some(2.0), 0.99));
    let resolver = resolver_with(estimator.clone());

    let intent = resolver.resolve_full("betaalbare schoenen").await;
    assert_eq!(intent.pattern_type, PatternType::BudgetFallback);
    assert_eq!(intent.max_price, Some(75.0));
    assert_eq!(intent.confidence, 0.8);
    assert_eq!(estimator.calls(), 0);
}

#[tokio::test]
async fn confident_estimates_are_surfaced() {
    let estimator = ScriptedEstimator::new(estimate(Some(20.0), Some(60.0), 0.85));
    let resolver = resolver_with(estimator.clone());

    let intent = resolver.resolve_full("gift for a vinyl collector").await;
    assert_eq!(intent.pattern_type, PatternType::ExternalEstimate);
    assert_eq!(intent.min_price, Some(20.0));
    assert_eq!(intent.max_price, Some(60.0));
    assert_eq!(intent.reasoning.as_deref(), Some("scripted"));
    assert_eq!(estimator.calls(), 1);
}

#[tokio::test]
async fn low_confidence_estimates_do_not_leak_through() {
    let estimator = ScriptedEstimator::new(estimate(Some(10.0), Some(60.0), 0.4));
    let resolver = resolver_with(estimator.clone());

    let intent = resolver.resolve_full("glittery unicorn lamp").await;
    assert_eq!(intent.pattern_type, PatternType::None);
    assert_eq!(intent.confidence, 0.0);
    assert!(intent.min_price.is_none() && intent.max_price.is_none());
    assert_eq!(estimator.calls(), 1);
}

#[tokio::test]
async fn swapped_estimate_bounds_are_normalized() {
    let estimator = ScriptedEstimator::new(estimate(Some(300.0), Some(100.0), 0.9));
    let resolver = resolver_with(estimator.clone());

    let intent = resolver.resolve_full("mystery box").await;
    assert_eq!(intent.min_price, Some(100.0));
    assert_eq!(intent.max_price, Some(300.0));
}

#[tokio::test]
async fn repeated_queries_are_served_from_the_cache() {
    let estimator = ScriptedEstimator::new(estimate(Some(20.0), Some(60.0), 0.85));
    let resolver = resolver_with(estimator.clone());

    let first = resolver.resolve_full("gift for a vinyl collector").await;
    let second = resolver.resolve_full("gift for a vinyl collector").await;
    assert_eq!(first, second);
    assert_eq!(estimator.calls(), 1, "second call must hit the cache");
    assert_eq!(resolver.cache_stats().hits, 1);
}

#[tokio::test]
async fn discarded_estimates_are_cached_too() {
    let estimator = ScriptedEstimator::new(estimate(Some(10.0), Some(60.0), 0.4));
    let resolver = resolver_with(estimator.clone());

    resolver.resolve_full("glittery unicorn lamp").await;
    resolver.resolve_full("glittery unicorn lamp").await;
    assert_eq!(estimator.calls(), 1);
}

#[tokio::test]
async fn end_to_end_range_extraction_and_cleaning() {
    let estimator = ScriptedEstimator::new(estimate(None, None, 0.0));
    let resolver = resolver_with(estimator.clone());

    let query = "red jacket between 100 and 300 euro";
    let intent = resolver.resolve_full(query).await;
    assert_eq!(intent.min_price, Some(100.0));
    assert_eq!(intent.max_price, Some(300.0));
    assert_eq!(intent.pattern_type, PatternType::Range);

    assert_eq!(resolver.clean(query), "red jacket");
    assert_eq!(
        format_intent(&intent),
        format!(
            "Searching for products between €100.00 and €300.00 ({})",
            pricesense::confidence_label(intent.confidence)
        )
    );
    assert_eq!(estimator.calls(), 0);
}

#[tokio::test]
async fn no_estimator_means_no_signal_for_neutral_queries() {
    let resolver = IntentResolver::new(&PriceSenseConfig::default());
    let intent = resolver.resolve_full("rode schoenen maat 42").await;
    assert_eq!(intent.pattern_type, PatternType::None);
    assert_eq!(intent.confidence, 0.0);
}
