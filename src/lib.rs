//! Price-intent extraction for free-text product search queries.
//!
//! Reads a raw search query and infers the monetary filter it implies:
//! explicit bounds ("under 50"), ranges ("between 100 and 300"), approximate
//! amounts ("around 150"), and qualitative signals ("cheap", "premium",
//! "on sale"). A price-free rewrite of the query is produced separately for
//! semantic search. Resolution falls through three tiers: lexical rules, a
//! budget keyword fallback, and an optional LLM-backed estimation service.

pub mod core;
pub mod intent;
pub mod llm;
pub mod utils;

pub use crate::core::cache::CacheStats;
pub use crate::core::config::PriceSenseConfig;
pub use crate::core::error::{PriceSenseError, Result};
pub use crate::intent::cleaner::{clean_query, QueryCleaner};
pub use crate::intent::format::{confidence_label, format_intent};
pub use crate::intent::resolver::IntentResolver;
pub use crate::intent::types::{EstimateResult, PatternType, PriceBand, PriceIntent};
pub use crate::intent::validate::{normalize_range, price_band, validate_price_range};
pub use crate::llm::estimator::{LlmPriceEstimator, PriceEstimator};
pub use crate::utils::{safe_truncate, safe_truncate_ellipsis};

pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

pub const DEFAULT_CACHE_SIZE: usize = 1000;

pub const DEFAULT_CACHE_TTL: u64 = 300;

pub const DEFAULT_ESTIMATOR_TIMEOUT: u64 = 3;
