use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_CACHE_SIZE, DEFAULT_CACHE_TTL, DEFAULT_ESTIMATOR_TIMEOUT, DEFAULT_LLM_MODEL,
};

/// Runtime configuration for the extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSenseConfig {
    pub llm_provider: String,
    pub llm_model: String,
    pub llm_api_key: Option<String>,
    pub llm_base_url: Option<String>,
    pub llm_temperature: f64,

    /// Whether the external estimation tier is consulted at all.
    pub estimator_enabled: bool,
    /// Hard deadline for one estimation call, in seconds.
    pub estimator_timeout: u64,

    pub cache_capacity: usize,
    pub cache_ttl: u64,

    /// Optional path to a keyword-table JSON file overriding the embedded one.
    pub keywords_path: Option<String>,
}

impl PriceSenseConfig {
    pub fn new() -> Self {
        Self {
            llm_provider: "openai".to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_api_key: None,
            llm_base_url: None,
            llm_temperature: 0.1,

            estimator_enabled: false,
            estimator_timeout: DEFAULT_ESTIMATOR_TIMEOUT,

            cache_capacity: DEFAULT_CACHE_SIZE,
            cache_ttl: DEFAULT_CACHE_TTL,

            keywords_path: None,
        }
    }

    /// Build from `PRICESENSE_*` environment variables on top of defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(provider) = std::env::var("PRICESENSE_LLM_PROVIDER") {
            config.llm_provider = provider;
        }
        if let Ok(model) = std::env::var("PRICESENSE_LLM_MODEL") {
            config.llm_model = model;
        }
        if let Ok(key) = std::env::var("PRICESENSE_LLM_API_KEY") {
            config.llm_api_key = Some(key);
        }
        if let Ok(url) = std::env::var("PRICESENSE_LLM_BASE_URL") {
            config.llm_base_url = Some(url);
        }
        if let Ok(raw) = std::env::var("PRICESENSE_LLM_TEMPERATURE") {
            if let Ok(temperature) = raw.parse() {
                config.llm_temperature = temperature;
            }
        }
        if let Ok(raw) = std::env::var("PRICESENSE_ESTIMATOR_TIMEOUT") {
            if let Ok(timeout) = raw.parse() {
                config.estimator_timeout = timeout;
            }
        }
        if let Ok(raw) = std::env::var("PRICESENSE_CACHE_CAPACITY") {
            if let Ok(capacity) = raw.parse() {
                config.cache_capacity = capacity;
            }
        }
        if let Ok(raw) = std::env::var("PRICESENSE_CACHE_TTL") {
            if let Ok(ttl) = raw.parse() {
                config.cache_ttl = ttl;
            }
        }
        if let Ok(path) = std::env::var("PRICESENSE_KEYWORDS_PATH") {
            config.keywords_path = Some(path);
        }

        // the estimator only makes sense with a reachable provider; an API
        // key implies opt-in unless the flag says otherwise
        config.estimator_enabled = match std::env::var("PRICESENSE_ESTIMATOR_ENABLED") {
            Ok(raw) => raw.parse().unwrap_or(false),
            Err(_) => config.llm_api_key.is_some(),
        };

        config
    }
}

impl Default for PriceSenseConfig {
    fn default() -> Self {
        Self::new()
    }
}
