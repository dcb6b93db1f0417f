use std::sync::Arc;

use super::providers::base::LlmProvider;
use super::providers::ollama::OllamaProvider;
use super::providers::openai::OpenAiProvider;
use crate::core::config::PriceSenseConfig;
use crate::DEFAULT_OLLAMA_URL;

pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Build a provider by name. An unknown name is a configuration defect
    /// and aborts at startup rather than per query.
    #[must_use]
    pub fn create(
        provider: &str,
        model: &str,
        api_key: Option<&str>,
        base_url: Option<&str>,
        temperature: f64,
    ) -> Arc<dyn LlmProvider> {
        match provider {
            "openai" => Arc::new(OpenAiProvider::new(
                api_key.unwrap_or_default().to_string(),
                model.to_string(),
                base_url.map(String::from),
                temperature,
            )),
            "ollama" => Arc::new(OllamaProvider::new(
                base_url.unwrap_or(DEFAULT_OLLAMA_URL).to_string(),
                model.to_string(),
                temperature,
            )),
            _ => panic!("Unknown provider: {provider}. Supported: openai, ollama"),
        }
    }

    #[must_use]
    pub fn from_config(config: &PriceSenseConfig) -> Arc<dyn LlmProvider> {
        Self::create(
            &config.llm_provider,
            &config.llm_model,
            config.llm_api_key.as_deref(),
            config.llm_base_url.as_deref(),
            config.llm_temperature,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_providers_are_constructed() {
        let openai = LlmProviderFactory::create("openai", "gpt-4o-mini", Some("sk-test"), None, 0.1);
        assert_eq!(openai.provider_name(), "openai");

        let ollama = LlmProviderFactory::create("ollama", "llama3.2", None, None, 0.1);
        assert_eq!(ollama.provider_name(), "ollama");
        assert_eq!(ollama.model_name(), "llama3.2");
    }

    #[test]
    #[should_panic(expected = "Unknown provider")]
    fn test_unknown_provider_fails_fast() {
        let _ = LlmProviderFactory::create("palmtop", "m", None, None, 0.1);
    }
}
