pub mod anthropic;
pub mod openai;

use std::sync::Arc;
use crate::errors::{LogTriageError, LogTriageResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::services::ai_providers::anthropic::AnthropicProvider;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

/// Builds the configured provider, reading its API key from the environment.
pub fn build_provider(config: &AiConfig, rate_limiter: Arc<ApiRateLimiter>) -> LogTriageResult<Arc<dyn AiProvider>> {
    let key_env = config
        .api_key_env
        .clone()
        .unwrap_or_else(|| ConfigHelper::default_api_key_env(&config.provider).to_string());

    let api_key = std::env::var(&key_env)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| LogTriageError::config_error(
            &format!("API key environment variable '{}' is not set", key_env),
            Some("ai.api_key_env"),
            Some("Export the key, or run 'logtriage analyze --offline' for a keyword-only scan"),
        ))?;

    build_provider_with_key(config, api_key, rate_limiter)
}

pub fn build_provider_with_key(config: &AiConfig, api_key: String, rate_limiter: Arc<ApiRateLimiter>) -> LogTriageResult<Arc<dyn AiProvider>> {
    let provider: Arc<dyn AiProvider> = match config.provider.as_str() {
        "anthropic" => {
            let mut provider = AnthropicProvider::new(api_key, rate_limiter)
                .with_model(config.model_name())
                .with_sampling(config.max_tokens, config.temperature);
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Arc::new(provider)
        }
        "openai" | "deepseek" => {
            let base = if config.provider == "openai" {
                OpenAIProvider::new(api_key, rate_limiter)
            } else {
                OpenAIProvider::deepseek(api_key, rate_limiter)
            };
            let mut provider = base
                .with_model(config.model_name())
                .with_sampling(config.max_tokens, config.temperature);
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Arc::new(provider)
        }
        other => {
            return Err(LogTriageError::config_error(
                &format!("Unknown AI provider '{}'", other),
                Some("ai.provider"),
                Some("Use one of: anthropic, openai, deepseek"),
            ));
        }
    };

    log::debug!("🔌 Using AI provider {}", provider.name());
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_supported_provider() {
        for (provider, model) in [("anthropic", "claude-x"), ("openai", "gpt-x"), ("deepseek", "deepseek-x")] {
            let config = AiConfig {
                provider: provider.to_string(),
                model: Some(model.to_string()),
                ..AiConfig::default()
            };
            let built = build_provider_with_key(&config, "key".to_string(), Arc::new(ApiRateLimiter::default())).unwrap();
            assert_eq!(built.name(), format!("{}/{}", provider, model));
        }
    }

    #[test]
    fn rejects_unknown_provider() {
        let config = AiConfig {
            provider: "gemini".to_string(),
            ..AiConfig::default()
        };
        let error = build_provider_with_key(&config, "key".to_string(), Arc::new(ApiRateLimiter::default()))
            .err()
            .unwrap();
        assert!(matches!(error, LogTriageError::ConfigurationError { .. }));
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let config = AiConfig {
            api_key_env: Some("LOGTRIAGE_TEST_KEY_THAT_IS_NOT_SET".to_string()),
            ..AiConfig::default()
        };
        let error = build_provider(&config, Arc::new(ApiRateLimiter::default())).err().unwrap();
        assert!(error.user_message().contains("LOGTRIAGE_TEST_KEY_THAT_IS_NOT_SET"));
    }
}
