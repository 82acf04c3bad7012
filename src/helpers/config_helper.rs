use crate::config::constants::{
    ANTHROPIC_API_KEY_ENV, DEEPSEEK_API_KEY_ENV, DEFAULT_BASE_DELAY_MS, DEFAULT_BURST_PER_SECOND,
    DEFAULT_MAX_CHARS, DEFAULT_MAX_RETRIES, DEFAULT_OWNER, DEFAULT_REQUESTS_PER_MINUTE, DEFAULT_TIMEOUT_MS,
    OPENAI_API_KEY_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        "anthropic".to_string()
    }

    pub fn default_model() -> String {
        "claude-3-5-sonnet-20241022".to_string()
    }

    pub fn default_model_for(provider: &str) -> String {
        match provider {
            "openai" => "gpt-4o-mini".to_string(),
            "deepseek" => "deepseek-chat".to_string(),
            _ => Self::default_model(),
        }
    }

    pub fn default_api_key_env(provider: &str) -> &'static str {
        match provider {
            "openai" => OPENAI_API_KEY_ENV,
            "deepseek" => DEEPSEEK_API_KEY_ENV,
            _ => ANTHROPIC_API_KEY_ENV,
        }
    }

    pub fn default_max_tokens() -> u32 {
        4096
    }

    pub fn default_temperature() -> f32 {
        0.0
    }

    pub fn default_max_chars() -> usize {
        DEFAULT_MAX_CHARS
    }

    pub fn default_timeout_ms() -> u64 {
        DEFAULT_TIMEOUT_MS
    }

    pub fn default_max_retries() -> u32 {
        DEFAULT_MAX_RETRIES
    }

    pub fn default_base_delay_ms() -> u64 {
        DEFAULT_BASE_DELAY_MS
    }

    pub fn default_requests_per_minute() -> u32 {
        DEFAULT_REQUESTS_PER_MINUTE
    }

    pub fn default_burst_per_second() -> u32 {
        DEFAULT_BURST_PER_SECOND
    }

    pub fn default_save_history() -> bool {
        true
    }

    pub fn default_owner() -> String {
        DEFAULT_OWNER.to_string()
    }
}
