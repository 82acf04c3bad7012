use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, SUPPORTED_PROVIDERS};
use crate::errors::{LogTriageError, LogTriageResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# logtriage configuration

[ai]
# One of: "anthropic", "openai", "deepseek"
provider = "anthropic"
# Defaults per provider: claude-3-5-sonnet-20241022, gpt-4o-mini, deepseek-chat
# model = "claude-3-5-sonnet-20241022"
max_tokens = 4096
temperature = 0.0
# Environment variable holding the API key (defaults per provider)
# api_key_env = "ANTHROPIC_API_KEY"
# Override the API endpoint, e.g. for a proxy
# base_url = "https://api.anthropic.com/v1"

[pipeline]
# Normalized logs are cut to this many characters, keeping the newest lines
max_chars = 50000
# Deadline for a single AI call
timeout_ms = 30000
# Total AI attempts before falling back to the keyword scan
max_retries = 3
# Wait base_delay_ms * attempt_number between attempts
base_delay_ms = 1000

[rate_limit]
requests_per_minute = 50
burst_per_second = 5

[output]
# "pretty" or "json"
format = "pretty"
save_history = true
owner = "local"
# history_dir = "/var/lib/logtriage/history"
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the user config, or defaults when none exists.
    pub fn load() -> LogTriageResult<Config> {
        let path = Self::config_path();

        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            return Self::load_from(&path);
        }

        log::debug!("📋 No config at {}, using defaults", path.display());
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> LogTriageResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| LogTriageError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LogTriageResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn sample_config() -> &'static str {
        SAMPLE_CONFIG
    }

    pub fn create_sample_config() -> LogTriageResult<PathBuf> {
        let path = Self::config_path();
        Self::create_sample_config_at(&path)?;
        Ok(path)
    }

    pub fn create_sample_config_at(path: &Path) -> LogTriageResult<()> {
        if path.exists() {
            return Err(LogTriageError::config_file_error(
                &path.display().to_string(),
                "file already exists; remove it first to regenerate",
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| LogTriageError::config_file_error(&parent.display().to_string(), &e.to_string()))?;
        }

        fs::write(path, SAMPLE_CONFIG)
            .map_err(|e| LogTriageError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !SUPPORTED_PROVIDERS.contains(&config.ai.provider.as_str()) {
            errors.push(format!(
                "Unknown AI provider '{}' (supported: {})",
                config.ai.provider,
                SUPPORTED_PROVIDERS.join(", ")
            ));
        }

        if config.ai.model.as_deref().is_some_and(|model| model.trim().is_empty()) {
            errors.push("ai.model must not be empty".to_string());
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!("ai.temperature must be between 0.0 and 2.0, got {}", config.ai.temperature));
        }

        if config.pipeline.max_chars == 0 {
            errors.push("pipeline.max_chars must be greater than zero".to_string());
        }

        if config.pipeline.timeout_ms == 0 {
            errors.push("pipeline.timeout_ms must be greater than zero".to_string());
        }

        if config.pipeline.max_retries == 0 {
            errors.push("pipeline.max_retries must be at least 1".to_string());
        }

        if config.rate_limit.requests_per_minute == 0 || config.rate_limit.burst_per_second == 0 {
            errors.push("rate_limit values must be greater than zero".to_string());
        }

        if config.output.owner.trim().is_empty() {
            errors.push("output.owner must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `validate_config` folded into a single error.
    pub fn ensure_valid(config: &Config) -> LogTriageResult<()> {
        Self::validate_config(config).map_err(|errors| LogTriageError::MultipleErrors {
            errors: errors
                .iter()
                .map(|message| LogTriageError::config_error(message, None, None))
                .collect(),
            context: "configuration validation".to_string(),
        })
    }
}
