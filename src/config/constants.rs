use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = "logtriage";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const HISTORY_DIR_NAME: &str = "history";

pub const DEFAULT_MAX_CHARS: usize = 50_000;
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BASE_DELAY_MS: u64 = 1_000;

pub const DEFAULT_REQUESTS_PER_MINUTE: u32 = 50;
pub const DEFAULT_BURST_PER_SECOND: u32 = 5;
pub const RATE_LIMIT_JITTER_MS: u64 = 100;

pub const DEFAULT_HISTORY_PAGE_SIZE: usize = 20;
pub const DEFAULT_OWNER: &str = "local";

pub const FALLBACK_MAX_ERRORS: usize = 3;
pub const FALLBACK_MAX_WARNINGS: usize = 2;
pub const FALLBACK_MAX_SECURITY: usize = 3;
pub const FALLBACK_EXCERPT_CHARS: usize = 100;

pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEEPSEEK_API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com/v1";

pub const SUPPORTED_PROVIDERS: &[&str] = &["anthropic", "openai", "deepseek"];

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
