use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Knobs of the analysis pipeline.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Upper bound on normalized log size, in characters.
    #[serde(default = "ConfigHelper::default_max_chars")]
    pub max_chars: usize,

    /// Deadline for a single provider call.
    #[serde(default = "ConfigHelper::default_timeout_ms")]
    pub timeout_ms: u64,

    /// Total provider attempts, the first one included.
    #[serde(default = "ConfigHelper::default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "ConfigHelper::default_base_delay_ms")]
    pub base_delay_ms: u64,
}

impl PipelineConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.max(1)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_chars: ConfigHelper::default_max_chars(),
            timeout_ms: ConfigHelper::default_timeout_ms(),
            max_retries: ConfigHelper::default_max_retries(),
            base_delay_ms: ConfigHelper::default_base_delay_ms(),
        }
    }
}
