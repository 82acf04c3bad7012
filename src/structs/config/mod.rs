pub mod ai_config;
pub mod config;
pub mod output_config;
pub mod pipeline_config;
pub mod rate_limit_config;
