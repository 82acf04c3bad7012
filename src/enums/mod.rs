pub mod severity;
pub mod issue_type;
pub mod risk_level;
pub mod analysis_source;
pub mod output_format;
pub mod commands;
pub mod ai_provider_error;
pub mod analysis_error;
