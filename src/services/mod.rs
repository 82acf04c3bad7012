pub mod preprocessor;
pub mod prompt_builder;
pub mod bounded_invoker;
pub mod response_parser;
pub mod risk_classifier;
pub mod fallback_analyzer;
pub mod log_analyzer;
pub mod rate_limiter;
pub mod history_store;
pub mod ai_providers;
