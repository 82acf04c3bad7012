pub mod log_analysis_prompt;
