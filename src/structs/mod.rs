pub mod security_threat;
pub mod operational_issue;
pub mod log_analysis_result;
pub mod analysis_outcome;
pub mod analysis_record;
pub mod history_page;
pub mod prompt_payload;
pub mod cli;
pub mod config;
pub mod ai;
