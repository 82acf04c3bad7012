pub mod animated_logger;
pub mod analysis_report_logger;
