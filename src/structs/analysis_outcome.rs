use serde::{Deserialize, Serialize};
use crate::enums::analysis_source::AnalysisSource;
use crate::structs::log_analysis_result::LogAnalysisResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub result: LogAnalysisResult,
    pub source: AnalysisSource,
    /// Provider attempts made; zero for offline analysis.
    pub attempts: u32,
}

impl AnalysisOutcome {
    pub fn is_fallback(&self) -> bool {
        self.source.is_fallback()
    }
}
