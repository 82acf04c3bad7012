use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::enums::analysis_source::AnalysisSource;
use crate::structs::log_analysis_result::LogAnalysisResult;

/// A persisted analysis. Identity and creation time are assigned by the history store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub raw_log: String,
    pub source: AnalysisSource,
    pub attempts: u32,
    pub result: LogAnalysisResult,
}
