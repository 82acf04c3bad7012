use serde::Serialize;
use crate::structs::analysis_record::AnalysisRecord;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPage {
    pub records: Vec<AnalysisRecord>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl HistoryPage {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
