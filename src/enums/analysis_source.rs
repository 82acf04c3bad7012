use serde::{Deserialize, Serialize};

/// Where a result came from. Kept outside the result itself so both paths share one contract.
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnalysisSource {
    Ai { provider: String },
    Fallback { reason: String },
}

impl AnalysisSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisSource::Fallback { .. })
    }

    pub fn label(&self) -> String {
        match self {
            AnalysisSource::Ai { provider } => format!("AI ({})", provider),
            AnalysisSource::Fallback { .. } => "Fallback (keyword scan)".to_string(),
        }
    }
}
