use serde::{Deserialize, Serialize};
use crate::enums::risk_level::RiskLevel;
use crate::services::risk_classifier::RiskClassifier;
use crate::structs::operational_issue::OperationalIssue;
use crate::structs::security_threat::SecurityThreat;

/// The single output shape of an analysis, whether it came from the model or the keyword scan.
///
/// Totals and the risk level are derived in [`LogAnalysisResult::new`] and cannot be set
/// directly, so they always agree with the entry lists. Deserializing recomputes them too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "StoredResult")]
pub struct LogAnalysisResult {
    summary: String,
    security_threats: Vec<SecurityThreat>,
    operational_issues: Vec<OperationalIssue>,
    total_threats: usize,
    total_issues: usize,
    overall_risk_level: RiskLevel,
}

impl LogAnalysisResult {
    pub fn new(summary: String, security_threats: Vec<SecurityThreat>, operational_issues: Vec<OperationalIssue>) -> Self {
        let overall_risk_level = RiskClassifier::classify(&security_threats, &operational_issues);

        Self {
            summary,
            total_threats: security_threats.len(),
            total_issues: operational_issues.len(),
            security_threats,
            operational_issues,
            overall_risk_level,
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn security_threats(&self) -> &[SecurityThreat] {
        &self.security_threats
    }

    pub fn operational_issues(&self) -> &[OperationalIssue] {
        &self.operational_issues
    }

    pub fn total_threats(&self) -> usize {
        self.total_threats
    }

    pub fn total_issues(&self) -> usize {
        self.total_issues
    }

    pub fn overall_risk_level(&self) -> RiskLevel {
        self.overall_risk_level
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredResult {
    summary: String,
    #[serde(default)]
    security_threats: Vec<SecurityThreat>,
    #[serde(default)]
    operational_issues: Vec<OperationalIssue>,
}

impl From<StoredResult> for LogAnalysisResult {
    fn from(stored: StoredResult) -> Self {
        LogAnalysisResult::new(stored.summary, stored.security_threats, stored.operational_issues)
    }
}
