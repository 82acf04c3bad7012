use crate::enums::issue_type::IssueType;
use crate::enums::risk_level::RiskLevel;
use crate::enums::severity::Severity;
use crate::structs::operational_issue::OperationalIssue;
use crate::structs::security_threat::SecurityThreat;

const HIGH_ERROR_ISSUE_THRESHOLD: usize = 5;
const HIGH_MEDIUM_THREAT_THRESHOLD: usize = 3;
const MEDIUM_TOTAL_ISSUE_THRESHOLD: usize = 3;

/// The one rule for deriving an overall risk level. Both the model path and the
/// fallback go through here.
pub struct RiskClassifier;

impl RiskClassifier {
    pub fn classify(threats: &[SecurityThreat], issues: &[OperationalIssue]) -> RiskLevel {
        let count_severity = |severity: Severity| threats.iter().filter(|t| t.severity == severity).count();
        let critical = count_severity(Severity::Critical);
        let high = count_severity(Severity::High);
        let medium = count_severity(Severity::Medium);
        let errors = issues.iter().filter(|i| i.issue_type == IssueType::Error).count();

        if critical > 0 {
            RiskLevel::Critical
        } else if high > 0 || errors > HIGH_ERROR_ISSUE_THRESHOLD || medium > HIGH_MEDIUM_THREAT_THRESHOLD {
            RiskLevel::High
        } else if medium > 0 || errors > 0 || issues.len() > MEDIUM_TOTAL_ISSUE_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
