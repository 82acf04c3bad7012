use crate::config::constants::{
    FALLBACK_EXCERPT_CHARS, FALLBACK_MAX_ERRORS, FALLBACK_MAX_SECURITY, FALLBACK_MAX_WARNINGS,
};
use crate::enums::issue_type::IssueType;
use crate::enums::severity::Severity;
use crate::services::response_parser::UNKNOWN_TIMESTAMP;
use crate::structs::log_analysis_result::LogAnalysisResult;
use crate::structs::operational_issue::OperationalIssue;
use crate::structs::security_threat::SecurityThreat;

const ERROR_KEYWORDS: &[&str] = &["error", "fail", "exception", "crash", "abort"];
const WARNING_KEYWORDS: &[&str] = &["warn", "warning", "caution"];
const SECURITY_KEYWORDS: &[&str] = &[
    "login", "auth", "unauthorized", "forbidden", "attack", "breach", "hack", "intrusion",
];

const FALLBACK_CATEGORY: &str = "Keyword Match";

/// Deterministic keyword scan used when the AI path is exhausted.
pub struct FallbackAnalyzer;

impl FallbackAnalyzer {
    pub fn analyze(normalized_log: &str) -> LogAnalysisResult {
        let mut error_lines = Vec::new();
        let mut warning_lines = Vec::new();
        let mut security_lines = Vec::new();
        let mut scanned = 0usize;

        for line in normalized_log.lines() {
            scanned += 1;
            let lowered = line.to_lowercase();

            if Self::matches_any(&lowered, ERROR_KEYWORDS) {
                error_lines.push(line);
            } else if Self::matches_any(&lowered, WARNING_KEYWORDS) {
                warning_lines.push(line);
            }

            if Self::matches_any(&lowered, SECURITY_KEYWORDS) {
                security_lines.push(line);
            }
        }

        let mut issues: Vec<OperationalIssue> = error_lines
            .iter()
            .take(FALLBACK_MAX_ERRORS)
            .map(|line| Self::issue(IssueType::Error, "Error detected", line, "Review this error entry and address its root cause."))
            .collect();
        issues.extend(
            warning_lines
                .iter()
                .take(FALLBACK_MAX_WARNINGS)
                .map(|line| Self::issue(IssueType::Warning, "Warning detected", line, "Monitor this warning for recurrence.")),
        );

        let threats: Vec<SecurityThreat> = security_lines
            .iter()
            .take(FALLBACK_MAX_SECURITY)
            .map(|line| SecurityThreat {
                severity: Severity::Medium,
                description: format!("Security-related activity: {}", Self::excerpt(line)),
                recommendation: "Investigate this entry for unauthorized access attempts.".to_string(),
                timestamp: UNKNOWN_TIMESTAMP.to_string(),
                category: Some(FALLBACK_CATEGORY.to_string()),
                risk_score: None,
            })
            .collect();

        let summary = format!(
            "Fallback analysis (AI service unavailable): scanned {} lines and found {} error lines, {} warning lines and {} security-related lines.",
            scanned,
            error_lines.len(),
            warning_lines.len(),
            security_lines.len()
        );

        log::debug!("🔎 Fallback scan: {}", summary);

        LogAnalysisResult::new(summary, threats, issues)
    }

    fn matches_any(lowered: &str, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| lowered.contains(keyword))
    }

    fn issue(issue_type: IssueType, label: &str, line: &str, recommendation: &str) -> OperationalIssue {
        OperationalIssue {
            issue_type,
            description: format!("{}: {}", label, Self::excerpt(line)),
            recommendation: recommendation.to_string(),
            timestamp: UNKNOWN_TIMESTAMP.to_string(),
            category: Some(FALLBACK_CATEGORY.to_string()),
            impact: None,
        }
    }

    fn excerpt(line: &str) -> String {
        line.chars().take(FALLBACK_EXCERPT_CHARS).collect()
    }
}
