use serde_json::{Map, Value};
use crate::enums::analysis_error::AnalysisError;
use crate::enums::issue_type::IssueType;
use crate::enums::severity::Severity;
use crate::structs::log_analysis_result::LogAnalysisResult;
use crate::structs::operational_issue::OperationalIssue;
use crate::structs::security_threat::SecurityThreat;

pub const DEFAULT_SUMMARY: &str = "Log analysis completed; no summary was provided.";
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";
pub const DEFAULT_RECOMMENDATION: &str = "No recommendation provided.";
pub const UNKNOWN_TIMESTAMP: &str = "N/A";

const MAX_RISK_SCORE: i64 = 100;

/// Turns raw model output into a repaired `LogAnalysisResult`.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(raw: &str) -> Result<LogAnalysisResult, AnalysisError> {
        let object = Self::extract_object(raw)?;

        let summary = Self::text_field(&object, &["summary"]).unwrap_or_else(|| DEFAULT_SUMMARY.to_string());
        let security_threats = Self::entries(&object, &["securityThreats", "security_threats"])
            .map(Self::repair_threat)
            .collect();
        let operational_issues = Self::entries(&object, &["operationalIssues", "operational_issues"])
            .map(Self::repair_issue)
            .collect();

        // Totals and risk level from the model are ignored; the constructor recomputes them.
        Ok(LogAnalysisResult::new(summary, security_threats, operational_issues))
    }

    /// Finds the JSON object in a reply that may carry prose or code fences around it.
    pub fn extract_object(raw: &str) -> Result<Map<String, Value>, AnalysisError> {
        let start = raw
            .find('{')
            .ok_or_else(|| AnalysisError::MalformedResponse("no JSON object found in response".to_string()))?;

        let balanced = Self::matching_brace(raw, start).map(|end| &raw[start..=end]);
        let widest = raw.rfind('}').filter(|end| *end > start).map(|end| &raw[start..=end]);

        let mut last_error = "unterminated JSON object".to_string();
        for candidate in [balanced, widest].into_iter().flatten() {
            match serde_json::from_str::<Value>(candidate) {
                Ok(Value::Object(map)) => return Ok(map),
                Ok(_) => last_error = "top-level JSON value is not an object".to_string(),
                Err(e) => last_error = e.to_string(),
            }
        }

        Err(AnalysisError::MalformedResponse(last_error))
    }

    fn matching_brace(raw: &str, start: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;

        for (offset, ch) in raw[start..].char_indices() {
            if in_string {
                match ch {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }

            match ch {
                '"' => in_string = true,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(start + offset);
                    }
                }
                _ => {}
            }
        }

        None
    }

    fn entries<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> impl Iterator<Item = &'a Map<String, Value>> {
        keys.iter()
            .find_map(|key| object.get(*key))
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    fn repair_threat(entry: &Map<String, Value>) -> SecurityThreat {
        let severity = Self::text_field(entry, &["severity"])
            .and_then(|value| Severity::parse_lenient(&value))
            .unwrap_or_default();

        SecurityThreat {
            severity,
            description: Self::text_field(entry, &["description"]).unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            recommendation: Self::text_field(entry, &["recommendation"]).unwrap_or_else(|| DEFAULT_RECOMMENDATION.to_string()),
            timestamp: Self::text_field(entry, &["timestamp"]).unwrap_or_else(|| UNKNOWN_TIMESTAMP.to_string()),
            category: Self::text_field(entry, &["category"]),
            risk_score: Self::risk_score(entry),
        }
    }

    fn repair_issue(entry: &Map<String, Value>) -> OperationalIssue {
        let issue_type = Self::text_field(entry, &["type", "issueType", "issue_type"])
            .and_then(|value| IssueType::parse_lenient(&value))
            .unwrap_or_default();

        OperationalIssue {
            issue_type,
            description: Self::text_field(entry, &["description"]).unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            recommendation: Self::text_field(entry, &["recommendation"]).unwrap_or_else(|| DEFAULT_RECOMMENDATION.to_string()),
            timestamp: Self::text_field(entry, &["timestamp"]).unwrap_or_else(|| UNKNOWN_TIMESTAMP.to_string()),
            category: Self::text_field(entry, &["category"]),
            impact: Self::text_field(entry, &["impact"]),
        }
    }

    /// Non-blank string value under the first key present. Numbers are stringified.
    fn text_field(entry: &Map<String, Value>, keys: &[&str]) -> Option<String> {
        let value = keys.iter().find_map(|key| entry.get(*key))?;
        let text = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Absent stays absent; present but unusable becomes 0; everything else is clamped.
    fn risk_score(entry: &Map<String, Value>) -> Option<u8> {
        let value = entry.get("riskScore").or_else(|| entry.get("risk_score"))?;
        if value.is_null() {
            return None;
        }

        let score = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|score| score.is_finite())
        .map(|score| (score.round() as i64).clamp(0, MAX_RISK_SCORE))
        .unwrap_or(0);

        u8::try_from(score).ok()
    }
}
