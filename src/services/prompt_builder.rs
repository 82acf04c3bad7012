use once_cell::sync::Lazy;
use serde_json::{json, Value};
use crate::enums::issue_type::IssueType;
use crate::enums::risk_level::RiskLevel;
use crate::enums::severity::Severity;
use crate::prompts::log_analysis_prompt::{LOG_ANALYSIS_SYSTEM_PROMPT, LOG_BLOCK_END, LOG_BLOCK_START};
use crate::structs::prompt_payload::PromptPayload;

pub struct PromptBuilder;

impl PromptBuilder {
    /// Renders normalized log text into a provider payload. Same input, same payload.
    pub fn build(normalized_log: &str) -> PromptPayload {
        PromptPayload {
            system_instruction: LOG_ANALYSIS_SYSTEM_PROMPT.trim().to_string(),
            user_content: format!(
                "Analyze the following log entries.\n\n{}\n{}\n{}",
                LOG_BLOCK_START, normalized_log, LOG_BLOCK_END
            ),
            output_schema: Self::output_schema(),
        }
    }

    /// JSON Schema describing `LogAnalysisResult`.
    pub fn output_schema() -> Value {
        OUTPUT_SCHEMA.clone()
    }
}

static OUTPUT_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "summary": {
                "type": "string",
                "description": "One paragraph overview of what the logs show"
            },
            "securityThreats": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "severity": { "type": "string", "enum": Severity::ALL },
                        "description": { "type": "string" },
                        "recommendation": { "type": "string" },
                        "timestamp": { "type": "string" },
                        "category": { "type": "string" },
                        "riskScore": { "type": "integer", "minimum": 0, "maximum": 100 }
                    },
                    "required": ["severity", "description", "recommendation", "timestamp"]
                }
            },
            "operationalIssues": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string", "enum": IssueType::ALL },
                        "description": { "type": "string" },
                        "recommendation": { "type": "string" },
                        "timestamp": { "type": "string" },
                        "category": { "type": "string" },
                        "impact": { "type": "string" }
                    },
                    "required": ["type", "description", "recommendation", "timestamp"]
                }
            },
            "totalThreats": { "type": "integer" },
            "totalIssues": { "type": "integer" },
            "overallRiskLevel": { "type": "string", "enum": RiskLevel::ALL }
        },
        "required": ["summary", "securityThreats", "operationalIssues", "overallRiskLevel"]
    })
});
