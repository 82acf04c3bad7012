use serde::Serialize;
use serde_json::Value;

/// Everything a provider needs for one analysis call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PromptPayload {
    pub system_instruction: String,
    pub user_content: String,
    pub output_schema: Value,
}

impl PromptPayload {
    /// System instruction with the schema appended, for providers without native schema support.
    pub fn system_with_schema(&self) -> String {
        let schema = serde_json::to_string_pretty(&self.output_schema).unwrap_or_else(|_| self.output_schema.to_string());
        format!(
            "{}\n\nRespond with a single JSON object and nothing else. It MUST conform to this JSON Schema:\n{}",
            self.system_instruction, schema
        )
    }
}
