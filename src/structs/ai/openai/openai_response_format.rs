use serde::Serialize;
use serde_json::Value;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OpenAIResponseFormat {
    JsonObject,
    JsonSchema { json_schema: OpenAIJsonSchema },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OpenAIJsonSchema {
    pub name: String,
    pub schema: Value,
    pub strict: bool,
}
