use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnthropicMessage {
    pub role: String,
    pub content: String,
}
