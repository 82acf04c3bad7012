use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::config::constants::{DEEPSEEK_BASE_URL, OPENAI_BASE_URL};
use crate::enums::ai_provider_error::AiProviderError;
use crate::helpers::config_helper::ConfigHelper;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::ai::openai::openai_response_format::{OpenAIJsonSchema, OpenAIResponseFormat};
use crate::structs::prompt_payload::PromptPayload;
use crate::traits::ai_provider::AiProvider;

const SCHEMA_NAME: &str = "log_analysis";

/// How the output schema reaches the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    /// `response_format: json_schema` (OpenAI).
    Native,
    /// `response_format: json_object` with the schema written into the system message (DeepSeek and
    /// other compatible endpoints).
    InPrompt,
}

/// Chat Completions client, also used for OpenAI-compatible vendors.
#[derive(Clone)]
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
    schema_mode: SchemaMode,
    vendor: &'static str,
    rate_limiter: Arc<ApiRateLimiter>,
}

impl OpenAIProvider {
    pub fn new(api_key: String, rate_limiter: Arc<ApiRateLimiter>) -> Self {
        Self {
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
            client: Client::new(),
            model: ConfigHelper::default_model_for("openai"),
            max_tokens: 4096,
            temperature: 0.0,
            schema_mode: SchemaMode::Native,
            vendor: "openai",
            rate_limiter,
        }
    }

    pub fn deepseek(api_key: String, rate_limiter: Arc<ApiRateLimiter>) -> Self {
        Self {
            base_url: DEEPSEEK_BASE_URL.to_string(),
            model: ConfigHelper::default_model_for("deepseek"),
            schema_mode: SchemaMode::InPrompt,
            vendor: "deepseek",
            ..Self::new(api_key, rate_limiter)
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_sampling(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    fn get_openai_messages(&self, payload: &PromptPayload) -> Vec<OpenAIMessage> {
        let system = match self.schema_mode {
            SchemaMode::Native => payload.system_instruction.clone(),
            SchemaMode::InPrompt => payload.system_with_schema(),
        };

        vec![
            OpenAIMessage {
                role: "system".to_string(),
                content: system,
            },
            OpenAIMessage {
                role: "user".to_string(),
                content: payload.user_content.clone(),
            },
        ]
    }

    pub fn get_request(&self, payload: &PromptPayload) -> OpenAIRequest {
        let response_format = match self.schema_mode {
            SchemaMode::Native => OpenAIResponseFormat::JsonSchema {
                json_schema: OpenAIJsonSchema {
                    name: SCHEMA_NAME.to_string(),
                    schema: payload.output_schema.clone(),
                    strict: false,
                },
            },
            SchemaMode::InPrompt => OpenAIResponseFormat::JsonObject,
        };

        OpenAIRequest {
            model: self.model.clone(),
            messages: self.get_openai_messages(payload),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            stream: false,
            response_format: Some(response_format),
        }
    }

    pub fn extract_content(json: &Value) -> Result<String, AiProviderError> {
        if let Some(error) = json.get("error") {
            let error_message = error.get("message").and_then(|m| m.as_str()).unwrap_or("Unknown error");
            let error_type = error.get("type").and_then(|t| t.as_str()).unwrap_or("api_error");
            return Err(AiProviderError::ApiError(format!("{}: {}", error_type, error_message)));
        }

        json.get("choices")
            .and_then(|choices| choices.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(|content| content.to_string())
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }

    async fn make_request(&self, request_body: &OpenAIRequest) -> Result<reqwest::Response, AiProviderError> {
        self.client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl AiProvider for OpenAIProvider {
    fn name(&self) -> String {
        format!("{}/{}", self.vendor, self.model)
    }

    async fn ready(&self) {
        self.rate_limiter.acquire().await;
    }

    async fn chat(&self, payload: &PromptPayload) -> Result<String, AiProviderError> {
        let request_body = self.get_request(payload);
        log::debug!("📦 Request model: {}", request_body.model);

        let response = self.make_request(&request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ {} API Error Response: {}", self.vendor, error_text);
            return Err(AiProviderError::from_status(status.as_u16(), error_text));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        Self::extract_content(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::services::prompt_builder::PromptBuilder;

    fn limiter() -> Arc<ApiRateLimiter> {
        Arc::new(ApiRateLimiter::default())
    }

    #[test]
    fn openai_uses_native_json_schema() {
        let payload = PromptBuilder::build("WARN slow query");
        let body = serde_json::to_value(OpenAIProvider::new("k".to_string(), limiter()).get_request(&payload)).unwrap();

        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], "log_analysis");
        assert_eq!(body["messages"][0]["role"], "system");
        assert!(!body["messages"][0]["content"].as_str().unwrap().contains("JSON Schema"));
        assert_eq!(body["stream"], false);
    }

    #[test]
    fn deepseek_puts_schema_in_prompt() {
        let payload = PromptBuilder::build("WARN slow query");
        let provider = OpenAIProvider::deepseek("k".to_string(), limiter());
        let body = serde_json::to_value(provider.get_request(&payload)).unwrap();

        assert_eq!(provider.name(), "deepseek/deepseek-chat");
        assert_eq!(body["response_format"], json!({"type": "json_object"}));
        assert!(body["messages"][0]["content"].as_str().unwrap().contains("JSON Schema"));
    }

    #[test]
    fn extracts_first_choice_content() {
        let json = json!({"choices": [{"message": {"role": "assistant", "content": "{}"}}]});
        assert_eq!(OpenAIProvider::extract_content(&json).unwrap(), "{}");
    }

    #[test]
    fn surfaces_error_objects() {
        let json = json!({"error": {"message": "quota exhausted", "type": "insufficient_quota"}});
        assert_eq!(
            OpenAIProvider::extract_content(&json),
            Err(AiProviderError::ApiError("insufficient_quota: quota exhausted".to_string()))
        );
        assert!(matches!(
            OpenAIProvider::extract_content(&json!({"choices": []})),
            Err(AiProviderError::SerializationError(_))
        ));
    }
}
