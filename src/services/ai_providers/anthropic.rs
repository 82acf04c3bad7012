use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::config::constants::{ANTHROPIC_BASE_URL, ANTHROPIC_VERSION};
use crate::enums::ai_provider_error::AiProviderError;
use crate::helpers::config_helper::ConfigHelper;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::ai::anthropic::anthropic_message::AnthropicMessage;
use crate::structs::ai::anthropic::anthropic_message_request::AnthropicMessageRequest;
use crate::structs::prompt_payload::PromptPayload;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct AnthropicProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
    rate_limiter: Arc<ApiRateLimiter>,
}

impl AnthropicProvider {
    pub fn new(api_key: String, rate_limiter: Arc<ApiRateLimiter>) -> Self {
        Self {
            api_key,
            base_url: ANTHROPIC_BASE_URL.to_string(),
            client: Client::new(),
            model: ConfigHelper::default_model(),
            max_tokens: 4096,
            temperature: 0.0,
            rate_limiter,
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

    /// The Messages API has no schema parameter, so the schema rides in the system prompt.
    pub fn get_request(&self, payload: &PromptPayload) -> AnthropicMessageRequest {
        AnthropicMessageRequest {
            model: self.model.clone(),
            system: payload.system_with_schema(),
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: payload.user_content.clone(),
            }],
        }
    }

    pub fn extract_text(json: &Value) -> Result<String, AiProviderError> {
        let text: String = json
            .get("content")
            .and_then(|content| content.as_array())
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))?
            .iter()
            .filter(|block| block.get("type").and_then(|t| t.as_str()) == Some("text"))
            .filter_map(|block| block.get("text").and_then(|t| t.as_str()))
            .collect();

        if text.is_empty() {
            return Err(AiProviderError::SerializationError("No text block in response".to_string()));
        }

        Ok(text)
    }

    async fn make_request(&self, request_body: &AnthropicMessageRequest) -> Result<reqwest::Response, AiProviderError> {
        self.client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl AiProvider for AnthropicProvider {
    fn name(&self) -> String {
        format!("anthropic/{}", self.model)
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

            log::error!("❌ Anthropic API Error Response: {}", error_text);
            return Err(AiProviderError::from_status(status.as_u16(), error_text));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        Self::extract_text(&json)
    }
}
