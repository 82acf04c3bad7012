use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::prompt_payload::PromptPayload;

/// A text-generation backend. One call, one raw reply; retries and timeouts live elsewhere.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    fn name(&self) -> String;

    /// Waits until a call may be issued, e.g. for rate-limit capacity. Not covered by the
    /// per-attempt deadline.
    async fn ready(&self) {}

    async fn chat(&self, payload: &PromptPayload) -> Result<String, AiProviderError>;
}
