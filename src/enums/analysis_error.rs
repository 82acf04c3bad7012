use std::time::Duration;
use thiserror::Error;
use crate::enums::ai_provider_error::AiProviderError;

/// Failures of the analysis pipeline. Only `EmptyInput` ever reaches a caller of
/// `LogAnalyzer::analyze`; the rest are per-attempt and end in the fallback.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("log input is empty after normalization")]
    EmptyInput,
    #[error("AI call timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed AI response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    pub fn is_retryable(&self) -> bool {
        !matches!(self, AnalysisError::EmptyInput)
    }
}

impl From<AiProviderError> for AnalysisError {
    fn from(error: AiProviderError) -> Self {
        AnalysisError::Transport(error.to_string())
    }
}
