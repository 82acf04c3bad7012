use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AiProviderError {
    #[error("AI API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
}

impl AiProviderError {
    /// Maps a non-success HTTP status and body onto the provider taxonomy.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => AiProviderError::AuthenticationError(body),
            429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", body)),
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_statuses() {
        assert!(matches!(AiProviderError::from_status(401, "bad key".into()), AiProviderError::AuthenticationError(_)));
        assert_eq!(
            AiProviderError::from_status(429, "slow down".into()),
            AiProviderError::ApiError("Rate limit exceeded: slow down".into())
        );
        assert_eq!(
            AiProviderError::from_status(500, "boom".into()),
            AiProviderError::ApiError("HTTP 500: boom".into())
        );
    }
}
