use std::time::Duration;
use crate::enums::analysis_error::AnalysisError;
use crate::structs::config::pipeline_config::PipelineConfig;
use crate::structs::prompt_payload::PromptPayload;
use crate::traits::ai_provider::AiProvider;

/// Value produced by a successful attempt, with the attempt count that got there.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation<T> {
    pub value: T,
    pub attempts: u32,
}

/// Last error after every attempt failed.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationFailure {
    pub error: AnalysisError,
    pub attempts: u32,
}

/// Timeout and retry wrapper around a single provider call.
///
/// Attempts run strictly one after another. The deadline starts once the provider reports
/// ready, so local rate limiting never counts against it. A failed attempt is followed by a sleep of
/// `base_delay * attempt_number` when another attempt remains. Dropping the returned future
/// abandons the in-flight call.
#[derive(Debug, Clone)]
pub struct BoundedInvoker {
    timeout: Duration,
    max_attempts: u32,
    base_delay: Duration,
}

impl BoundedInvoker {
    pub fn new(timeout: Duration, max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            timeout,
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.timeout(), config.max_attempts(), config.base_delay())
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }

    /// Returns the raw reply text unmodified.
    pub async fn invoke(&self, provider: &dyn AiProvider, payload: &PromptPayload) -> Result<Invocation<String>, InvocationFailure> {
        self.invoke_with(provider, payload, |raw| Ok(raw.to_string())).await
    }

    /// Like [`invoke`](Self::invoke), but every reply must also pass `accept`. A rejected reply
    /// counts as a failed attempt.
    pub async fn invoke_with<T, F>(
        &self,
        provider: &dyn AiProvider,
        payload: &PromptPayload,
        accept: F,
    ) -> Result<Invocation<T>, InvocationFailure>
    where
        F: Fn(&str) -> Result<T, AnalysisError>,
    {
        let mut attempt = 0;

        loop {
            attempt += 1;

            let outcome = self.attempt(provider, payload).await.and_then(|raw| accept(&raw));
            let error = match outcome {
                Ok(value) => {
                    log::debug!("✅ {} answered on attempt {}/{}", provider.name(), attempt, self.max_attempts);
                    return Ok(Invocation { value, attempts: attempt });
                }
                Err(error) => error,
            };

            if attempt >= self.max_attempts || !error.is_retryable() {
                log::error!("❌ {} failed after {} attempt(s): {}", provider.name(), attempt, error);
                return Err(InvocationFailure { error, attempts: attempt });
            }

            let delay = self.backoff_for(attempt);
            log::warn!(
                "⚠️  Attempt {}/{} against {} failed: {}. Retrying in {}ms",
                attempt,
                self.max_attempts,
                provider.name(),
                error,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }
    }

    async fn attempt(&self, provider: &dyn AiProvider, payload: &PromptPayload) -> Result<String, AnalysisError> {
        provider.ready().await;

        match tokio::time::timeout(self.timeout, provider.chat(payload)).await {
            Err(_) => Err(AnalysisError::Timeout(self.timeout)),
            Ok(Err(error)) => Err(error.into()),
            Ok(Ok(raw)) if raw.trim().is_empty() => Err(AnalysisError::Transport("empty response body".to_string())),
            Ok(Ok(raw)) => Ok(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::services::prompt_builder::PromptBuilder;
    use crate::traits::ai_provider::MockAiProvider;

    fn invoker(max_attempts: u32) -> BoundedInvoker {
        BoundedInvoker::new(Duration::from_millis(200), max_attempts, Duration::from_millis(5))
    }

    fn mock() -> MockAiProvider {
        let mut provider = MockAiProvider::new();
        provider.expect_name().returning(|| "mock".to_string());
        provider.expect_ready().returning(|| ());
        provider
    }

    #[tokio::test]
    async fn returns_raw_text_on_first_success() {
        let mut provider = mock();
        provider.expect_chat().times(1).returning(|_| Ok("  raw reply  ".to_string()));

        let invocation = invoker(3).invoke(&provider, &PromptBuilder::build("log")).await.unwrap();
        assert_eq!(invocation.value, "  raw reply  ");
        assert_eq!(invocation.attempts, 1);
    }

    #[tokio::test]
    async fn retries_transport_errors_until_exhausted() {
        let mut provider = mock();
        provider
            .expect_chat()
            .times(3)
            .returning(|_| Err(AiProviderError::NetworkError("connection refused".to_string())));

        let failure = invoker(3).invoke(&provider, &PromptBuilder::build("log")).await.unwrap_err();
        assert_eq!(failure.attempts, 3);
        assert!(matches!(failure.error, AnalysisError::Transport(ref reason) if reason.contains("connection refused")));
    }

    #[tokio::test]
    async fn recovers_after_a_failure() {
        let mut provider = mock();
        let mut calls = 0;
        provider.expect_chat().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(AiProviderError::ApiError("HTTP 503: overloaded".to_string()))
            } else {
                Ok("ok".to_string())
            }
        });

        let invocation = invoker(3).invoke(&provider, &PromptBuilder::build("log")).await.unwrap();
        assert_eq!(invocation.attempts, 2);
    }

    #[tokio::test]
    async fn empty_reply_is_a_failed_attempt() {
        let mut provider = mock();
        provider.expect_chat().times(2).returning(|_| Ok("   ".to_string()));

        let failure = invoker(2).invoke(&provider, &PromptBuilder::build("log")).await.unwrap_err();
        assert_eq!(failure.attempts, 2);
        assert!(matches!(failure.error, AnalysisError::Transport(_)));
    }

    #[tokio::test]
    async fn rejected_replies_are_retried() {
        let mut provider = mock();
        provider.expect_chat().times(2).returning(|_| Ok("not json".to_string()));

        let failure = invoker(2)
            .invoke_with(&provider, &PromptBuilder::build("log"), |_| {
                Err::<(), _>(AnalysisError::MalformedResponse("no JSON object found".to_string()))
            })
            .await
            .unwrap_err();

        assert_eq!(failure.attempts, 2);
        assert!(matches!(failure.error, AnalysisError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn zero_attempts_still_calls_once() {
        let mut provider = mock();
        provider.expect_chat().times(1).returning(|_| Err(AiProviderError::AuthenticationError("bad key".to_string())));

        let failure = invoker(0).invoke(&provider, &PromptBuilder::build("log")).await.unwrap_err();
        assert_eq!(failure.attempts, 1);
    }

    #[tokio::test]
    async fn waits_for_ready_before_each_call() {
        let mut provider = MockAiProvider::new();
        let mut seq = mockall::Sequence::new();
        provider.expect_name().returning(|| "mock".to_string());
        for reply in [Err(AiProviderError::NetworkError("down".to_string())), Ok("ok".to_string())] {
            provider.expect_ready().times(1).in_sequence(&mut seq).returning(|| ());
            provider.expect_chat().times(1).in_sequence(&mut seq).return_once(move |_| reply);
        }

        let invocation = invoker(3).invoke(&provider, &PromptBuilder::build("log")).await.unwrap();
        assert_eq!(invocation.attempts, 2);
    }

    #[tokio::test]
    async fn backoff_grows_with_attempt_number() {
        let invoker = BoundedInvoker::new(Duration::from_millis(100), 3, Duration::from_millis(20));
        assert_eq!(invoker.backoff_for(1), Duration::from_millis(20));
        assert_eq!(invoker.backoff_for(2), Duration::from_millis(40));

        let mut provider = mock();
        provider.expect_chat().times(3).returning(|_| Err(AiProviderError::NetworkError("down".to_string())));

        let started = Instant::now();
        let _ = invoker.invoke(&provider, &PromptBuilder::build("log")).await;
        assert!(started.elapsed() >= Duration::from_millis(60));
    }
}
