use std::sync::Arc;
use crate::enums::analysis_error::AnalysisError;
use crate::enums::analysis_source::AnalysisSource;
use crate::services::bounded_invoker::BoundedInvoker;
use crate::services::fallback_analyzer::FallbackAnalyzer;
use crate::services::preprocessor::Preprocessor;
use crate::services::prompt_builder::PromptBuilder;
use crate::services::response_parser::ResponseParser;
use crate::structs::analysis_outcome::AnalysisOutcome;
use crate::structs::config::pipeline_config::PipelineConfig;
use crate::traits::ai_provider::AiProvider;

/// Preprocess, ask the model, repair its answer, and fall back to a keyword scan when the
/// model cannot be reached or keeps answering garbage.
///
/// Holds no mutable state, so one analyzer can serve concurrent requests.
pub struct LogAnalyzer {
    provider: Arc<dyn AiProvider>,
    preprocessor: Preprocessor,
    invoker: BoundedInvoker,
}

impl LogAnalyzer {
    pub fn new(provider: Arc<dyn AiProvider>, config: PipelineConfig) -> Self {
        Self {
            provider,
            preprocessor: Preprocessor::new(config.max_chars),
            invoker: BoundedInvoker::from_config(&config),
        }
    }

    /// Fails only on empty input. Every other failure degrades to the fallback result.
    pub async fn analyze(&self, raw_log: &str) -> Result<AnalysisOutcome, AnalysisError> {
        let normalized = self.preprocessor.normalize(raw_log)?;
        let payload = PromptBuilder::build(&normalized);

        log::info!(
            "🤖 Sending {} normalized lines to {}",
            normalized.lines().count(),
            self.provider.name()
        );

        match self.invoker.invoke_with(self.provider.as_ref(), &payload, ResponseParser::parse).await {
            Ok(invocation) => Ok(AnalysisOutcome {
                result: invocation.value,
                source: AnalysisSource::Ai {
                    provider: self.provider.name(),
                },
                attempts: invocation.attempts,
            }),
            Err(failure) => {
                log::warn!(
                    "🛟 AI analysis unavailable after {} attempt(s), using keyword fallback: {}",
                    failure.attempts,
                    failure.error
                );
                Ok(AnalysisOutcome {
                    result: FallbackAnalyzer::analyze(&normalized),
                    source: AnalysisSource::Fallback {
                        reason: failure.error.to_string(),
                    },
                    attempts: failure.attempts,
                })
            }
        }
    }

    /// Keyword scan only, no provider call.
    pub fn analyze_offline(&self, raw_log: &str) -> Result<AnalysisOutcome, AnalysisError> {
        Self::offline(&self.preprocessor, raw_log)
    }

    pub fn analyze_offline_with(config: &PipelineConfig, raw_log: &str) -> Result<AnalysisOutcome, AnalysisError> {
        Self::offline(&Preprocessor::new(config.max_chars), raw_log)
    }

    fn offline(preprocessor: &Preprocessor, raw_log: &str) -> Result<AnalysisOutcome, AnalysisError> {
        let normalized = preprocessor.normalize(raw_log)?;

        Ok(AnalysisOutcome {
            result: FallbackAnalyzer::analyze(&normalized),
            source: AnalysisSource::Fallback {
                reason: "offline analysis requested".to_string(),
            },
            attempts: 0,
        })
    }
}
