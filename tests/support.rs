use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use async_trait::async_trait;
use logtriage::enums::ai_provider_error::AiProviderError;
use logtriage::structs::config::pipeline_config::PipelineConfig;
use logtriage::structs::prompt_payload::PromptPayload;
use logtriage::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub enum Reply {
    Text(String),
    Fail(AiProviderError),
    Hang,
}

/// Plays back replies in order, repeating the last one once the script runs out.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Reply>>,
    last: Mutex<Option<Reply>>,
    calls: AtomicU32,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            last: Mutex::new(None),
            calls: AtomicU32::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: Reply) -> Self {
        Self::new(vec![reply])
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn next_reply(&self) -> Reply {
        let mut last = self.last.lock().unwrap();
        if let Some(reply) = self.replies.lock().unwrap().pop_front() {
            *last = Some(reply);
        }
        (*last).clone().unwrap_or(Reply::Hang)
    }
}

#[async_trait]
impl AiProvider for ScriptedProvider {
    fn name(&self) -> String {
        "scripted".to_string()
    }

    async fn chat(&self, payload: &PromptPayload) -> Result<String, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(payload.user_content.clone());

        match self.next_reply() {
            Reply::Text(text) => Ok(text),
            Reply::Fail(error) => Err(error),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok("too late".to_string())
            }
        }
    }
}

pub fn fast_pipeline(max_retries: u32) -> PipelineConfig {
    PipelineConfig {
        max_chars: 10_000,
        timeout_ms: 50,
        max_retries,
        base_delay_ms: 1,
    }
}
