//! Deterministic mock LLM client for flow tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{AiError, Result};

use super::{CompletionRequest, CompletionResponse, LlmClient};

/// Scripted completion step.
#[derive(Debug, Clone)]
pub enum MockStep {
    /// Return a plain assistant message.
    Text(String),
    /// Return an LLM error.
    Error(String),
}

impl MockStep {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

/// Mock client that replays a scripted queue of steps and records the
/// requests it received.
pub struct MockLlmClient {
    steps: Arc<Mutex<VecDeque<MockStep>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLlmClient {
    pub fn new(steps: Vec<MockStep>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shorthand for a client that answers every request with `content`.
    pub fn always(content: impl Into<String>) -> Self {
        Self::new(vec![MockStep::text(content)])
    }

    /// Requests observed so far, in order.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    fn provider(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.requests.lock().await.push(request);

        let step = {
            let mut steps = self.steps.lock().await;
            // The last step is sticky so `always` keeps answering.
            if steps.len() > 1 {
                steps.pop_front()
            } else {
                steps.front().cloned()
            }
        };

        match step {
            Some(MockStep::Text(content)) => Ok(CompletionResponse {
                content: Some(content),
                usage: None,
            }),
            Some(MockStep::Error(message)) => Err(AiError::Llm(message)),
            None => Err(AiError::Llm("Mock script exhausted".to_string())),
        }
    }
}
