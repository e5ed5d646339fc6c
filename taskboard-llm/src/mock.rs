//! Scripted transport for tests.

use crate::{CompletionTransport, GenerateContentRequest, TransportResponse};
use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use taskboard_core::LlmError;
use tokio::time::Instant;

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<Result<TransportResponse, LlmError>>,
    requests: Vec<GenerateContentRequest>,
    sent_at: Vec<Instant>,
}

/// A [`CompletionTransport`] that plays back queued replies in order.
///
/// Once the queue is empty every call fails with a 500. Each request is
/// recorded with the (tokio) time it was sent.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

fn lock(script: &Mutex<Script>) -> MutexGuard<'_, Script> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw HTTP replies.
    pub fn with_statuses(self, replies: impl IntoIterator<Item = (u16, String)>) -> Self {
        for (status, body) in replies {
            self.push(TransportResponse::new(status, body));
        }
        self
    }

    pub fn push(&self, response: TransportResponse) {
        lock(&self.script).replies.push_back(Ok(response));
    }

    pub fn push_error(&self, error: LlmError) {
        lock(&self.script).replies.push_back(Err(error));
    }

    /// Queue a 200 whose first candidate carries `text`.
    pub fn push_text(&self, text: &str) {
        let body = json!({"candidates": [{"content": {"parts": [{"text": text}]}}]});
        self.push(TransportResponse::new(200, body.to_string()));
    }

    pub fn push_throttle(&self) {
        self.push(TransportResponse::new(429, "Resource has been exhausted"));
    }

    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        lock(&self.script).requests.clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.script).requests.len()
    }

    /// Times each request was sent, in order.
    pub fn sent_at(&self) -> Vec<Instant> {
        lock(&self.script).sent_at.clone()
    }
}

#[async_trait]
impl CompletionTransport for ScriptedTransport {
    fn provider(&self) -> &str {
        "scripted"
    }

    async fn send(&self, request: &GenerateContentRequest) -> Result<TransportResponse, LlmError> {
        let mut script = lock(&self.script);
        script.requests.push(request.clone());
        script.sent_at.push(Instant::now());
        script
            .replies
            .pop_front()
            .unwrap_or_else(|| Ok(TransportResponse::new(500, "script exhausted")))
    }
}
