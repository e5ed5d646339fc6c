//! Taskboard LLM - Generative Task Assistant
//!
//! Drafts tasks for a project and sub-task notes for a task by calling a
//! hosted text-generation API. [`CompletionTransport`] is the seam to the
//! HTTP provider; [`TaskAssistant`] adds the throttling retry loop and the
//! two request shapes the board uses.

pub mod mock;
pub mod providers;

pub use mock::ScriptedTransport;
pub use providers::gemini::{GenerateContentRequest, GenerateContentResponse};
pub use providers::GeminiClient;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use taskboard_core::{LlmError, Priority};
use tracing::{debug, warn};

const GENERATE_TASKS_PROMPT: &str = "You are a project management assistant. Based on the project name, generate a list of 3 to 5 high-level tasks to get started. Respond only with a valid JSON array of objects. Each object should have two keys: 'taskName' (a string) and 'priority' (a string which must be one of 'High', 'Medium', or 'Low'). Do not include any other text or markdown formatting.";

const SUGGEST_SUBTASKS_PROMPT: &str = "You are a helpful assistant. Provide a short list of sub-tasks or important notes for the given main task. Use bullet points (using '-') for the list. Keep the response concise and actionable.";

const TOO_MANY_REQUESTS: u16 = 429;

// ============================================================================
// TRANSPORT
// ============================================================================

/// Raw HTTP reply from a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one generation request. Implementations do not retry.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// Provider name for errors and logs.
    fn provider(&self) -> &str;

    async fn send(&self, request: &GenerateContentRequest) -> Result<TransportResponse, LlmError>;
}

// ============================================================================
// RETRY POLICY
// ============================================================================

/// Backoff for throttled requests.
///
/// Only HTTP 429 is retried. The first retry waits `initial_backoff`; each
/// later one waits `multiplier` times longer than the one before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(1000),
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = self.multiplier.saturating_pow(retry.saturating_sub(1));
        self.initial_backoff.saturating_mul(factor)
    }
}

// ============================================================================
// GENERATED TASKS
// ============================================================================

/// A task drafted by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTask {
    pub task_name: String,
    pub priority: Priority,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGeneratedTask {
    task_name: String,
    priority: String,
}

/// Parse the assistant's JSON text into tasks.
///
/// All or nothing: the text must be a non-empty array whose every item has
/// a non-blank `taskName` and a known `priority`.
pub fn parse_generated_tasks(provider: &str, text: &str) -> Result<Vec<GeneratedTask>, LlmError> {
    let invalid = |reason: String| LlmError::InvalidResponse {
        provider: provider.to_string(),
        reason,
    };

    let raw: Vec<RawGeneratedTask> =
        serde_json::from_str(text.trim()).map_err(|e| invalid(e.to_string()))?;
    if raw.is_empty() {
        return Err(invalid("no tasks in response".to_string()));
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, item)| {
            if item.task_name.trim().is_empty() {
                return Err(invalid(format!("task {} has a blank taskName", index)));
            }
            let priority = Priority::parse(&item.priority);
            if !priority.is_recognized() {
                return Err(invalid(format!(
                    "task {} has unknown priority '{}'",
                    index, item.priority
                )));
            }
            Ok(GeneratedTask {
                task_name: item.task_name.trim().to_string(),
                priority,
            })
        })
        .collect()
}

fn generated_tasks_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "taskName": {"type": "STRING"},
                "priority": {"type": "STRING", "enum": ["High", "Medium", "Low"]}
            },
            "required": ["taskName", "priority"]
        }
    })
}

// ============================================================================
// ASSISTANT
// ============================================================================

#[derive(Clone)]
pub struct TaskAssistant {
    transport: Arc<dyn CompletionTransport>,
    policy: RetryPolicy,
}

impl TaskAssistant {
    pub fn new(transport: Arc<dyn CompletionTransport>) -> Self {
        Self {
            transport,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn provider(&self) -> &str {
        self.transport.provider()
    }

    /// Send `request`, retrying throttled attempts with backoff.
    pub async fn complete(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let provider = self.transport.provider().to_string();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let response = self.transport.send(request).await?;

            if response.status == TOO_MANY_REQUESTS {
                if attempts > self.policy.max_retries {
                    return Err(LlmError::RetriesExhausted { provider, attempts });
                }
                let delay = self.policy.delay_for(attempts);
                warn!(
                    provider = %provider,
                    attempt = attempts,
                    "throttled, retrying in {}s",
                    delay.as_secs_f64()
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            if !response.is_success() {
                return Err(LlmError::RequestFailed {
                    provider,
                    status: response.status,
                    message: error_message(&response.body),
                });
            }

            debug!(provider = %provider, attempts, "generation request succeeded");
            return serde_json::from_str(&response.body).map_err(|e| LlmError::InvalidResponse {
                provider,
                reason: e.to_string(),
            });
        }
    }

    /// First candidate text of a successful completion.
    async fn complete_text(&self, request: &GenerateContentRequest) -> Result<String, LlmError> {
        let response = self.complete(request).await?;
        response
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| LlmError::EmptyResponse {
                provider: self.provider().to_string(),
            })
    }

    /// Draft three to five starter tasks for a project.
    pub async fn generate_tasks(&self, project_name: &str) -> Result<Vec<GeneratedTask>, LlmError> {
        let request = GenerateContentRequest::new(
            GENERATE_TASKS_PROMPT,
            format!("Project Name: \"{}\"", project_name),
        )
        .with_json_schema(generated_tasks_schema());
        let text = self.complete_text(&request).await?;
        parse_generated_tasks(self.provider(), &text)
    }

    /// Bullet-list notes for a task.
    pub async fn suggest_subtasks(&self, task_name: &str) -> Result<String, LlmError> {
        let request = GenerateContentRequest::new(
            SUGGEST_SUBTASKS_PROMPT,
            format!("Task: \"{}\"", task_name),
        );
        self.complete_text(&request).await
    }
}

impl std::fmt::Debug for TaskAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskAssistant")
            .field("provider", &self.transport.provider())
            .field("policy", &self.policy)
            .finish()
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<providers::gemini::types::ApiError>(body) {
        Ok(api_error) if !api_error.error.message.is_empty() => api_error.error.message,
        _ => body.to_string(),
    }
}
