//! Retry timing and request shape tests for the task assistant.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use taskboard_core::{LlmError, Priority};
use taskboard_llm::{ScriptedTransport, TaskAssistant};

fn assistant(transport: &ScriptedTransport) -> TaskAssistant {
    TaskAssistant::new(Arc::new(transport.clone()))
}

#[tokio::test(start_paused = true)]
async fn throttled_twice_then_succeeds_after_two_delays() {
    let transport = ScriptedTransport::new();
    transport.push_throttle();
    transport.push_throttle();
    transport.push_text("- gather requirements");

    let text = assistant(&transport)
        .suggest_subtasks("Launch site")
        .await
        .unwrap();

    assert_eq!(text, "- gather requirements");
    assert_eq!(transport.request_count(), 3);
    let sent = transport.sent_at();
    assert_eq!(sent[1] - sent[0], Duration::from_millis(1000));
    assert_eq!(sent[2] - sent[1], Duration::from_millis(2000));
}

#[tokio::test(start_paused = true)]
async fn fourth_throttle_exhausts_retries() {
    let transport = ScriptedTransport::new();
    for _ in 0..4 {
        transport.push_throttle();
    }
    transport.push_text("never reached");

    let err = assistant(&transport)
        .suggest_subtasks("Launch site")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LlmError::RetriesExhausted {
            provider: "scripted".to_string(),
            attempts: 4
        }
    );
    assert_eq!(transport.request_count(), 4);
    let sent = transport.sent_at();
    assert_eq!(sent[3] - sent[2], Duration::from_millis(4000));
}

#[tokio::test(start_paused = true)]
async fn other_errors_are_not_retried() {
    let transport = ScriptedTransport::new();
    transport.push(taskboard_llm::TransportResponse::new(
        400,
        json!({"error": {"message": "API key not valid"}}).to_string(),
    ));

    let err = assistant(&transport)
        .suggest_subtasks("x")
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::RequestFailed { status: 400, ref message, .. } if message == "API key not valid"));
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn transport_errors_are_not_retried() {
    let transport = ScriptedTransport::new();
    transport.push_error(LlmError::ProviderNotConfigured);
    transport.push_text("unused");

    let err = assistant(&transport).generate_tasks("Apollo").await.unwrap_err();
    assert_eq!(err, LlmError::ProviderNotConfigured);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn empty_candidate_text_is_an_error() {
    let transport = ScriptedTransport::new();
    transport.push_text("");
    let err = assistant(&transport).suggest_subtasks("x").await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse { .. }));
}

#[tokio::test]
async fn generate_tasks_sends_schema_and_parses_reply() {
    let transport = ScriptedTransport::new();
    transport.push_text(
        &json!([
            {"taskName": "Define scope", "priority": "High"},
            {"taskName": "Draft timeline", "priority": "Medium"},
            {"taskName": "Book kickoff", "priority": "Low"}
        ])
        .to_string(),
    );

    let tasks = assistant(&transport).generate_tasks("Apollo").await.unwrap();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].task_name, "Define scope");
    assert_eq!(tasks[2].priority, Priority::Low);

    let request = serde_json::to_value(&transport.requests()[0]).unwrap();
    assert_eq!(request["contents"][0]["parts"][0]["text"], json!("Project Name: \"Apollo\""));
    assert_eq!(request["generationConfig"]["responseMimeType"], json!("application/json"));
    assert_eq!(
        request["generationConfig"]["responseSchema"]["items"]["required"],
        json!(["taskName", "priority"])
    );
}

#[tokio::test]
async fn suggest_subtasks_has_no_schema() {
    let transport = ScriptedTransport::new();
    transport.push_text("- one");
    assistant(&transport).suggest_subtasks("Write brief").await.unwrap();
    let request = serde_json::to_value(&transport.requests()[0]).unwrap();
    assert_eq!(request["contents"][0]["parts"][0]["text"], json!("Task: \"Write brief\""));
    assert!(request.get("generationConfig").is_none());
}
