//! HTTP client for the spreadsheet web API.

use crate::{MutationOutcome, MutationRequest, RemoteStore};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use taskboard_core::{Collection, StoreError};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SheetsClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn parse_response(&self, response: reqwest::Response) -> Result<Value, StoreError> {
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        if !status.is_success() {
            return Err(StoreError::Http {
                status: status.as_u16(),
                body,
            });
        }
        let value: Value = serde_json::from_str(&body).map_err(|e| StoreError::Decode {
            reason: e.to_string(),
        })?;
        if let Some(message) = application_error(&value) {
            return Err(StoreError::Application { message });
        }
        Ok(value)
    }
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Transport {
        reason: err.to_string(),
    }
}

/// The `error` field of a store reply, if it carries one.
fn application_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl RemoteStore for SheetsClient {
    async fn fetch_rows(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        debug!(sheet = collection.sheet_name(), "fetching sheet");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("sheet", collection.sheet_name())])
            .send()
            .await
            .map_err(transport)?;
        match self.parse_response(response).await? {
            Value::Array(rows) => Ok(rows),
            other => Err(StoreError::Decode {
                reason: format!("expected a JSON array of rows, got {}", kind_of(&other)),
            }),
        }
    }

    async fn apply(&self, request: &MutationRequest) -> MutationOutcome {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        self.parse_response(response).await
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_application_error_field() {
        assert_eq!(
            application_error(&json!({"error": "Sheet not found"})),
            Some("Sheet not found".to_string())
        );
        assert_eq!(
            application_error(&json!({"error": {"code": 3}})),
            Some("{\"code\":3}".to_string())
        );
        assert_eq!(application_error(&json!({"status": "success"})), None);
        assert_eq!(application_error(&json!({"error": null})), None);
        assert_eq!(application_error(&json!([1, 2])), None);
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = SheetsClient::new("https://script.example.com/exec", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), "https://script.example.com/exec");
    }

    #[test]
    fn test_kind_of_names_shape() {
        assert_eq!(kind_of(&json!({"a": 1})), "an object");
    }
}
