//! Gemini HTTP client

use super::types::GenerateContentRequest;
use crate::{CompletionTransport, TransportResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use taskboard_core::LlmError;

pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-05-20:generateContent";

const PROVIDER: &str = "gemini";

/// Gemini API client. The key travels as the `key` query parameter.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Transport {
                provider: PROVIDER.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl CompletionTransport for GeminiClient {
    fn provider(&self) -> &str {
        PROVIDER
    }

    async fn send(&self, request: &GenerateContentRequest) -> Result<TransportResponse, LlmError> {
        let key = self.api_key.as_deref().ok_or(LlmError::ProviderNotConfigured)?;
        let transport = |e: reqwest::Error| LlmError::Transport {
            provider: PROVIDER.to_string(),
            reason: e.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", key)])
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        Ok(TransportResponse { status, body })
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let client = GeminiClient::new("http://127.0.0.1:9/unused", Some("  ".to_string()), Duration::from_secs(1)).unwrap();
        assert!(!client.is_configured());
        let err = client
            .send(&GenerateContentRequest::new("s", "u"))
            .await
            .unwrap_err();
        assert_eq!(err, LlmError::ProviderNotConfigured);
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = GeminiClient::new(DEFAULT_ENDPOINT, Some("secret-key".to_string()), Duration::from_secs(1)).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("REDACTED"));
    }
}
