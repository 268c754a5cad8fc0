//! HTTP transport for the Gameball API.
//!
//! The facade talks to the network through the object-safe [`Transport`]
//! trait, so tests can substitute a scripted transport. [`HttpTransport`] is
//! the reqwest-backed production implementation.

use crate::error::GameballError;
use crate::request::{Method, RequestDescriptor};
use async_trait::async_trait;
use serde_json::Value;

/// A completed HTTP exchange: status line plus parsed JSON body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub reason: String,
    pub body: Value,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Surface a non-2xx status as a [`GameballError::Server`].
    pub fn into_result(self) -> Result<Value, GameballError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(GameballError::Server {
                status: self.status,
                reason: self.reason,
            })
        }
    }
}

/// One-shot HTTP capability: send a request, get status plus JSON back.
///
/// Implementations perform a single attempt with no retries; failure policy
/// belongs to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RequestDescriptor) -> Result<TransportResponse, GameballError>;
}

/// Production transport built on reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a 10-second request timeout.
    pub fn new() -> Result<Self, GameballError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| GameballError::Other(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RequestDescriptor) -> Result<TransportResponse, GameballError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GameballError::Network(e.to_string()))?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
        let text = response
            .text()
            .await
            .map_err(|e| GameballError::Network(e.to_string()))?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => value,
                // Error pages are often not JSON; keep the raw text so the
                // status mapping can still happen upstream.
                Err(e) if status.is_success() => {
                    return Err(GameballError::Serialization(e.to_string()))
                }
                Err(_) => Value::String(text),
            }
        };

        Ok(TransportResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
