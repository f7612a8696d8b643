//! Response classification
//!
//! A 200 response decodes to the JSON value it carries. Anything else
//! becomes an [`ApiError`] whose kind comes from the status table.

use crate::error::{ApiError, RestError, RestResult};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// A completed HTTP response, detached from the transport
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status
    pub status: StatusCode,
    /// `Content-Type` header, if any
    pub content_type: Option<String>,
    /// Response body
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Read status, content type and body from a transport response
    pub async fn read(response: reqwest::Response) -> RestResult<Self> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(Self {
            status,
            content_type,
            body,
        })
    }

    /// Reason phrase for the status, empty if the code has none
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// Check if the content type announces JSON
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.contains("json"))
            .unwrap_or(false)
    }
}

/// Structured error body: `{"error": {"message": ..., "description": ...}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorPayload>,
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    code: Option<Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Classify a completed response
///
/// Returns the decoded JSON on 200 and an error otherwise.
pub fn classify(response: &RawResponse) -> RestResult<Value> {
    if response.status == StatusCode::OK {
        return serde_json::from_slice(&response.body).map_err(|e| RestError::Decode(e.to_string()));
    }

    Err(api_error(response).into())
}

/// Build the typed error for a non-200 response
pub fn api_error(response: &RawResponse) -> ApiError {
    let status = response.status.as_u16();
    let mut message = response.reason().to_string();
    let mut description = String::new();

    if response.is_json() {
        match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
            Ok(ErrorEnvelope {
                error: Some(payload),
            }) => {
                debug!(status, code = ?payload.code, "API returned structured error");
                message = payload.message.unwrap_or_default();
                description = payload.description.unwrap_or_default();
            }
            Ok(_) => {}
            Err(e) => debug!(status, error = %e, "Undecodable JSON error body"),
        }
    }

    ApiError::new(status, message, description)
}
