//! Common test utilities and fixtures for integration tests
//!
//! Contains an in-process HTTP/1.1 responder that records every request and
//! replays one canned response.

#![allow(dead_code)]

use hitbtc_rest::{ClientConfig, Credentials, HitbtcRestClient};
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Dummy API key values for use in tests
pub const API_KEY: &str = "fakeapikey";
pub const API_SECRET: &str = "fakeapisecret";

/// `Authorization` header the dummy credentials produce
pub const EXPECTED_AUTH: &str = "Basic ZmFrZWFwaWtleTpmYWtlYXBpc2VjcmV0";

/// Path prefix the mock server is mounted under
pub const API_PREFIX: &str = "/api/2/";

pub const MOCK_ITEMS: &str = r#"{"key1":"val1","key2":"val2"}"#;
pub const MOCK_COLLECTION: &str = r#"[{"key1":"val1","key2":"val2"},{"key1":"val1","key2":"val2"}]"#;

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Path without the query string
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or("")
    }

    /// Path relative to the API prefix
    pub fn api_path(&self) -> &str {
        self.path().strip_prefix(API_PREFIX).unwrap_or(self.path())
    }

    /// Raw query string, if any
    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, q)| q)
    }
}

/// Canned response replayed for every request
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl MockResponse {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.into(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/plain".to_string()),
            body: body.into(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            body: String::new(),
        }
    }

    fn to_http(&self) -> String {
        let reason = StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("");

        let mut out = format!("HTTP/1.1 {} {}\r\n", self.status, reason);
        if let Some(ct) = &self.content_type {
            out.push_str(&format!("Content-Type: {}\r\n", ct));
        }
        out.push_str(&format!("Content-Length: {}\r\n", self.body.len()));
        out.push_str("Connection: close\r\n\r\n");
        out.push_str(&self.body);
        out
    }
}

/// Local HTTP server answering every request with the same response
pub struct MockServer {
    base_uri: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: JoinHandle<()>,
}

impl MockServer {
    /// Bind to an ephemeral port and start serving
    pub async fn start(response: MockResponse) -> Self {
        init_tracing();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("No local address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let task = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let recorded = Arc::clone(&recorded);
                let response = response.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, &response, &recorded).await;
                });
            }
        });

        Self {
            base_uri: format!("http://{}{}", addr, API_PREFIX),
            requests,
            task,
        }
    }

    /// Base URI to point a client at
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Client using the dummy credentials against this server
    pub fn client(&self) -> HitbtcRestClient {
        let creds = Credentials::new(API_KEY, API_SECRET).expect("Valid credentials");
        let config = ClientConfig::new().with_base_uri(self.base_uri.clone());
        HitbtcRestClient::with_config(creds, config).expect("Failed to build client")
    }

    /// All requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("Poisoned").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("Poisoned").len()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("Mock server received no requests")
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(
    mut stream: TcpStream,
    response: &MockResponse,
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> std::io::Result<()> {
    if let Some(request) = read_request(&mut stream).await? {
        recorded.lock().expect("Poisoned").push(request);
        stream.write_all(response.to_http().as_bytes()).await?;
    }
    stream.shutdown().await
}

async fn read_request(stream: &mut TcpStream) -> std::io::Result<Option<RecordedRequest>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(None);
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("").to_string();
    let target = request_line.next().unwrap_or("").to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Ok(Some(RecordedRequest {
        method,
        target,
        headers,
        body: String::from_utf8_lossy(&body).to_string(),
    }))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serialization() {
        let http = MockResponse::json(404, "{}").to_http();
        assert!(http.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(http.contains("Content-Type: application/json\r\n"));
        assert!(http.ends_with("\r\n\r\n{}"));
    }

    #[test]
    fn test_recorded_request_accessors() {
        let request = RecordedRequest {
            method: "GET".to_string(),
            target: "/api/2/public/trades/foo?limit=1".to_string(),
            headers: vec![("authorization".to_string(), EXPECTED_AUTH.to_string())],
            body: String::new(),
        };
        assert_eq!(request.api_path(), "public/trades/foo");
        assert_eq!(request.query(), Some("limit=1"));
        assert_eq!(request.header("Authorization"), Some(EXPECTED_AUTH));
    }
}
