//! Backend request executor.
//!
//! Performs exactly one HTTP call per invocation. The `reqwest::Client` is
//! built inside `execute` and dropped on every exit path, so no connection
//! state outlives a single call and credential headers are re-derived from
//! the configuration on each invocation.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::BackendConfig;

use super::outcome::{InvocationResult, Payload};
use super::request::OutboundRequest;

/// Fixed per-call timeout. A call that exceeds it resolves as a transport
/// error; nothing is retried.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Non-standard credential header expected by the petstore backend.
const API_KEY_HEADER: HeaderName = HeaderName::from_static("api_key");

/// Executor for outbound petstore calls.
#[derive(Debug, Clone)]
pub struct BackendClient {
    backend: BackendConfig,
}

impl BackendClient {
    /// Create an executor bound to the given backend configuration.
    pub fn new(backend: BackendConfig) -> Self {
        Self { backend }
    }

    /// Headers attached to every outbound call.
    ///
    /// Content negotiation is always JSON. The credential pair (`api_key` +
    /// bearer Authorization) is attached only when a non-empty key is
    /// configured - an empty credential must not produce empty headers.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if !self.backend.api_key.is_empty() {
            match HeaderValue::from_str(&self.backend.api_key) {
                Ok(value) => {
                    headers.insert(API_KEY_HEADER, value);
                }
                Err(_) => warn!("API key contains characters invalid in a header; skipping"),
            }
            match HeaderValue::from_str(&format!("Bearer {}", self.backend.api_key)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("API key not usable as bearer token; skipping"),
            }
        }

        headers
    }

    /// Perform one backend call and collapse every possible outcome into an
    /// `InvocationResult`. No error escapes this method.
    pub async fn execute(&self, request: OutboundRequest) -> InvocationResult {
        let client = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
            Ok(client) => client,
            Err(e) => return InvocationResult::transport(e.to_string()),
        };

        let url = format!("{}{}", self.backend.base_url, request.path);
        debug!(method = %request.method, %url, "calling petstore backend");

        let mut call = client
            .request(request.method.clone(), &url)
            .headers(self.headers());
        if !request.query.is_empty() {
            call = call.query(&request.query);
        }
        if let Some(body) = &request.body {
            call = call.json(body);
        }

        let response = match call.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "backend call failed");
                return InvocationResult::transport(e.to_string());
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(%url, error = %e, "failed to read backend response body");
                return InvocationResult::transport(e.to_string());
            }
        };

        if status.is_success() {
            match serde_json::from_str::<Value>(&text) {
                Ok(value) => InvocationResult::Success(Payload::Json(value)),
                Err(_) => InvocationResult::Success(Payload::Text(text)),
            }
        } else {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            InvocationResult::RemoteError {
                message: format!("{} {} for url {}", status.as_u16(), reason, url),
                status: status.as_u16(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, api_key: &str) -> BackendClient {
        BackendClient::new(BackendConfig {
            base_url: server.uri(),
            api_key: api_key.to_string(),
        })
    }

    #[tokio::test]
    async fn test_json_success_passthrough() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pet/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "Rex"})))
            .mount(&server)
            .await;

        let result = client_for(&server, "")
            .execute(OutboundRequest::get("/pet/1"))
            .await;
        assert_eq!(
            result,
            InvocationResult::Success(Payload::Json(json!({"id": 1, "name": "Rex"})))
        );
    }

    #[tokio::test]
    async fn test_non_json_success_is_raw_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/store/inventory"))
            .respond_with(ResponseTemplate::new(200).set_body_string("plain response"))
            .mount(&server)
            .await;

        let result = client_for(&server, "")
            .execute(OutboundRequest::get("/store/inventory"))
            .await;
        assert_eq!(
            result,
            InvocationResult::Success(Payload::Text("plain response".to_string()))
        );
    }

    #[tokio::test]
    async fn test_http_error_becomes_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pet/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client_for(&server, "")
            .execute(OutboundRequest::get("/pet/99"))
            .await;
        match result {
            InvocationResult::RemoteError { message, status } => {
                assert_eq!(status, 404);
                assert!(message.contains("404"));
                assert!(message.contains("/pet/99"));
            }
            other => panic!("expected RemoteError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_credential_headers_sent_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/store/inventory"))
            .and(header("api_key", "special-key"))
            .and(header("authorization", "Bearer special-key"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server, "special-key")
            .execute(OutboundRequest::get("/store/inventory"))
            .await;
        assert!(!result.is_error());
    }

    #[tokio::test]
    async fn test_credential_headers_omitted_when_unconfigured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/store/inventory"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        client_for(&server, "")
            .execute(OutboundRequest::get("/store/inventory"))
            .await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("api_key").is_none());
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_header_presence_follows_config_per_call() {
        // Two clients over the same backend, differing only in credential.
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/store/inventory"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        client_for(&server, "k1")
            .execute(OutboundRequest::get("/store/inventory"))
            .await;
        client_for(&server, "")
            .execute(OutboundRequest::get("/store/inventory"))
            .await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].headers.get("api_key").unwrap(), "k1");
        assert!(requests[1].headers.get("api_key").is_none());
    }

    #[tokio::test]
    async fn test_no_body_sent_when_body_absent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pet/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        client_for(&server, "")
            .execute(OutboundRequest::post("/pet/1"))
            .await;

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_query_parameters_attached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pet/findByStatus"))
            .and(query_param("status", "available"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server, "")
            .execute(OutboundRequest::get("/pet/findByStatus").with_query("status", "available"))
            .await;
        assert!(!result.is_error());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let client = BackendClient::new(BackendConfig {
            // Port 1 is never listening; connection is refused immediately.
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: String::new(),
        });

        let result = client.execute(OutboundRequest::get("/pet/1")).await;
        assert!(matches!(result, InvocationResult::TransportError { .. }));
    }
}
