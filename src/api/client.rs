//! HTTP client for the storefront platform API
//!
//! Wraps a `reqwest::Client` bound to one base URL. Every failure mode is
//! normalized into [`RemoteFailure`] so callers only ever see success or an
//! opaque reason.

use super::traits::{Method, RemoteMutationClient};
use crate::error::RemoteFailure;
use crate::state::SessionContext;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Client for the platform's JSON API
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionContext>,
}

impl HttpClient {
    /// Create a client for `base_url`; credentials are read from `session` per request
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        session: Arc<dyn SessionContext>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl RemoteMutationClient for HttpClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, RemoteFailure> {
        let url = self.url(path);
        tracing::debug!("{} {}", method.as_str(), url);

        let mut builder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
        };
        if let Some(token) = self.session.credential() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RemoteFailure::new(format!("Request to {path} failed: {e}")))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RemoteFailure::new(format!("Failed to read response from {path}: {e}")))?;

        if !status.is_success() {
            return Err(RemoteFailure::new(error_reason(status, &bytes)));
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| RemoteFailure::new(format!("Malformed response from {path}: {e}")))
    }
}

/// Pull a human-readable reason out of an error response.
///
/// Servers usually answer `{"message": ...}` or `{"error": ...}`; anything else
/// falls back to the status line.
fn error_reason(status: StatusCode, body: &[u8]) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(Value::String(message)) = map.get(key) {
                if !message.is_empty() {
                    return message.clone();
                }
            }
        }
    }
    format!("Server returned {status}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Role, StaticSession, User};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session_with_token(token: Option<&str>) -> Arc<dyn SessionContext> {
        let user = User {
            id: "u-1".to_string(),
            username: "dev".to_string(),
            email: "dev@example.com".to_string(),
            role: Role::Developer,
        };
        Arc::new(StaticSession::new(Some(user), token.map(str::to_string)))
    }

    fn client_for(server: &MockServer, token: Option<&str>) -> HttpClient {
        HttpClient::new(
            format!("{}/api/", server.uri()),
            Duration::from_secs(5),
            session_with_token(token),
        )
        .unwrap()
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpClient::new(
            "http://localhost:3000/api/",
            Duration::from_secs(1),
            session_with_token(None),
        )
        .unwrap();
        assert_eq!(client.url("/admins"), "http://localhost:3000/api/admins");
        assert_eq!(client.url("admins"), "http://localhost:3000/api/admins");
        assert_eq!(client.base_url(), "http://localhost:3000/api/");
    }

    #[test]
    fn test_error_reason_prefers_message_field() {
        let reason = error_reason(StatusCode::BAD_REQUEST, br#"{"message":"Email taken"}"#);
        assert_eq!(reason, "Email taken");
    }

    #[test]
    fn test_error_reason_accepts_error_field() {
        let reason = error_reason(StatusCode::FORBIDDEN, br#"{"error":"Forbidden"}"#);
        assert_eq!(reason, "Forbidden");
    }

    #[test]
    fn test_error_reason_falls_back_to_status() {
        let reason = error_reason(StatusCode::BAD_GATEWAY, b"<html>oops</html>");
        assert_eq!(reason, "Server returned 502 Bad Gateway");
    }

    #[tokio::test]
    async fn test_post_sends_json_body_and_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admins"))
            .and(header("authorization", "Bearer secret"))
            .and(body_json(json!({ "name": "Ada" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "a-1" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("secret"));
        let value = client
            .request(Method::Post, "/admins", Some(json!({ "name": "Ada" })))
            .await
            .unwrap();
        assert_eq!(value, json!({ "id": "a-1" }));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/users/profile"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let value = client
            .request(Method::Put, "/users/profile", Some(json!({})))
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_non_success_status_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/platform-stats"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "message": "database down" })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .request(Method::Get, "/platform-stats", None)
            .await
            .unwrap_err();
        assert_eq!(err.reason, "database down");
    }

    #[tokio::test]
    async fn test_malformed_body_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/system/maintenance"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .request(Method::Get, "/system/maintenance", None)
            .await
            .unwrap_err();
        assert!(err.reason.starts_with("Malformed response from /system/maintenance"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_failure() {
        // Reserve a free port, then release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = HttpClient::new(
            format!("http://127.0.0.1:{port}/api"),
            Duration::from_secs(2),
            session_with_token(None),
        )
        .unwrap();
        let err = client.request(Method::Get, "/platform-stats", None).await.unwrap_err();
        assert!(err.reason.starts_with("Request to /platform-stats failed"));
    }
}
