//! Trait abstraction for the platform API to enable mocking in tests

use crate::error::RemoteFailure;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP verbs the admin console issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// Authenticated request/response access to the platform API.
///
/// Implementations resolve `path` against their base URL and attach the
/// session credential themselves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteMutationClient: Send + Sync {
    /// Issue a request and return the decoded JSON body (`Null` when empty)
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, RemoteFailure>;
}

/// GET `path` and decode the body into `T`
pub async fn get_json<T: DeserializeOwned>(
    client: &dyn RemoteMutationClient,
    path: &str,
) -> Result<T, RemoteFailure> {
    let value = client.request(Method::Get, path, None).await?;
    serde_json::from_value(value)
        .map_err(|e| RemoteFailure::new(format!("Malformed response from {path}: {e}")))
}
