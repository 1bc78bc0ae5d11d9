//! HTTP client for the contact directory service.
//!
//! This module provides a synchronous client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles
//! authentication, error mapping, and the directory's response envelope.

use crate::config::Config;
use crate::error::{DirectoryApiError, DirectoryApiResult};
use crate::models::{ContactPayload, ContactRecord};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Response envelope of the directory's contacts endpoint.
///
/// The service reports application-level failure through `success: false`
/// with an optional message, independent of the HTTP status.
#[derive(Debug, Deserialize)]
pub struct ContactsEnvelope {
    /// Whether the directory fulfilled the request
    pub success: bool,

    /// The contact payloads for the tenant
    #[serde(default)]
    pub data: Vec<ContactPayload>,

    /// Human-readable failure description when `success` is false
    #[serde(default)]
    pub message: Option<String>,
}

/// HTTP client for the contact directory service.
///
/// Uses `ureq` for synchronous requests; async callers go through
/// [`crate::repositories::HttpContactDirectory`].
#[derive(Clone)]
pub struct DirectoryClient {
    /// Base URL for the directory API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl DirectoryClient {
    /// Create a new DirectoryClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.directory_api_url.clone(),
            api_key: config.directory_api_key.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a DirectoryClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, DirectoryApiError> {
        let url = self.build_url(path);

        self.agent
            .get(&url)
            .set("x-directory-api-key", &self.api_key)
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e))
    }

    /// Map a ureq error to a DirectoryApiError.
    fn map_error(&self, error: ureq::Error) -> DirectoryApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => DirectoryApiError::Unauthorized,
                    _ => DirectoryApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    DirectoryApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    DirectoryApiError::Timeout
                } else {
                    DirectoryApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Fetch the full contact snapshot for a tenant.
    ///
    /// Payloads that fail record validation are excluded individually with a
    /// warning; one bad record never blanks the load. A `success: false`
    /// envelope maps to [`DirectoryApiError::ServiceFailure`] and the caller
    /// keeps whatever snapshot it already holds.
    pub fn get_contacts(&self, tenant_id: &str) -> DirectoryApiResult<Vec<ContactRecord>> {
        let path = format!("/contacts?tenant_id={}", urlencoding::encode(tenant_id));
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| DirectoryApiError::HttpError(e.to_string()))?;

        let envelope: ContactsEnvelope =
            serde_json::from_str(&body).map_err(DirectoryApiError::JsonError)?;

        if !envelope.success {
            return Err(DirectoryApiError::ServiceFailure(
                envelope
                    .message
                    .unwrap_or_else(|| "no failure detail provided".to_string()),
            ));
        }

        let mut records = Vec::with_capacity(envelope.data.len());
        for payload in envelope.data {
            match payload.into_record() {
                Ok(record) => records.push(record),
                Err(reason) => {
                    tracing::warn!(%reason, tenant_id, "skipping malformed contact record");
                }
            }
        }

        tracing::debug!(tenant_id, count = records.len(), "fetched contact snapshot");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_normalizes_slashes() {
        let client =
            DirectoryClient::with_base_url("https://api.example.com/".to_string(), "k".to_string());
        assert_eq!(
            client.build_url("/contacts?tenant_id=t1"),
            "https://api.example.com/contacts?tenant_id=t1"
        );
    }

    #[test]
    fn test_envelope_deserialization() {
        let json = r#"{"success": false, "message": "directory offline"}"#;
        let envelope: ContactsEnvelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_empty());
        assert_eq!(envelope.message.as_deref(), Some("directory offline"));
    }
}
