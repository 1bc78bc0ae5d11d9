use crate::client::DirectoryClient;
use crate::error::{DirectoryApiError, DirectoryApiResult};
use crate::models::ContactRecord;
use crate::repositories::ContactDirectory;
use async_trait::async_trait;
use std::sync::Arc;

/// Directory implementation backed by the HTTP client.
///
/// The synchronous `ureq` call runs under `tokio::task::spawn_blocking` so it
/// never stalls the async runtime.
pub struct HttpContactDirectory {
    client: Arc<DirectoryClient>,
}

impl HttpContactDirectory {
    /// Create a new HttpContactDirectory over the given client.
    pub fn new(client: DirectoryClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ContactDirectory for HttpContactDirectory {
    async fn list_contacts(&self, tenant_id: &str) -> DirectoryApiResult<Vec<ContactRecord>> {
        let client = self.client.clone();
        let tenant_id = tenant_id.to_string();

        tokio::task::spawn_blocking(move || client.get_contacts(&tenant_id))
            .await
            .map_err(|e| DirectoryApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
