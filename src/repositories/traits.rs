use crate::error::DirectoryApiResult;
use crate::models::ContactRecord;
use async_trait::async_trait;

/// Source of contact snapshots.
///
/// Abstraction over the remote directory service, enabling different
/// implementations (HTTP client, in-memory mock).
#[async_trait]
pub trait ContactDirectory: Send + Sync {
    /// Fetch the full contact snapshot for a tenant.
    ///
    /// Returns only records that passed validation; malformed payloads are
    /// excluded by the implementation with a logged warning.
    async fn list_contacts(&self, tenant_id: &str) -> DirectoryApiResult<Vec<ContactRecord>>;
}
