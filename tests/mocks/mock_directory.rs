use async_trait::async_trait;
use directory_reports::error::{DirectoryApiError, DirectoryApiResult};
use directory_reports::models::ContactRecord;
use directory_reports::repositories::ContactDirectory;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock contact directory for testing.
///
/// Provides an in-memory implementation of ContactDirectory that can be
/// configured with snapshot data, failure injection, and an artificial
/// response delay, and tracks call counts for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDirectory {
    records: Arc<Mutex<Vec<ContactRecord>>>,
    fail: Arc<AtomicBool>,
    delay: Arc<Mutex<Option<Duration>>>,
    call_count: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockDirectory {
    /// Create a new empty MockDirectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the records the next load will return.
    pub fn set_records(&self, records: Vec<ContactRecord>) {
        *self.records.lock().unwrap() = records;
    }

    /// Make subsequent loads fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// Delay every load by `duration` before answering.
    pub fn set_delay(&self, duration: Duration) {
        *self.delay.lock().unwrap() = Some(duration);
    }

    /// Number of times `list_contacts` was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactDirectory for MockDirectory {
    async fn list_contacts(&self, _tenant_id: &str) -> DirectoryApiResult<Vec<ContactRecord>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.lock().unwrap();
        if let Some(duration) = delay {
            tokio::time::sleep(duration).await;
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(DirectoryApiError::ServiceFailure(
                "injected failure".to_string(),
            ));
        }

        Ok(self.records.lock().unwrap().clone())
    }
}
