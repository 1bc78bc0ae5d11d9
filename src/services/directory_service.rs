//! Directory service facade.
//!
//! Owns the Record Store and Criteria Model on behalf of the single UI
//! context that drives them: criteria change field-by-field on user actions,
//! the view is recomputed from scratch on demand, and refreshes go through a
//! single-flight gate so two snapshots never race to replace each other.

use crate::error::DirectoryApiResult;
use crate::export::serialize_contacts;
use crate::models::{ContactRecord, ContactStatus};
use crate::query::{
    extract_tags, query, summarize, CriteriaModel, DirectorySummary, SortDirection, SortKey,
    StatusFilter, TagFilter,
};
use crate::repositories::ContactDirectory;
use crate::store::RecordStore;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// What a call to [`DirectoryService::refresh`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A new snapshot replaced the store
    Completed { loaded: usize },

    /// Another refresh was already in flight; this one was dropped, not queued
    Suppressed,
}

/// Clears the in-flight flag when a refresh ends, error paths included.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Facade over the directory snapshot and the reporting criteria.
pub struct DirectoryService {
    directory: Arc<dyn ContactDirectory>,
    tenant_id: String,
    store: RecordStore,
    criteria: RwLock<CriteriaModel>,
    refresh_in_flight: AtomicBool,
}

impl DirectoryService {
    /// Create a service for one tenant with an empty store and default
    /// criteria.
    pub fn new(directory: Arc<dyn ContactDirectory>, tenant_id: impl Into<String>) -> Self {
        Self {
            directory,
            tenant_id: tenant_id.into(),
            store: RecordStore::new(),
            criteria: RwLock::new(CriteriaModel::default()),
            refresh_in_flight: AtomicBool::new(false),
        }
    }

    /// Load a fresh snapshot from the directory.
    ///
    /// At most one refresh runs at a time; a call arriving while another is
    /// in flight returns [`RefreshOutcome::Suppressed`] without touching
    /// anything. On failure the previous snapshot is retained so a broken
    /// refresh never blanks a good view; the error is returned for the UI
    /// to surface and the user retries explicitly.
    pub async fn refresh(&self) -> DirectoryApiResult<RefreshOutcome> {
        if self
            .refresh_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!(tenant_id = %self.tenant_id, "refresh already in flight, suppressing");
            return Ok(RefreshOutcome::Suppressed);
        }
        let _guard = InFlightGuard(&self.refresh_in_flight);

        match self.directory.list_contacts(&self.tenant_id).await {
            Ok(records) => {
                let loaded = records.len();
                self.store.replace(records);
                tracing::info!(tenant_id = %self.tenant_id, loaded, "directory snapshot refreshed");
                Ok(RefreshOutcome::Completed { loaded })
            }
            Err(err) => {
                tracing::warn!(
                    tenant_id = %self.tenant_id,
                    error = %err,
                    "directory refresh failed, keeping previous snapshot"
                );
                Err(err)
            }
        }
    }

    /// The current snapshot, shared cheaply.
    pub fn snapshot(&self) -> Arc<Vec<ContactRecord>> {
        self.store.snapshot()
    }

    /// The current criteria selection.
    pub fn criteria(&self) -> CriteriaModel {
        match self.criteria.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn with_criteria_mut(&self, apply: impl FnOnce(&mut CriteriaModel)) {
        let mut guard = match self.criteria.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        apply(&mut guard);
    }

    /// Replace the free-text search term.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        self.with_criteria_mut(|criteria| criteria.search_term = term);
    }

    /// Restrict the view to one status, or lift the restriction.
    pub fn set_status_filter(&self, filter: StatusFilter) {
        self.with_criteria_mut(|criteria| criteria.status_filter = filter);
    }

    /// Restrict the view to one tag, or lift the restriction.
    pub fn set_tag_filter(&self, filter: TagFilter) {
        self.with_criteria_mut(|criteria| criteria.tag_filter = filter);
    }

    /// Change the ordering of the view.
    pub fn set_sort(&self, key: SortKey, direction: SortDirection) {
        self.with_criteria_mut(|criteria| {
            criteria.sort_key = key;
            criteria.sort_direction = direction;
        });
    }

    /// Return to the fixed default criteria.
    pub fn reset_criteria(&self) {
        self.with_criteria_mut(|criteria| *criteria = CriteriaModel::default());
    }

    /// The filtered, ordered view for the table and the print surface.
    pub fn current_view(&self) -> Vec<ContactRecord> {
        let snapshot = self.store.snapshot();
        let criteria = self.criteria();
        query(&snapshot, &criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Serialize the current view as the portable export document.
    ///
    /// Row set and order are exactly those of [`Self::current_view`], since
    /// both derive from the same query over the same snapshot.
    pub fn export_csv(&self) -> String {
        let snapshot = self.store.snapshot();
        let criteria = self.criteria();
        serialize_contacts(query(&snapshot, &criteria))
    }

    /// Whole-directory counts, independent of the active criteria.
    pub fn summary(&self) -> DirectorySummary {
        summarize(&self.store.snapshot())
    }

    /// Distinct tags across the whole directory, for filter choices.
    pub fn tag_vocabulary(&self) -> HashSet<String> {
        extract_tags(&self.store.snapshot())
    }

    /// Count of records with the given status in the current snapshot.
    pub fn count_with_status(&self, status: ContactStatus) -> usize {
        self.store
            .snapshot()
            .iter()
            .filter(|record| record.status == status)
            .count()
    }
}

impl std::fmt::Debug for DirectoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryService")
            .field("tenant_id", &self.tenant_id)
            .field("store", &self.store)
            .finish()
    }
}
