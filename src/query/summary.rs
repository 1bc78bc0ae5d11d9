//! Whole-directory summary counts.

use crate::models::{ContactRecord, ContactStatus};
use serde::Serialize;
use std::collections::HashSet;

/// Counts shown in the directory header cards.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct DirectorySummary {
    /// All records in the snapshot
    pub total: usize,

    /// Records with status `active`
    pub active_count: usize,

    /// Records with status `blocked`
    pub blocked_count: usize,

    /// Distinct tags across the snapshot
    pub distinct_tag_count: usize,
}

/// Tally the *unfiltered* store in a single pass.
///
/// The summary always reflects the whole directory regardless of the active
/// criteria; only the table reflects the current filter.
pub fn summarize(records: &[ContactRecord]) -> DirectorySummary {
    let mut summary = DirectorySummary {
        total: records.len(),
        ..DirectorySummary::default()
    };
    let mut seen_tags: HashSet<&str> = HashSet::new();

    for record in records {
        match record.status {
            ContactStatus::Active => summary.active_count += 1,
            ContactStatus::Blocked => summary.blocked_count += 1,
            ContactStatus::Inactive => {}
        }
        for tag in &record.tags {
            seen_tags.insert(tag.as_str());
        }
    }

    summary.distinct_tag_count = seen_tags.len();
    summary
}
