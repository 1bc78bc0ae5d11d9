//! User-selected query criteria.
//!
//! The criteria are a pure value object: the UI layer replaces them wholesale
//! or field-by-field on each user action and re-runs [`crate::query::query`]
//! with the new value. They carry no relationship to any specific record.

use crate::models::ContactStatus;
use serde::{Deserialize, Serialize};

/// Status dimension of the filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// No status restriction
    #[default]
    All,
    /// Only records with exactly this status
    Only(ContactStatus),
}

/// Tag dimension of the filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TagFilter {
    /// No tag restriction
    #[default]
    All,
    /// Only records carrying this tag
    Tagged(String),
}

/// Field the view is ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Case-folded lexicographic comparison of `name`
    Name,
    /// Creation timestamp, always defined
    CreatedAt,
    /// Last interaction timestamp; a record that never interacted ranks
    /// before every record with a timestamp
    LastInteractionAt,
}

/// Direction of the sort.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The combined search/filter/sort selection driving a query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaModel {
    /// Free-text search term; empty means no text filter
    pub search_term: String,

    /// Status restriction
    pub status_filter: StatusFilter,

    /// Tag restriction
    pub tag_filter: TagFilter,

    /// Sort field
    pub sort_key: SortKey,

    /// Sort direction
    pub sort_direction: SortDirection,
}

impl Default for CriteriaModel {
    /// The fixed initial selection: most recently contacted first, nothing
    /// filtered out.
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            tag_filter: TagFilter::All,
            sort_key: SortKey::LastInteractionAt,
            sort_direction: SortDirection::Descending,
        }
    }
}

impl CriteriaModel {
    /// Whether the text-search clause is active.
    pub fn has_search_term(&self) -> bool {
        !self.search_term.is_empty()
    }
}
