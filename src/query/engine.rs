//! The query engine: filter and order a snapshot into a view.

use crate::models::ContactRecord;
use crate::query::criteria::{CriteriaModel, SortDirection, SortKey, StatusFilter, TagFilter};
use std::cmp::Ordering;

/// Compute the ordered view of `records` matching `criteria`.
///
/// Pure and total: the result is a subsequence of the input (borrowed
/// references, no copies), recomputed from scratch on every call. Filtering
/// predicates are AND-combined; the sort is stable, so records comparing
/// equal keep their relative input order in either direction.
pub fn query<'a>(records: &'a [ContactRecord], criteria: &CriteriaModel) -> Vec<&'a ContactRecord> {
    let mut view: Vec<&ContactRecord> = records
        .iter()
        .filter(|record| matches_criteria(record, criteria))
        .collect();

    view.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, criteria.sort_key);
        match criteria.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    view
}

fn matches_criteria(record: &ContactRecord, criteria: &CriteriaModel) -> bool {
    matches_search(record, &criteria.search_term)
        && matches_status(record, &criteria.status_filter)
        && matches_tag(record, &criteria.tag_filter)
}

/// Text clause: case-insensitive in `name`, raw substring in `phone` (phone
/// numbers are not cased), case-insensitive in `email` when one is present.
/// A record without an email is not excluded by the email clause; that clause
/// simply never matches for it.
fn matches_search(record: &ContactRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let term_folded = term.to_lowercase();

    record.name.to_lowercase().contains(&term_folded)
        || record.phone.contains(term)
        || record
            .email
            .as_deref()
            .map(|email| email.to_lowercase().contains(&term_folded))
            .unwrap_or(false)
}

fn matches_status(record: &ContactRecord, filter: &StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => record.status == *status,
    }
}

fn matches_tag(record: &ContactRecord, filter: &TagFilter) -> bool {
    match filter {
        TagFilter::All => true,
        TagFilter::Tagged(tag) => record.tags.iter().any(|t| t == tag),
    }
}

/// Three-way comparison under the ascending interpretation of `key`.
///
/// For `LastInteractionAt`, `Option<DateTime>` ordering places `None` before
/// every `Some`: absence is the lowest rank, not an error.
fn compare_by_key(a: &ContactRecord, b: &ContactRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::LastInteractionAt => a.last_interaction_at.cmp(&b.last_interaction_at),
    }
}
