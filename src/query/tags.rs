//! Tag vocabulary derivation.

use crate::models::ContactRecord;
use std::collections::HashSet;

/// Union of every record's tags, for populating filter choices.
///
/// Duplicate tags, within one record or across records, collapse to a single
/// entry. Iteration order carries no meaning; callers that need a stable
/// display order sort the result themselves (typically lexicographically).
/// Rebuilt from scratch on each store update rather than incrementally
/// maintained, since the store is a small snapshot.
pub fn extract_tags(records: &[ContactRecord]) -> HashSet<String> {
    records
        .iter()
        .flat_map(|record| record.tags.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactStatus;
    use chrono::{TimeZone, Utc};

    fn record_with_tags(id: &str, tags: &[&str]) -> ContactRecord {
        let mut record = ContactRecord::new(
            id.to_string(),
            format!("Contact {id}"),
            "+55 11 90000-0000".to_string(),
            ContactStatus::Active,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        record.tags = tags.iter().map(|t| t.to_string()).collect();
        record
    }

    #[test]
    fn test_empty_store_yields_empty_set() {
        assert!(extract_tags(&[]).is_empty());
    }

    #[test]
    fn test_union_across_records() {
        let records = vec![
            record_with_tags("1", &["vip", "lead"]),
            record_with_tags("2", &["vip", "churned"]),
            record_with_tags("3", &[]),
        ];
        let tags = extract_tags(&records);
        assert_eq!(tags.len(), 3);
        assert!(tags.contains("vip"));
        assert!(tags.contains("lead"));
        assert!(tags.contains("churned"));
    }

    #[test]
    fn test_duplicates_within_a_record_collapse() {
        let records = vec![record_with_tags("1", &["vip", "vip", "vip"])];
        assert_eq!(extract_tags(&records).len(), 1);
    }
}
