//! Contact record model as held in a directory snapshot.

use crate::error::RecordError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a contact. Closed enumeration: the wire carries the
/// lowercase token and any other value marks the record malformed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Active,
    Blocked,
    Inactive,
}

impl ContactStatus {
    /// The wire/display token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Active => "active",
            ContactStatus::Blocked => "blocked",
            ContactStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ContactStatus::Active),
            "blocked" => Ok(ContactStatus::Blocked),
            "inactive" => Ok(ContactStatus::Inactive),
            other => Err(RecordError::UnknownStatus(other.to_string())),
        }
    }
}

/// A contact record in the directory snapshot.
///
/// Records are immutable from the engine's perspective: every derived view is
/// a new sequence of references into the snapshot, never a mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// Opaque unique identifier, stable across reloads
    pub id: String,

    /// Display name, used for search and alphabetic sort
    pub name: String,

    /// Canonical contact string, searched as a raw substring
    pub phone: String,

    /// Optional email address, searched case-insensitively when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Lifecycle status
    pub status: ContactStatus,

    /// Free-text labels in original order; duplicates are possible and must
    /// not be double-counted when building the vocabulary
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Last interaction timestamp; `None` means never interacted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_interaction_at: Option<DateTime<Utc>>,

    /// Creation timestamp, always present
    pub created_at: DateTime<Utc>,

    /// Opaque per-tenant fields, not interpreted by the engine
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom_fields: HashMap<String, serde_json::Value>,
}

impl ContactRecord {
    /// Create a record with the mandatory fields; the rest start empty.
    pub fn new(
        id: String,
        name: String,
        phone: String,
        status: ContactStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            phone,
            email: None,
            status,
            tags: Vec::new(),
            last_interaction_at: None,
            created_at,
            custom_fields: HashMap::new(),
        }
    }
}

/// Wire shape of a contact as the directory service sends it.
///
/// Every field is optional or defaulted so that one malformed entry cannot
/// fail deserialization of the whole response. [`ContactPayload::into_record`]
/// performs the actual validation.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
    pub tags: Vec<String>,
    pub last_interaction_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub custom_fields: HashMap<String, serde_json::Value>,
}

impl ContactPayload {
    /// Validate the payload into a [`ContactRecord`].
    ///
    /// Mandatory fields are `id`, `name`, `phone`, `status` and `createdAt`;
    /// `status` must be one of the closed enumeration. A failing payload is
    /// reported individually so ingestion can skip it and keep the rest of
    /// the load.
    pub fn into_record(self) -> Result<ContactRecord, RecordError> {
        let id = self.id.ok_or(RecordError::MissingField("id"))?;
        let name = self.name.ok_or(RecordError::MissingField("name"))?;
        let phone = self.phone.ok_or(RecordError::MissingField("phone"))?;
        let status = self
            .status
            .ok_or(RecordError::MissingField("status"))?
            .parse::<ContactStatus>()?;
        let created_at = self.created_at.ok_or(RecordError::MissingField("createdAt"))?;

        Ok(ContactRecord {
            id,
            name,
            phone,
            email: self.email,
            status,
            tags: self.tags,
            last_interaction_at: self.last_interaction_at,
            created_at,
            custom_fields: self.custom_fields,
        })
    }
}
