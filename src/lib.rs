//! Directory Reports - the contact query and export engine of the
//! customer-engagement platform's directory reporting surface.
//!
//! Given an in-memory snapshot of contact records and the user's current
//! criteria, the crate produces a filtered, sorted view and serializes it to
//! a portable quoted-CSV document with deterministic, reproducible output.
//!
//! # Architecture
//!
//! - **models**: Contact records, status enumeration, wire payloads
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **query**: Criteria, the pure query engine, tag vocabulary, summary
//! - **export**: Quoted-CSV serialization and its parse counterpart
//! - **store**: Snapshot holder for loaded records
//! - **client**: HTTP client for the directory service
//! - **repositories**: Async abstraction over the directory service
//! - **services**: Facade owning store and criteria for the UI context

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod repositories;
pub mod services;
pub mod store;

pub use client::DirectoryClient;
pub use config::Config;
pub use error::{ConfigError, DirectoryApiError, ExportError, RecordError};
pub use export::{export_file_name, parse_export, serialize_contacts};
pub use models::{ContactPayload, ContactRecord, ContactStatus};
pub use query::{
    extract_tags, query, summarize, CriteriaModel, DirectorySummary, SortDirection, SortKey,
    StatusFilter, TagFilter,
};
pub use repositories::{ContactDirectory, HttpContactDirectory};
pub use services::{DirectoryService, RefreshOutcome};
pub use store::RecordStore;
