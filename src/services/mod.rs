//! Service layer tying the store, criteria and directory together.

mod directory_service;

pub use directory_service::{DirectoryService, RefreshOutcome};
