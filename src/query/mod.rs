//! Pure query surface over a directory snapshot.
//!
//! Everything in this module is a deterministic, side-effect-free computation
//! over an already-resident snapshot:
//! - **criteria**: the user-selected search/filter/sort value object
//! - **engine**: filtering and stable sorting into an ordered view
//! - **tags**: distinct tag vocabulary for filter choices
//! - **summary**: whole-directory counts for the header cards

pub mod criteria;
pub mod engine;
pub mod summary;
pub mod tags;

pub use criteria::{CriteriaModel, SortDirection, SortKey, StatusFilter, TagFilter};
pub use engine::query;
pub use summary::{summarize, DirectorySummary};
pub use tags::extract_tags;
