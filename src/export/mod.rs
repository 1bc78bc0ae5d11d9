//! Export of a directory view as portable delimited text.

pub mod csv;

pub use self::csv::{export_file_name, parse_export, serialize_contacts, EXPORT_HEADER};
