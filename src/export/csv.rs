//! Quoted-CSV serialization of contact views.
//!
//! The writer implements the portable-text contract verbatim: every cell is
//! wrapped in double quotes, an interior quote is escaped by doubling it,
//! cells are joined by commas and rows are separated by a single newline.
//! That rule is what makes the output parseable by any generic quoted-CSV
//! reader; [`parse_export`] is that reader, closing the round-trip law.

use crate::error::ExportResult;
use crate::models::ContactRecord;
use chrono::{DateTime, NaiveDate, Utc};

/// Column labels, emitted as the first row of every export.
pub const EXPORT_HEADER: [&str; 7] = [
    "Name",
    "Phone",
    "Email",
    "Status",
    "Tags",
    "Last Interaction",
    "Created",
];

/// Cell used when a contact never interacted.
const NO_INTERACTION: &str = "N/A";

/// Fixed day/month/year rendering, independent of the viewer's locale.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Serialize an ordered view of records to quoted-CSV text.
///
/// Total on valid input: an empty view produces header-only output, an empty
/// tag set produces an empty tags cell. Records are rendered in iteration
/// order, so the document carries exactly the row set and order of the view
/// it was derived from.
pub fn serialize_contacts<'a>(records: impl IntoIterator<Item = &'a ContactRecord>) -> String {
    let mut rows = vec![format_row(EXPORT_HEADER.iter().map(|label| label.to_string()))];

    for record in records {
        rows.push(format_row(record_cells(record)));
    }

    rows.join("\n")
}

/// Parse exported text back into its rows, header included.
///
/// A generic quoted-CSV read with no schema knowledge; the round-trip law
/// guarantees the rendered field values come back unchanged.
pub fn parse_export(text: &str) -> ExportResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(rows)
}

/// File name for an export taken on `date`: `contacts-export-YYYY-MM-DD.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("contacts-export-{}.csv", date.format("%Y-%m-%d"))
}

fn record_cells(record: &ContactRecord) -> impl Iterator<Item = String> + '_ {
    [
        record.name.clone(),
        record.phone.clone(),
        record.email.clone().unwrap_or_default(),
        record.status.to_string(),
        record.tags.join("; "),
        record
            .last_interaction_at
            .map(format_date)
            .unwrap_or_else(|| NO_INTERACTION.to_string()),
        format_date(record.created_at),
    ]
    .into_iter()
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format(DATE_FORMAT).to_string()
}

fn format_row(cells: impl Iterator<Item = String>) -> String {
    cells
        .map(|cell| quote_cell(&cell))
        .collect::<Vec<_>>()
        .join(",")
}

/// Wrap a cell in double quotes, doubling any interior quote.
fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
