// src/listings/normalizer.rs
use crate::listings::ListingRecord;
use tracing::{debug, info};

/// Column B. Availability is read by position, not by header name.
pub const AVAILABILITY_COLUMN: usize = 1;

const AVAILABLE_MARKER: &str = "yes";

/// Output of one normalization pass, with the counts the endpoint reports.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedListings {
    pub headers: Vec<String>,
    pub records: Vec<ListingRecord>,
    /// Rows in the grid, header row included.
    pub total_rows: usize,
}

/// A row is available when its availability cell, trimmed and lowercased,
/// is exactly "yes". Anything else (missing cell, "y", "available") is not.
pub fn is_available(row: &[String]) -> bool {
    row.get(AVAILABILITY_COLUMN)
        .is_some_and(|cell| cell.trim().to_lowercase() == AVAILABLE_MARKER)
}

/// Treat row 0 as headers, keep the available data rows in input order and
/// map each one to a `ListingRecord`.
pub fn normalize(grid: &[Vec<String>]) -> NormalizedListings {
    let Some((headers, rows)) = grid.split_first() else {
        return NormalizedListings {
            headers: Vec::new(),
            records: Vec::new(),
            total_rows: 0,
        };
    };

    let records: Vec<ListingRecord> = rows
        .iter()
        .enumerate()
        .filter(|(index, row)| {
            // +2: one for the header row, one for 1-based sheet rows
            let sheet_row = index + 2;
            let code = row.first().map(String::as_str).unwrap_or_default();
            let available = is_available(row);

            if available {
                debug!(sheet_row, code, "row is available");
            } else if !code.is_empty() {
                debug!(
                    sheet_row,
                    code,
                    flag = row.get(AVAILABILITY_COLUMN).map(String::as_str).unwrap_or_default(),
                    "row skipped, not available"
                );
            }
            available
        })
        .map(|(_, row)| ListingRecord::from_row(headers, row))
        .collect();

    info!(
        available = records.len(),
        data_rows = rows.len(),
        "filtered available properties"
    );

    NormalizedListings {
        headers: headers.clone(),
        records,
        total_rows: grid.len(),
    }
}
