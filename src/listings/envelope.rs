// src/listings/envelope.rs
use serde::Serialize;

use crate::listings::{ListingRecord, ListingsError, NormalizedListings};
use crate::sheets::SheetsError;

pub const FETCH_FAILED: &str = "Failed to fetch properties";

const NOT_FOUND_HINT: &str =
    "The spreadsheet ID might be incorrect or the sheet is not shared with the service account";
const FORBIDDEN_HINT: &str = "Make sure the sheet is shared with the service account email";
const GENERIC_HINT: &str = "Check server logs for detailed error information";

/// Success body of the listing endpoint. `debug` is left out for an empty sheet.
#[derive(Debug, Serialize, PartialEq)]
pub struct ListingsResponse {
    pub properties: Vec<ListingRecord>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Diagnostics>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub total_rows: usize,
    pub headers: Vec<String>,
    pub filtered_count: usize,
}

impl ListingsResponse {
    pub fn empty() -> Self {
        Self {
            properties: Vec::new(),
            count: 0,
            debug: None,
        }
    }
}

impl From<NormalizedListings> for ListingsResponse {
    fn from(normalized: NormalizedListings) -> Self {
        let count = normalized.records.len();
        Self {
            properties: normalized.records,
            count,
            debug: Some(Diagnostics {
                total_rows: normalized.total_rows,
                headers: normalized.headers,
                filtered_count: count,
            }),
        }
    }
}

/// Uniform error body. Optional fields are omitted when empty.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorBody {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            error_type: None,
            hint: None,
        }
    }
}

impl From<&ListingsError> for ErrorBody {
    fn from(err: &ListingsError) -> Self {
        match err {
            ListingsError::NotConfigured { .. } => ErrorBody::message(err.to_string()),
            ListingsError::Fetch(source) => ErrorBody {
                error: FETCH_FAILED.to_string(),
                details: Some(source.to_string()),
                error_type: Some(source.kind_name().to_string()),
                hint: Some(fetch_hint(source).to_string()),
            },
        }
    }
}

fn fetch_hint(err: &SheetsError) -> &'static str {
    if err.is_not_found() {
        NOT_FOUND_HINT
    } else if err.is_forbidden() {
        FORBIDDEN_HINT
    } else {
        GENERIC_HINT
    }
}
