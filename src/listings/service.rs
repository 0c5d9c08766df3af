// src/listings/service.rs
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{truncate_id, SheetSettings, SHEET_ID_VAR};
use crate::listings::{normalize, ListingsResponse};
use crate::sheets::{SheetSource, SheetsError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingsError {
    #[error("Google Sheet ID not configured. Please add {setting} to your .env file")]
    NotConfigured { setting: &'static str },

    #[error(transparent)]
    Fetch(#[from] SheetsError),
}

/// Read the configured sheet and reduce it to the available listings.
///
/// A missing spreadsheet id is reported before the source is touched.
pub fn fetch_listings(
    settings: &SheetSettings,
    source: &dyn SheetSource,
) -> Result<ListingsResponse, ListingsError> {
    let spreadsheet_id = settings
        .spreadsheet_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or(ListingsError::NotConfigured { setting: SHEET_ID_VAR })?;

    info!(spreadsheet = %truncate_id(spreadsheet_id, 10), "fetching listings");

    let grid = source.read_grid(spreadsheet_id, settings.sheet_name.as_deref())?;

    if grid.is_empty() {
        warn!("no data found in sheet");
        return Ok(ListingsResponse::empty());
    }

    debug!(headers = ?grid[0], "header row");

    let normalized = normalize(&grid);
    info!(count = normalized.records.len(), "processed properties");

    Ok(ListingsResponse::from(normalized))
}
