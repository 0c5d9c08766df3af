// src/sheets/reader.rs
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{error, info};
use url::Url;

use crate::config::{truncate_id, ServiceCredentials};
use crate::sheets::auth::{request_access_token, TOKEN_URL};
use crate::sheets::models::{upstream_message, ValueRange};
use crate::sheets::{RawGrid, SheetsError};

pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Columns requested on every read. Data past column Z is never fetched.
pub const COLUMN_SPAN: &str = "A:Z";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Anything that can hand back the cell grid of a sheet.
pub trait SheetSource: Send + Sync {
    fn read_grid(&self, spreadsheet_id: &str, sheet_name: Option<&str>) -> Result<RawGrid, SheetsError>;
}

/// `"{sheet}!A:Z"`, or just `"A:Z"` for the spreadsheet's first sheet.
pub fn sheet_range(sheet_name: Option<&str>) -> String {
    match sheet_name.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => format!("{name}!{COLUMN_SPAN}"),
        None => COLUMN_SPAN.to_string(),
    }
}

pub struct GoogleSheetsReader {
    client: Client,
    credentials: Option<ServiceCredentials>,
    token_url: String,
    api_base: String,
}

impl GoogleSheetsReader {
    pub fn new(credentials: Option<ServiceCredentials>, timeout: Duration) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SheetsError::Unexpected(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            credentials,
            token_url: TOKEN_URL.to_string(),
            api_base: SHEETS_API_BASE.to_string(),
        })
    }

    /// Point the reader at other token and Sheets endpoints (emulators, proxies).
    pub fn with_endpoints(mut self, token_url: impl Into<String>, api_base: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self.api_base = api_base.into();
        self
    }

    pub fn values_url(&self, spreadsheet_id: &str, range: &str) -> Result<Url, SheetsError> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| SheetsError::Unexpected(format!("invalid Sheets API base URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| SheetsError::Unexpected("Sheets API base URL cannot take a path".into()))?
            .pop_if_empty()
            .extend([spreadsheet_id, "values", range]);

        Ok(url)
    }

    fn fetch(&self, credentials: &ServiceCredentials, spreadsheet_id: &str, range: &str) -> Result<RawGrid, SheetsError> {
        let token = request_access_token(&self.client, &self.token_url, credentials)?;
        let url = self.values_url(spreadsheet_id, range)?;

        let response = self.client.get(url).bearer_auth(token).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SheetsError::RemoteFetch {
                status: status.as_u16(),
                message: upstream_message(status.as_u16(), &body),
            });
        }

        let value_range: ValueRange = response
            .json()
            .map_err(|e| SheetsError::Unexpected(format!("malformed values response: {e}")))?;

        info!(returned_range = ?value_range.range, "values received");
        Ok(value_range.into_grid())
    }
}

impl SheetSource for GoogleSheetsReader {
    fn read_grid(&self, spreadsheet_id: &str, sheet_name: Option<&str>) -> Result<RawGrid, SheetsError> {
        let range = sheet_range(sheet_name);

        info!(
            spreadsheet = %truncate_id(spreadsheet_id, 15),
            sheet = sheet_name.unwrap_or("first sheet (default)"),
            range = %range,
            "reading Google Sheet"
        );

        let Some(credentials) = self.credentials.as_ref() else {
            error!("Google Sheets credentials not configured");
            return Err(SheetsError::AuthConfiguration(
                "Google Sheets credentials not configured in environment variables".into(),
            ));
        };

        match self.fetch(credentials, spreadsheet_id, &range) {
            Ok(grid) => {
                info!(rows = grid.len(), "read rows from Google Sheet");
                Ok(grid)
            }
            Err(e) => {
                error!(kind = e.kind_name(), status = ?e.status(), error = %e, "error reading Google Sheet");
                if e.is_not_found() {
                    error!("the spreadsheet id might be wrong, or the sheet is not shared with the service account");
                } else if e.is_forbidden() {
                    error!(account = %credentials.client_email, "share the sheet with the service account");
                }
                Err(e)
            }
        }
    }
}
