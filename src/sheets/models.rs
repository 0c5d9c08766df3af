// src/sheets/models.rs
use serde::Deserialize;
use serde_json::Value;

use crate::sheets::RawGrid;

/// Body of `spreadsheets.values.get`. `values` is omitted for an empty sheet.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    pub fn into_grid(self) -> RawGrid {
        self.values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect()
    }
}

/// Formatted values come back as strings; anything else is stringified
/// and null reads as an empty cell.
pub fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Pull the human-readable message out of a Google error body.
///
/// Sheets answers `{"error": {"code": 404, "message": "..."}}` while the
/// token endpoint answers `{"error": "invalid_grant", "error_description": "..."}`.
pub fn upstream_message(status: u16, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    let message = parsed.as_ref().and_then(|json| match json.get("error") {
        Some(Value::Object(err)) => err.get("message").and_then(Value::as_str),
        Some(Value::String(code)) => json
            .get("error_description")
            .and_then(Value::as_str)
            .or(Some(code.as_str())),
        _ => None,
    });

    match message {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => format!("upstream returned HTTP {status}"),
    }
}
