// src/config.rs
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::warn;

use crate::sheets::{SHEETS_API_BASE, TOKEN_URL};

pub const SHEET_ID_VAR: &str = "GOOGLE_SHEET_ID";
pub const SHEET_NAME_VAR: &str = "GOOGLE_SHEET_NAME";
pub const SERVICE_ACCOUNT_EMAIL_VAR: &str = "GOOGLE_SERVICE_ACCOUNT_EMAIL";
pub const PRIVATE_KEY_VAR: &str = "GOOGLE_PRIVATE_KEY";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const TIMEOUT_VAR: &str = "SHEETS_TIMEOUT_SECS";
pub const MAX_WORKERS_VAR: &str = "MAX_WORKERS";
pub const TOKEN_URL_VAR: &str = "GOOGLE_TOKEN_URL";
pub const SHEETS_API_BASE_VAR: &str = "SHEETS_API_BASE";

pub const DEFAULT_SHEET_NAME: &str = "Hoja 1";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_WORKERS: usize = 8;

/// A string that never shows up in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Service-account identity handed to the sheet reader at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCredentials {
    pub client_email: String,
    pub private_key: Secret,
}

/// Which spreadsheet the listing endpoint reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSettings {
    pub spreadsheet_id: Option<String>,
    /// `None` reads the spreadsheet's first sheet.
    pub sheet_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sheet: SheetSettings,
    pub service_account_email: Option<String>,
    pub private_key: Option<Secret>,
    /// Length of the key exactly as set, before trimming and unescaping.
    pub private_key_raw_len: usize,
    pub bind_addr: String,
    pub timeout: Duration,
    pub max_workers: usize,
    /// OAuth token endpoint; overridable for emulators.
    pub token_url: String,
    pub sheets_api_base: String,
}

impl AppConfig {
    /// Read settings from the process environment (after `.env` is loaded).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        // Unset means the default sheet; set-but-empty means the first sheet.
        let sheet_name = match lookup(SHEET_NAME_VAR) {
            None => Some(DEFAULT_SHEET_NAME.to_string()),
            Some(name) if name.trim().is_empty() => None,
            Some(name) => Some(name.trim().to_string()),
        };

        // Keys pasted into .env files usually carry escaped newlines.
        let private_key = non_empty(PRIVATE_KEY_VAR).map(|key| Secret::new(key.replace("\\n", "\n")));

        let timeout = parse_or_default(non_empty(TIMEOUT_VAR), TIMEOUT_VAR, DEFAULT_TIMEOUT.as_secs());
        let max_workers = parse_or_default(non_empty(MAX_WORKERS_VAR), MAX_WORKERS_VAR, DEFAULT_MAX_WORKERS);

        Self {
            sheet: SheetSettings {
                spreadsheet_id: non_empty(SHEET_ID_VAR),
                sheet_name,
            },
            service_account_email: non_empty(SERVICE_ACCOUNT_EMAIL_VAR),
            private_key,
            private_key_raw_len: lookup(PRIVATE_KEY_VAR).map(|raw| raw.len()).unwrap_or(0),
            bind_addr: non_empty(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            timeout: Duration::from_secs(timeout),
            max_workers: max_workers.max(1),
            token_url: non_empty(TOKEN_URL_VAR).unwrap_or_else(|| TOKEN_URL.to_string()),
            sheets_api_base: non_empty(SHEETS_API_BASE_VAR).unwrap_or_else(|| SHEETS_API_BASE.to_string()),
        }
    }

    /// Both halves of the service account, or `None` if either is missing.
    pub fn credentials(&self) -> Option<ServiceCredentials> {
        match (&self.service_account_email, &self.private_key) {
            (Some(email), Some(key)) => Some(ServiceCredentials {
                client_email: email.clone(),
                private_key: key.clone(),
            }),
            _ => None,
        }
    }

    pub fn status(&self) -> ConfigStatus {
        let sheet_id = self.sheet.spreadsheet_id.as_deref();

        ConfigStatus {
            message: "Configuration status",
            has_google_email: self.service_account_email.is_some(),
            has_google_key: self.private_key.is_some(),
            has_sheet_id: sheet_id.is_some(),
            google_email: self
                .service_account_email
                .clone()
                .unwrap_or_else(|| "NOT SET".to_string()),
            sheet_id: sheet_id
                .map(|id| truncate_id(id, 20))
                .unwrap_or_else(|| "NOT SET (empty string)".to_string()),
            sheet_name: self.sheet.sheet_name.clone(),
            private_key_length: self.private_key_raw_len,
            ready: self.service_account_email.is_some()
                && self.private_key.is_some()
                && sheet_id.is_some(),
        }
    }
}

/// Redacted view of the configuration for the config-check route.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigStatus {
    pub message: &'static str,
    pub has_google_email: bool,
    pub has_google_key: bool,
    pub has_sheet_id: bool,
    pub google_email: String,
    pub sheet_id: String,
    pub sheet_name: Option<String>,
    pub private_key_length: usize,
    pub ready: bool,
}

/// First `keep` characters of an identifier followed by `...`, for logs.
pub fn truncate_id(id: &str, keep: usize) -> String {
    let head: String = id.chars().take(keep).collect();
    format!("{head}...")
}

fn parse_or_default<T: std::str::FromStr + Copy + fmt::Display>(
    raw: Option<String>,
    var: &str,
    default: T,
) -> T {
    match raw {
        None => default,
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!(var, value = %value, default = %default, "invalid setting, using default");
            default
        }),
    }
}
