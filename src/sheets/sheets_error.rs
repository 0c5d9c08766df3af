use thiserror::Error;

/// Failures of a single sheet read. Kept distinct so the endpoint can give
/// a different hint for a missing sheet than for a permission problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetsError {
    #[error("Google Sheets credentials not configured: {0}")]
    AuthConfiguration(String),

    #[error("Google Sheets request failed with status {status}: {message}")]
    RemoteFetch { status: u16, message: String },

    #[error("Unexpected error reading Google Sheet: {0}")]
    Unexpected(String),
}

impl SheetsError {
    pub fn kind_name(&self) -> &'static str {
        match self {
            SheetsError::AuthConfiguration(_) => "AuthConfigurationError",
            SheetsError::RemoteFetch { .. } => "RemoteFetchError",
            SheetsError::Unexpected(_) => "UnexpectedError",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SheetsError::RemoteFetch { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }
}

impl From<reqwest::Error> for SheetsError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => SheetsError::RemoteFetch {
                status: status.as_u16(),
                message: e.to_string(),
            },
            None if e.is_timeout() => SheetsError::Unexpected(format!("request timed out: {e}")),
            None => SheetsError::Unexpected(e.to_string()),
        }
    }
}
