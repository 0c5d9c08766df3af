mod auth;
mod models;
mod reader;
mod sheets_error;

pub use auth::TOKEN_URL;
pub use reader::{GoogleSheetsReader, SheetSource, SHEETS_API_BASE};
pub use sheets_error::SheetsError;

/// Rows of cells as returned by the sheet, row-major. Rows may be ragged.
pub type RawGrid = Vec<Vec<String>>;
