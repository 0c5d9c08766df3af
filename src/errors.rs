// errors.rs
use astra::Response;
use thiserror::Error;

use crate::listings::ListingsError;

/// Errors from the HTTP layer or from the listing pipeline behind it.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Property {0} not found")]
    PropertyNotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Listings(#[from] ListingsError),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
