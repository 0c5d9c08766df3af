use crate::errors::ServerError;
use crate::listings::ErrorBody;
use crate::responses::json_response;
use astra::{Body, Response, ResponseBuilder};
use tracing::error;

/// Convert a ServerError into the JSON error envelope.
pub fn error_response(err: ServerError) -> Response {
    let (status, body) = match &err {
        ServerError::NotFound => (404, ErrorBody::message("Not Found")),
        ServerError::PropertyNotFound(code) => (
            404,
            ErrorBody {
                details: Some(format!("No available property with code {code}")),
                ..ErrorBody::message("Property not found")
            },
        ),
        ServerError::BadRequest(msg) => (
            400,
            ErrorBody {
                details: Some(msg.clone()),
                ..ErrorBody::message("Bad Request")
            },
        ),
        ServerError::Listings(listings_err) => {
            error!(error = %listings_err, "listing request failed");
            (500, ErrorBody::from(listings_err))
        }
        ServerError::Internal(msg) => {
            error!(error = %msg, "internal error");
            (500, ErrorBody::message("Internal Server Error"))
        }
    };

    json_response(status, &body).unwrap_or_else(|_| fallback(status))
}

fn fallback(status: u16) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .body(Body::from("Internal Server Error"))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
