use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use serde::Serialize;

pub fn json_response<T: Serialize>(status: u16, body: &T) -> ResultResp {
    let bytes = serde_json::to_vec(body)
        .map_err(|e| ServerError::Internal(format!("failed to serialize response: {e}")))?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(bytes))
        .map_err(|e| ServerError::Internal(e.to_string()))
}
