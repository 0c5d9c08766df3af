use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// HTML page shown inline, with a filename hint for "save as".
pub fn html_response(markup: Markup, filename: &str) -> ResultResp {
    let filename = header_safe(filename);

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .header(
            "Content-Disposition",
            format!("inline; filename=\"{filename}.html\""),
        )
        .body(Body::from(markup.into_string()))
        .map_err(|e| ServerError::Internal(e.to_string()))
}

/// Filenames come from sheet cells; keep them inside the quoted header value.
fn header_safe(filename: &str) -> String {
    filename
        .chars()
        .map(|c| if c == '"' || c == '\\' || c.is_control() { '_' } else { c })
        .collect()
}
