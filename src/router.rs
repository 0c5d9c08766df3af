use crate::config::AppConfig;
use crate::errors::{ResultResp, ServerError};
use crate::listings::presentation::find_by_code;
use crate::listings::{fetch_listings, Brochure};
use crate::responses::{error_response, html_response, json_response};
use crate::sheets::SheetSource;
use crate::templates;
use astra::{Request, Response};
use std::sync::Arc;
use tracing::info;

/// Everything a request handler needs. Shared read-only across workers.
pub struct AppState {
    pub config: AppConfig,
    pub sheets: Arc<dyn SheetSource>,
}

impl AppState {
    pub fn new(config: AppConfig, sheets: Arc<dyn SheetSource>) -> Self {
        Self { config, sheets }
    }
}

/// Route a request and turn any failure into the JSON error envelope.
pub fn respond(req: Request, state: &AppState) -> Response {
    handle(req, state).unwrap_or_else(error_response)
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    info!(method, path, "request");

    match (method, path) {
        ("GET", "/api/properties") => {
            let listings = fetch_listings(&state.config.sheet, state.sheets.as_ref())?;
            json_response(200, &listings)
        }
        ("GET", "/api/test-config") => json_response(200, &state.config.status()),
        ("GET", _) => match brochure_code(path)? {
            Some(code) => brochure(state, &code),
            None => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

fn brochure(state: &AppState, code: &str) -> ResultResp {
    let listings = fetch_listings(&state.config.sheet, state.sheets.as_ref())?;

    let record = find_by_code(&listings.properties, code)
        .ok_or_else(|| ServerError::PropertyNotFound(code.to_string()))?;

    let brochure = Brochure::from_record(record);
    html_response(templates::brochure_page(&brochure), &brochure.filename)
}

/// `/properties/{code}/brochure` → decoded `{code}`.
fn brochure_code(path: &str) -> Result<Option<String>, ServerError> {
    let Some(raw) = path
        .strip_prefix("/properties/")
        .and_then(|rest| rest.strip_suffix("/brochure"))
        .filter(|code| !code.is_empty() && !code.contains('/'))
    else {
        return Ok(None);
    };

    urlencoding::decode(raw)
        .map(|code| Some(code.into_owned()))
        .map_err(|e| ServerError::BadRequest(format!("invalid property code: {e}")))
}
