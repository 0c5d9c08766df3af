use crate::config::AppConfig;
use crate::router::{respond, AppState};
use crate::sheets::GoogleSheetsReader;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod listings;
mod responses;
mod router;
mod sheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1️⃣ Load configuration (.env is optional)
    if let Err(e) = dotenvy::dotenv() {
        info!("no .env file loaded: {e}");
    }
    let config = AppConfig::from_env();

    if config.sheet.spreadsheet_id.is_none() {
        warn!("GOOGLE_SHEET_ID is not set; /api/properties will report it");
    }
    if config.credentials().is_none() {
        warn!("Google service account credentials are incomplete");
    }

    // 2️⃣ Build the sheet reader with injected credentials
    let reader = match GoogleSheetsReader::new(config.credentials(), config.timeout) {
        Ok(reader) => reader.with_endpoints(config.token_url.clone(), config.sheets_api_base.clone()),
        Err(e) => {
            error!("❌ Sheet reader initialization failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(bind_addr = %config.bind_addr, "❌ Invalid bind address: {e}");
            std::process::exit(1);
        }
    };
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);
    let state = AppState::new(config, Arc::new(reader));

    // 4️⃣ Serve requests, sharing the state across workers
    let result = server.serve(move |req, _info| respond(req, &state));

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
