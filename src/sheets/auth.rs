// src/sheets/auth.rs
//
// Service-account OAuth: sign a short-lived JWT with the account's private
// key and trade it for a bearer token.
use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::blocking::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::ServiceCredentials;
use crate::sheets::models::{upstream_message, TokenResponse};
use crate::sheets::SheetsError;

pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const SHEETS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize, PartialEq)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl AssertionClaims {
    pub fn new(client_email: &str, audience: &str, now: DateTime<Utc>) -> Self {
        let iat = now.timestamp();
        Self {
            iss: client_email.to_string(),
            scope: SHEETS_READONLY_SCOPE.to_string(),
            aud: audience.to_string(),
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        }
    }
}

/// Build the RS256-signed assertion for the token endpoint.
pub fn sign_assertion(
    credentials: &ServiceCredentials,
    audience: &str,
    now: DateTime<Utc>,
) -> Result<String, SheetsError> {
    let key = EncodingKey::from_rsa_pem(credentials.private_key.expose().as_bytes())
        .map_err(|e| SheetsError::AuthConfiguration(format!("private key is not a valid RSA PEM: {e}")))?;

    let claims = AssertionClaims::new(&credentials.client_email, audience, now);

    encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| SheetsError::AuthConfiguration(format!("failed to sign assertion: {e}")))
}

/// Exchange a signed assertion for an access token. One attempt, no caching.
pub fn request_access_token(
    client: &Client,
    token_url: &str,
    credentials: &ServiceCredentials,
) -> Result<String, SheetsError> {
    let assertion = sign_assertion(credentials, token_url, Utc::now())?;

    let response = client
        .post(token_url)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(SheetsError::RemoteFetch {
            status: status.as_u16(),
            message: upstream_message(status.as_u16(), &body),
        });
    }

    let token: TokenResponse = response
        .json()
        .map_err(|e| SheetsError::Unexpected(format!("malformed token response: {e}")))?;

    debug!(expires_in = ?token.expires_in, "obtained access token");
    Ok(token.access_token)
}
