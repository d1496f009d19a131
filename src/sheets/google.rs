use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{RowSink, SinkError};
use crate::config::GoogleConfig;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
/// Destination range; column D holds the submission timestamp.
const RANGE: &str = "Sheet1!A:D";

/// Appends rows to a Google spreadsheet as a service account. Every append
/// re-authenticates; no token is cached between requests.
pub struct GoogleSheetsClient {
    client: reqwest::Client,
    credentials: GoogleConfig,
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl GoogleSheetsClient {
    pub fn new(credentials: GoogleConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            credentials,
        }
    }

    /// Exchange a signed service-account assertion for a short-lived access
    /// token (JWT bearer grant).
    async fn access_token(&self) -> Result<String, SinkError> {
        let pem = normalize_private_key(&self.credentials.private_key);
        let key = EncodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| SinkError::from(format!("Invalid service account key: {e}")))?;

        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.credentials.client_email,
            scope: SCOPE,
            aud: TOKEN_URL,
            iat: now,
            exp: now + 3600,
        };

        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| SinkError::from(format!("Failed to sign auth assertion: {e}")))?;

        let resp = self
            .client
            .post(TOKEN_URL)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SinkError::from(format!("Token request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = truncate_body(resp.text().await.unwrap_or_default());
            return Err(SinkError::from(format!(
                "Token exchange failed ({status}): {body}"
            )));
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| SinkError::from(format!("Invalid token response: {e}")))?;

        Ok(token.access_token)
    }
}

#[async_trait]
impl RowSink for GoogleSheetsClient {
    async fn append_row(&self, row: &[String]) -> Result<(), SinkError> {
        let token = self.access_token().await?;

        let url = format!(
            "{SHEETS_API}/{}/values/{RANGE}:append",
            self.credentials.sheet_id
        );

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .json(&json!({ "values": [row] }))
            .send()
            .await
            .map_err(|e| SinkError::from(format!("Append request failed: {e}")))?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            let body = truncate_body(resp.text().await.unwrap_or_default());
            return Err(SinkError::from(format!(
                "Sheets API returned {status}: {body}"
            )));
        }

        Ok(())
    }
}

/// Service-account keys pasted into env files usually carry literal `\n`
/// sequences instead of newlines.
pub fn normalize_private_key(key: &str) -> String {
    key.replace("\\n", "\n")
}

fn truncate_body(body: String) -> String {
    body.chars().take(1024).collect()
}
