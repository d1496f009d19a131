use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub google: Option<GoogleConfig>,
}

/// Service-account credentials for the destination spreadsheet. The block is
/// all-or-nothing: a partial set of variables leaves it unset and every
/// submission is answered with a configuration error.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_email: String,
    pub private_key: String,
    pub client_id: String,
    pub sheet_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("CLICKCHAIN_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CLICKCHAIN_HOST: {e}"))?;

        let port: u16 = env_or("CLICKCHAIN_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid CLICKCHAIN_PORT: {e}"))?;

        let log_level = env_or("CLICKCHAIN_LOG_LEVEL", "info");

        let google = match (
            std::env::var("GOOGLE_CLIENT_EMAIL").ok(),
            std::env::var("GOOGLE_PRIVATE_KEY").ok(),
            std::env::var("GOOGLE_CLIENT_ID").ok(),
            std::env::var("GOOGLE_SHEET_ID").ok(),
        ) {
            (Some(client_email), Some(private_key), Some(client_id), Some(sheet_id)) => {
                Some(GoogleConfig {
                    client_email,
                    private_key,
                    client_id,
                    sheet_id,
                })
            }
            _ => None,
        };

        Ok(Config {
            host,
            port,
            log_level,
            google,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
