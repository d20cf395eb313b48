//! Process configuration, read once at startup and passed to whoever needs it.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_BIND_HOST: [u8; 4] = [0, 0, 0, 0];
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAIL_FROM: &str = "greenlandscape.pvt@gmail.com";
const DEFAULT_MAIL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Outbound mail relay settings.
#[derive(Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub relay_url: String,
    pub api_key: String,
    pub from: String,
    /// Upper bound for one relay request, connect included.
    pub timeout: Duration,
}

// Keep the key out of logs.
impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("relay_url", &self.relay_url)
            .field("api_key", &"<redacted>")
            .field("from", &self.from)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    /// Postgres connection string; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// `None` when the relay URL or key is missing; report mail then fails
    /// with a configuration error instead of at startup.
    pub mail: Option<MailConfig>,
    pub cors_allow_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from((DEFAULT_BIND_HOST, DEFAULT_PORT)),
            database_url: None,
            mail: None,
            cors_allow_origin: None,
        }
    }
}

impl AppConfig {
    /// Load from the process environment. Call `dotenvy::dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_address = match get("BIND_ADDRESS") {
            Some(addr) => addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "BIND_ADDRESS",
                reason: e.to_string(),
            })?,
            None => {
                let port = match get("PORT") {
                    Some(port) => port.parse::<u16>().map_err(|e| ConfigError::Invalid {
                        key: "PORT",
                        reason: e.to_string(),
                    })?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::from((DEFAULT_BIND_HOST, port))
            }
        };

        let mail = match (get("MAIL_RELAY_URL"), get("MAIL_API_KEY")) {
            (Some(relay_url), Some(api_key)) => {
                if !(relay_url.starts_with("http://") || relay_url.starts_with("https://")) {
                    return Err(ConfigError::Invalid {
                        key: "MAIL_RELAY_URL",
                        reason: "expected an http(s) URL".to_string(),
                    });
                }
                let timeout = match get("MAIL_TIMEOUT_SECS") {
                    Some(secs) => match secs.parse::<u64>() {
                        Ok(secs) if secs > 0 => Duration::from_secs(secs),
                        _ => {
                            return Err(ConfigError::Invalid {
                                key: "MAIL_TIMEOUT_SECS",
                                reason: format!("expected a positive number of seconds, got '{secs}'"),
                            });
                        }
                    },
                    None => DEFAULT_MAIL_TIMEOUT,
                };
                Some(MailConfig {
                    relay_url,
                    api_key,
                    from: get("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
                    timeout,
                })
            }
            _ => None,
        };

        Ok(Self {
            bind_address,
            database_url: get("DATABASE_URL"),
            mail,
            cors_allow_origin: get("CORS_ALLOW_ORIGIN"),
        })
    }
}
