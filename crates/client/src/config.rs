use std::path::PathBuf;
use std::time::Duration;

use tucash_core::constants::NOTIFICATION_POLL_INTERVAL_SECS;
use tucash_core::errors::{Error, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_SESSION_FILE: &str = "./.tucash/session.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    pub poll_interval: Duration,
    pub session_file: PathBuf,
    /// Base64 (or 32-character ascii) key; when set the session file is encrypted.
    pub session_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            poll_interval: Duration::from_secs(NOTIFICATION_POLL_INTERVAL_SECS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            session_key: None,
        }
    }
}

impl ClientConfig {
    /// Reads `TUCASH_*` variables, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let api_url = lookup("TUCASH_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_url);
        let timeout_ms = parse_number(&lookup, "TUCASH_REQUEST_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)?;
        let poll_secs = parse_number(
            &lookup,
            "TUCASH_POLL_INTERVAL_SECS",
            NOTIFICATION_POLL_INTERVAL_SECS,
        )?;
        if poll_secs == 0 {
            return Err(Error::InvalidConfigValue(
                "TUCASH_POLL_INTERVAL_SECS must be greater than zero".into(),
            ));
        }
        let session_file = lookup("TUCASH_SESSION_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.session_file);
        let session_key = lookup("TUCASH_SESSION_KEY").filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_millis(timeout_ms),
            poll_interval: Duration::from_secs(poll_secs),
            session_file,
            session_key,
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}

fn parse_number<F>(lookup: &F, key: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| Error::InvalidConfigValue(format!("{} must be a number, got '{}'", key, raw))),
        _ => Ok(default),
    }
}
