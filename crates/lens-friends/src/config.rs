use std::env;
use std::time::Duration;

use crate::error::{FriendsError, Result};

const DEFAULT_TWITTER_API_URL: &str = "https://api.twitter.com";
const DEFAULT_DEADLINE_MS: u64 = 30_000;

/// Runtime configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub eth_provider_url: String,
    pub polygon_provider_url: String,
    pub twitter_bearer_token: Option<String>,
    pub twitter_api_url: String,
    pub deadline: Duration,
}

impl Config {
    /// Parse configuration from the environment, loading `.env` first if present
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| FriendsError::MissingConfiguration(key.to_string()))
        };

        let eth_provider_url = required("ETH_PROVIDER_URL")?;
        let polygon_provider_url = required("POLYGON_PROVIDER_URL")?;

        let twitter_bearer_token = lookup("TWITTER_API_BEARER_TOKEN").filter(|t| !t.is_empty());

        let twitter_api_url =
            lookup("TWITTER_API_URL").unwrap_or_else(|| DEFAULT_TWITTER_API_URL.to_string());

        let deadline_ms = lookup("RESOLVE_DEADLINE_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DEADLINE_MS);

        Ok(Self {
            eth_provider_url,
            polygon_provider_url,
            twitter_bearer_token,
            twitter_api_url,
            deadline: Duration::from_millis(deadline_ms),
        })
    }
}
