use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::error::{Result, TwitterError};
use crate::types::{Follower, FollowingPage, FollowingResponse, UserLookupResponse, UserObject};

const DEFAULT_API_URL: &str = "https://api.twitter.com";
const CACHE_TTL_SECS: u64 = 300; // 5 minutes
const MAX_RESULTS: u32 = 1000;
const USER_FIELDS: &str = "description,profile_image_url";

/// Source of the accounts a user follows
#[async_trait]
pub trait FollowerLister: Send + Sync {
    /// First page of accounts followed by `handle`.
    ///
    /// `auth_override` replaces the configured bearer token for this call.
    async fn list_following(
        &self,
        handle: &str,
        auth_override: Option<&str>,
    ) -> Result<FollowingPage>;
}

/// Read-only Twitter API v2 client
pub struct TwitterClient {
    client: Client,
    api_url: String,
    bearer_token: Option<String>,
    user_id_cache: Cache<String, String>,
}

impl TwitterClient {
    /// Create a client against the public API
    pub fn new(bearer_token: Option<String>) -> Result<Self> {
        Self::with_api_url(DEFAULT_API_URL, bearer_token)
    }

    /// Create a client against a custom API base URL
    pub fn with_api_url(api_url: &str, bearer_token: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let user_id_cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(CACHE_TTL_SECS))
            .build();

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            bearer_token,
            user_id_cache,
        })
    }

    fn token<'a>(&'a self, auth_override: Option<&'a str>) -> Result<&'a str> {
        auth_override
            .or(self.bearer_token.as_deref())
            .ok_or(TwitterError::MissingToken)
    }

    /// Resolve a username to its numeric user id
    pub async fn user_id(&self, username: &str, token: &str) -> Result<String> {
        let cache_key = username.to_lowercase();
        if let Some(cached) = self.user_id_cache.get(&cache_key).await {
            return Ok(cached);
        }

        let url = format!(
            "{}/2/users/by/username/{}",
            self.api_url,
            urlencoding::encode(username)
        );

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => {
                return Err(TwitterError::NotFound(username.to_string()))
            }
            status => check_status(status)?,
        }

        let body: UserLookupResponse = response.json().await?;
        let user = user_from_lookup(username, body)?;

        self.user_id_cache.insert(cache_key, user.id.clone()).await;

        Ok(user.id)
    }

    /// First page of accounts followed by a user id
    pub async fn following(&self, user_id: &str, token: &str) -> Result<FollowingPage> {
        let url = format!(
            "{}/2/users/{}/following?max_results={MAX_RESULTS}&user.fields={}",
            self.api_url,
            urlencoding::encode(user_id),
            urlencoding::encode(USER_FIELDS)
        );

        let response = self.client.get(&url).bearer_auth(token).send().await?;
        check_status(response.status())?;

        let body: FollowingResponse = response.json().await?;

        if let Some(meta) = &body.meta {
            debug!(
                user_id,
                result_count = meta.result_count.unwrap_or(0),
                more_pages = meta.next_token.is_some(),
                "Fetched following page"
            );
        }

        Ok(FollowingPage {
            data: body
                .data
                .unwrap_or_default()
                .into_iter()
                .map(Follower::from)
                .collect(),
        })
    }
}

#[async_trait]
impl FollowerLister for TwitterClient {
    async fn list_following(
        &self,
        handle: &str,
        auth_override: Option<&str>,
    ) -> Result<FollowingPage> {
        let token = self.token(auth_override)?;
        let user_id = self.user_id(handle, token).await?;
        self.following(&user_id, token).await
    }
}

fn check_status(status: StatusCode) -> Result<()> {
    match status {
        StatusCode::TOO_MANY_REQUESTS => Err(TwitterError::RateLimited),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(TwitterError::Unauthorized(status.as_u16()))
        }
        s if !s.is_success() => Err(TwitterError::Status(s.as_u16())),
        _ => Ok(()),
    }
}

/// A lookup without `data` means the account does not exist (or is not visible)
fn user_from_lookup(username: &str, body: UserLookupResponse) -> Result<UserObject> {
    if let Some(user) = body.data {
        return Ok(user);
    }

    if let Some(err) = body.errors.as_ref().and_then(|errs| errs.first()) {
        warn!(
            username,
            title = err.title.as_deref().unwrap_or("unknown"),
            detail = err.detail.as_deref().unwrap_or(""),
            "User lookup returned errors"
        );
    }

    Err(TwitterError::NotFound(username.to_string()))
}
