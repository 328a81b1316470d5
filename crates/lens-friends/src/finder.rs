use std::sync::Arc;
use std::time::Duration;

use lens_chain_resolver::{EnsNameService, LensHubRegistry, NameServiceProvider, RegistryProvider};
use tracing::info;
use twitter_client::{FollowerLister, TwitterClient};

use crate::config::Config;
use crate::error::{FriendsError, Result};
use crate::pipeline::resolve_followers;
use crate::types::ResolvedProfile;

/// Finds the Lens handles of the accounts a Twitter user follows
pub struct FriendFinder {
    lister: Arc<dyn FollowerLister>,
    name_service: Arc<dyn NameServiceProvider>,
    registry: Arc<dyn RegistryProvider>,
    deadline: Duration,
}

impl FriendFinder {
    pub fn new(
        lister: Arc<dyn FollowerLister>,
        name_service: Arc<dyn NameServiceProvider>,
        registry: Arc<dyn RegistryProvider>,
        deadline: Duration,
    ) -> Self {
        Self {
            lister,
            name_service,
            registry,
            deadline,
        }
    }

    /// Wire up the Twitter API, ENS over Ethereum RPC and LensHub over Polygon RPC
    pub fn from_config(config: &Config) -> Result<Self> {
        let lister = TwitterClient::with_api_url(
            &config.twitter_api_url,
            config.twitter_bearer_token.clone(),
        )?;
        let name_service = EnsNameService::new(&config.eth_provider_url)?;
        let registry = LensHubRegistry::new(&config.polygon_provider_url)?;

        Ok(Self::new(
            Arc::new(lister),
            Arc::new(name_service),
            Arc::new(registry),
            config.deadline,
        ))
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Followed accounts of `username` that have a Lens handle.
    ///
    /// `auth_override` replaces the configured Twitter bearer token.
    pub async fn find_friends(
        &self,
        username: &str,
        auth_override: Option<&str>,
    ) -> Result<Vec<ResolvedProfile>> {
        let following = self.lister.list_following(username, auth_override).await?;

        if following.data.is_empty() {
            return Err(FriendsError::NoFollowers(username.to_string()));
        }

        info!(
            username,
            following = following.data.len(),
            deadline = ?self.deadline,
            "Resolving followed accounts"
        );

        Ok(resolve_followers(
            following.data,
            self.name_service.clone(),
            self.registry.clone(),
            self.deadline,
        )
        .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lens_chain_resolver::{Address, ProfileId};
    use std::sync::Mutex;
    use twitter_client::{Follower, FollowingPage, TwitterError};

    enum Listing {
        NotFound,
        RateLimited,
        Page(Vec<Follower>),
    }

    struct StubLister {
        listing: Listing,
        seen_auth: Mutex<Option<String>>,
    }

    impl StubLister {
        fn new(listing: Listing) -> Self {
            Self {
                listing,
                seen_auth: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl FollowerLister for StubLister {
        async fn list_following(
            &self,
            handle: &str,
            auth_override: Option<&str>,
        ) -> twitter_client::Result<FollowingPage> {
            *self.seen_auth.lock().unwrap() = auth_override.map(str::to_string);
            match &self.listing {
                Listing::NotFound => Err(TwitterError::NotFound(handle.to_string())),
                Listing::RateLimited => Err(TwitterError::RateLimited),
                Listing::Page(data) => Ok(FollowingPage { data: data.clone() }),
            }
        }
    }

    struct NoNames;

    #[async_trait]
    impl NameServiceProvider for NoNames {
        async fn resolve_name(&self, _name: &str) -> lens_chain_resolver::Result<Option<Address>> {
            Ok(None)
        }
    }

    struct EmptyRegistry;

    #[async_trait]
    impl RegistryProvider for EmptyRegistry {
        async fn default_profile(
            &self,
            _address: &Address,
        ) -> lens_chain_resolver::Result<Option<ProfileId>> {
            Ok(None)
        }

        async fn get_handle(
            &self,
            _profile_id: &ProfileId,
        ) -> lens_chain_resolver::Result<Option<String>> {
            Ok(None)
        }
    }

    fn finder(lister: Arc<StubLister>) -> FriendFinder {
        FriendFinder::new(
            lister,
            Arc::new(NoNames),
            Arc::new(EmptyRegistry),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_missing_profile_is_profile_not_found() {
        let finder = finder(Arc::new(StubLister::new(Listing::NotFound)));
        let err = finder.find_friends("ghost", None).await.unwrap_err();
        assert!(matches!(err, FriendsError::ProfileNotFound(ref name) if name == "ghost"));
    }

    #[tokio::test]
    async fn test_empty_following_is_no_followers() {
        let finder = finder(Arc::new(StubLister::new(Listing::Page(Vec::new()))));
        let err = finder.find_friends("loner", None).await.unwrap_err();
        assert!(matches!(err, FriendsError::NoFollowers(ref name) if name == "loner"));
    }

    #[tokio::test]
    async fn test_rate_limit_is_distinct() {
        let finder = finder(Arc::new(StubLister::new(Listing::RateLimited)));
        let err = finder.find_friends("busy", None).await.unwrap_err();
        assert!(matches!(err, FriendsError::RateLimited));
    }

    #[tokio::test]
    async fn test_finds_direct_handles_and_passes_auth_override() {
        let lister = Arc::new(StubLister::new(Listing::Page(vec![
            Follower {
                handle: "alice".to_string(),
                display_name: "alice.lens fan".to_string(),
                description: None,
                avatar_url: None,
            },
            Follower {
                handle: "nobody".to_string(),
                display_name: "nobody".to_string(),
                description: Some("nothing here".to_string()),
                avatar_url: None,
            },
        ])));
        let finder = finder(lister.clone());

        let profiles = finder.find_friends("me", Some("override")).await.unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].twitter.handle, "alice");
        assert_eq!(profiles[0].lens.handle, "alice.lens");
        assert_eq!(lister.seen_auth.lock().unwrap().as_deref(), Some("override"));
    }

    #[test]
    fn test_from_config_builds_clients() {
        let config = Config {
            eth_provider_url: "http://localhost:8545".to_string(),
            polygon_provider_url: "http://localhost:8546".to_string(),
            twitter_bearer_token: None,
            twitter_api_url: "http://localhost:9000".to_string(),
            deadline: Duration::from_secs(1),
        };
        let finder = FriendFinder::from_config(&config)
            .unwrap()
            .with_deadline(Duration::from_millis(10));
        assert_eq!(finder.deadline, Duration::from_millis(10));
    }

    #[test]
    fn test_from_config_rejects_bad_provider_url() {
        let config = Config {
            eth_provider_url: "not a url".to_string(),
            polygon_provider_url: "http://localhost:8546".to_string(),
            twitter_bearer_token: None,
            twitter_api_url: "http://localhost:9000".to_string(),
            deadline: Duration::from_secs(1),
        };
        assert!(matches!(
            FriendFinder::from_config(&config),
            Err(FriendsError::Config(_))
        ));
    }
}
