use std::time::Duration;

use async_trait::async_trait;
use ethers::providers::{Http, JsonRpcClient, Middleware, Provider, ProviderError};
use moka::future::Cache;
use tracing::debug;

use crate::client::connect;
use crate::error::Result;
use crate::resolver::NameServiceProvider;
use crate::types::Address;

const CACHE_TTL_SECS: u64 = 300; // 5 minutes

/// ENS forward resolution over an Ethereum mainnet provider
pub struct EnsNameService<P = Http> {
    provider: Provider<P>,
    cache: Cache<String, Address>,
}

impl EnsNameService<Http> {
    pub fn new(url: &str) -> Result<Self> {
        Ok(Self::with_provider(connect(url)?))
    }
}

impl<P: JsonRpcClient> EnsNameService<P> {
    pub fn with_provider(provider: Provider<P>) -> Self {
        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(CACHE_TTL_SECS))
            .build();

        Self { provider, cache }
    }
}

#[async_trait]
impl<P: JsonRpcClient + 'static> NameServiceProvider for EnsNameService<P> {
    async fn resolve_name(&self, name: &str) -> Result<Option<Address>> {
        // Case variants share one lookup and one cache entry
        let name = name.to_lowercase();

        if let Some(cached) = self.cache.get(&name).await {
            return Ok(Some(cached));
        }

        let address = match self.provider.resolve_name(&name).await {
            Ok(address) => address,
            Err(ProviderError::EnsError(reason)) | Err(ProviderError::EnsNotOwned(reason)) => {
                debug!(name = %name, reason = %reason, "ENS name has no usable resolver");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if address.is_zero() {
            debug!(name = %name, "ENS name has no address record");
            return Ok(None);
        }

        self.cache.insert(name, address).await;

        Ok(Some(address))
    }
}
