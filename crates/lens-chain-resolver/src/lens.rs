use std::sync::Arc;

use async_trait::async_trait;
use ethers::providers::{Http, JsonRpcClient, Provider};
use ethers::types::H160;

use crate::client::connect;
use crate::contracts::LensHub;
use crate::error::Result;
use crate::resolver::RegistryProvider;
use crate::types::{Address, ProfileId};

/// LensHub proxy on Polygon mainnet
pub const LENS_HUB_ADDRESS: Address = H160([
    0xdb, 0x46, 0xd1, 0xdc, 0x15, 0x56, 0x34, 0xfb, 0xc7, 0x32, 0xf9, 0x2e, 0x85, 0x3b, 0x10, 0xb2,
    0x88, 0xad, 0x5a, 0x1d,
]);

/// Lens profile registry backed by LensHub view calls over a Polygon provider
pub struct LensHubRegistry<P = Http> {
    hub: LensHub<Provider<P>>,
}

impl LensHubRegistry<Http> {
    pub fn new(url: &str) -> Result<Self> {
        Ok(Self::with_provider(connect(url)?))
    }
}

impl<P: JsonRpcClient + 'static> LensHubRegistry<P> {
    pub fn with_provider(provider: Provider<P>) -> Self {
        Self {
            hub: LensHub::new(LENS_HUB_ADDRESS, Arc::new(provider)),
        }
    }
}

#[async_trait]
impl<P: JsonRpcClient + 'static> RegistryProvider for LensHubRegistry<P> {
    async fn default_profile(&self, address: &Address) -> Result<Option<ProfileId>> {
        let id = self.hub.default_profile(*address).call().await?;
        Ok((!id.is_zero()).then_some(id))
    }

    async fn get_handle(&self, profile_id: &ProfileId) -> Result<Option<String>> {
        let handle = self.hub.get_handle(*profile_id).call().await?;
        Ok((!handle.is_empty()).then_some(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChainError;
    use ethers::abi::{encode, Token};
    use ethers::providers::{JsonRpcError, MockProvider, MockResponse};
    use ethers::types::{Bytes, U256};

    fn registry() -> (LensHubRegistry<MockProvider>, MockProvider) {
        let (provider, mock) = Provider::mocked();
        (LensHubRegistry::with_provider(provider), mock)
    }

    fn answer(mock: &MockProvider, token: Token) {
        mock.push::<Bytes, _>(Bytes::from(encode(&[token]))).unwrap();
    }

    fn revert(mock: &MockProvider) {
        mock.push_response(MockResponse::Error(JsonRpcError {
            code: 3,
            message: "execution reverted".to_string(),
            data: None,
        }));
    }

    #[test]
    fn test_hub_constant_matches_published_address() {
        let expected: Address = "0xdb46d1dc155634fbc732f92e853b10b288ad5a1d".parse().unwrap();
        assert_eq!(LENS_HUB_ADDRESS, expected);
    }

    #[tokio::test]
    async fn test_default_profile_found() {
        let (registry, mock) = registry();
        answer(&mock, Token::Uint(U256::from(7)));

        let id = registry
            .default_profile(&Address::from_low_u64_be(1))
            .await
            .unwrap();
        assert_eq!(id, Some(U256::from(7)));
    }

    #[tokio::test]
    async fn test_zero_profile_id_is_absent() {
        let (registry, mock) = registry();
        answer(&mock, Token::Uint(U256::zero()));

        let id = registry
            .default_profile(&Address::from_low_u64_be(1))
            .await
            .unwrap();
        assert!(id.is_none());
    }

    #[tokio::test]
    async fn test_handle_found() {
        let (registry, mock) = registry();
        answer(&mock, Token::String("bob.lens".to_string()));

        let handle = registry.get_handle(&U256::from(7)).await.unwrap();
        assert_eq!(handle.as_deref(), Some("bob.lens"));
    }

    #[tokio::test]
    async fn test_empty_handle_is_absent() {
        let (registry, mock) = registry();
        answer(&mock, Token::String(String::new()));

        let handle = registry.get_handle(&U256::from(7)).await.unwrap();
        assert!(handle.is_none());
    }

    #[tokio::test]
    async fn test_revert_is_a_failure_not_absence() {
        let (registry, mock) = registry();
        revert(&mock);

        let result = registry.default_profile(&Address::from_low_u64_be(1)).await;
        assert!(matches!(result, Err(ChainError::Contract(_))));

        revert(&mock);
        let result = registry.get_handle(&U256::from(7)).await;
        assert!(matches!(result, Err(ChainError::Contract(_))));
    }
}
