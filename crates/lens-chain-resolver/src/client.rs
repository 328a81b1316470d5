use ethers::providers::{Http, Provider};

use crate::error::{ChainError, Result};

/// HTTP JSON-RPC provider for `url`
pub(crate) fn connect(url: &str) -> Result<Provider<Http>> {
    Provider::<Http>::try_from(url).map_err(|e| ChainError::InvalidUrl(format!("{url}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_accepts_http_url() {
        assert!(connect("http://localhost:8545").is_ok());
    }

    #[test]
    fn test_connect_rejects_garbage() {
        match connect("not a url") {
            Err(ChainError::InvalidUrl(msg)) => assert!(msg.starts_with("not a url")),
            other => panic!("expected invalid url, got {other:?}"),
        }
    }
}
