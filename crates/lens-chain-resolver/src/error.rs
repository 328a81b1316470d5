//! Error types for chain lookups

use std::fmt;

use ethers::contract::ContractError;
use ethers::providers::{Middleware, ProviderError};

/// Errors from Ethereum JSON-RPC calls and contract reads
#[derive(Debug)]
pub enum ChainError {
    /// Transport failure or JSON-RPC error object from the node
    Provider(Box<ProviderError>),
    /// Contract call reverted or its return data did not decode
    Contract(String),
    InvalidUrl(String),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(e) => write!(f, "RPC provider error: {e}"),
            Self::Contract(msg) => write!(f, "Contract call failed: {msg}"),
            Self::InvalidUrl(msg) => write!(f, "Invalid provider URL: {msg}"),
        }
    }
}

impl std::error::Error for ChainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Provider(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<ProviderError> for ChainError {
    fn from(err: ProviderError) -> Self {
        Self::Provider(Box::new(err))
    }
}

impl<M: Middleware> From<ContractError<M>> for ChainError {
    fn from(err: ContractError<M>) -> Self {
        Self::Contract(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChainError>;
