pub use ethers::types::{Address, U256};

/// Lens profile identifier (a `uint256` token id)
pub type ProfileId = U256;
