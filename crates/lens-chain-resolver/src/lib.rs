//! ENS → Lens handle resolution
//!
//! Resolves an ENS name to a wallet address on Ethereum, then asks the
//! LensHub contract on Polygon for that wallet's default profile handle.
//! Both steps go through small provider traits so callers can swap in
//! their own transports.

mod client;
mod contracts;
mod ens;
mod error;
mod lens;
mod resolver;
mod types;

pub use ens::EnsNameService;
pub use error::{ChainError, Result};
pub use lens::{LensHubRegistry, LENS_HUB_ADDRESS};
pub use resolver::{resolve_alias_to_lens_handle, NameServiceProvider, RegistryProvider};
pub use types::{Address, ProfileId, U256};
