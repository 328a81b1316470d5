use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::types::{Address, ProfileId};

/// Resolves a chain name (e.g. `bob.eth`) to an address
#[async_trait]
pub trait NameServiceProvider: Send + Sync {
    /// `Ok(None)` when the name has no resolver or no address record.
    async fn resolve_name(&self, name: &str) -> Result<Option<Address>>;
}

/// Read-only view of the Lens profile registry
#[async_trait]
pub trait RegistryProvider: Send + Sync {
    /// Default profile for a wallet; `Ok(None)` when the wallet has none.
    async fn default_profile(&self, address: &Address) -> Result<Option<ProfileId>>;

    /// Handle for a profile id; `Ok(None)` when the handle is empty.
    async fn get_handle(&self, profile_id: &ProfileId) -> Result<Option<String>>;
}

/// Resolve a chain alias to the Lens handle of its default profile.
///
/// Stops at the first step that yields nothing. Provider errors are returned
/// to the caller untouched.
pub async fn resolve_alias_to_lens_handle(
    alias: &str,
    name_service: &dyn NameServiceProvider,
    registry: &dyn RegistryProvider,
) -> Result<Option<String>> {
    let Some(address) = name_service.resolve_name(alias).await? else {
        debug!(alias, "Alias does not resolve to an address");
        return Ok(None);
    };

    let Some(profile_id) = registry.default_profile(&address).await? else {
        debug!(alias, address = ?address, "Address has no default Lens profile");
        return Ok(None);
    };

    let handle = registry
        .get_handle(&profile_id)
        .await?
        .filter(|h| !h.is_empty());

    debug!(alias, profile_id = %profile_id, handle = ?handle, "Resolved alias via registry");

    Ok(handle)
}
