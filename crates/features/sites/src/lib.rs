//! Sites feature slice: the validated site registry and per-request site
//! resolution.

mod error;
mod registry;
mod resolve;

pub use crate::error::{SitesError, SitesErrorExt};
pub use crate::registry::SiteRegistry;
pub use crate::resolve::resolve_request_site;

use ghub_domain::config::SitesConfig;
use ghub_kernel::domain::registry::InitializedSlice;

/// Sites feature state.
#[ghub_derive::ghub_slice]
pub struct Sites {
    pub registry: SiteRegistry,
}

/// Initialize the sites feature from configuration.
///
/// # Errors
/// Returns an error if the configured site list fails registry validation.
pub fn init(config: &SitesConfig) -> Result<InitializedSlice, SitesError> {
    let registry = SiteRegistry::from_config(config)?;

    tracing::info!(
        sites = registry.len(),
        default = %registry.default().id,
        "Sites slice initialized"
    );

    Ok(Sites::new(SitesInner { registry }).into_slice())
}
