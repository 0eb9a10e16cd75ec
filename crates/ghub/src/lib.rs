//! Facade crate for `GiveHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `ghub` with the `server` feature flag.
//! - Call `ghub::init` to register feature slices; extend as new slices appear.

pub use ghub_domain as domain;
use ghub_domain::config::ApiConfig;
pub use ghub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use ghub_donations::donations_router;
        pub use ghub_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use ghub_donations as donations;
    pub use ghub_sites as sites;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "sites",
        "donations",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Site registry (validated against configuration)
    slices.push(features::sites::init(&config.sites)?);

    // Donation redirect pipeline (stateless, cannot fail)
    slices.push(features::donations::init());

    Ok(slices)
}
