//! Convenience re-exports for application crates.

#[cfg(not(target_arch = "wasm32"))]
pub use crate::config::{ConfigError, load_config};
pub use crate::host::host_candidate;
#[cfg(feature = "server")]
pub use crate::server::{ApiError, ApiState, ApiStateBuilder, parse_query};
pub use ghub_domain::config::ApiConfig;
pub use ghub_domain::params::ParamMap;
pub use ghub_domain::site::{Site, SiteId};
