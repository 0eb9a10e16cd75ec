//! Donations feature slice: redirect parameter derivation, donation URL
//! construction, and the two donation routes.

#[cfg(feature = "server")]
mod handlers;
mod resolver;
mod target;

#[cfg(feature = "server")]
pub use crate::handlers::donations_router;
pub use crate::resolver::redirect_params;
pub use crate::target::donation_url;

use ghub_kernel::domain::registry::InitializedSlice;

/// Donations feature state.
///
/// The slice is stateless today; every request reads its inputs from the
/// sites registry and the query string. Registering it anyway keeps the
/// routes behind the same slice lifecycle as everything else.
#[ghub_derive::ghub_slice]
pub struct Donations {}

/// Initialize the donations feature.
pub fn init() -> InitializedSlice {
    tracing::info!("Donations slice initialized");

    Donations::new(DonationsInner {}).into_slice()
}
