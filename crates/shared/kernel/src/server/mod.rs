//! Server-side plumbing shared by feature slices: application state,
//! request-level error mapping, query parsing, and system routes.

pub mod error;
mod health;
pub mod query;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use query::parse_query;
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
