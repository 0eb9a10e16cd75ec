use axum::http::header;
use axum::{Json, response::IntoResponse};
use ghub_derive::api_handler;
use ghub_domain::constants::SYSTEM_TAG;
use serde::Serialize;
use std::sync::LazyLock;
use std::time::Instant;
use utoipa::ToSchema;

static STARTED: LazyLock<Instant> = LazyLock::new(Instant::now);

#[derive(Debug, Serialize, ToSchema)]
struct Health {
    status: &'static str,
    version: &'static str,
    /// Seconds since process start.
    uptime: u64,
}

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Service is up", body = Health)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler() -> impl IntoResponse {
    let health =
        Health { status: "up", version: env!("CARGO_PKG_VERSION"), uptime: STARTED.elapsed().as_secs() };

    // Liveness answers must never be served from a cache.
    let no_cache = [
        (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
        (header::PRAGMA, "no-cache"),
    ];

    (no_cache, Json(health))
}
