use crate::resolver::redirect_params;
use crate::target::donation_url;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use ghub_derive::api_handler;
use ghub_domain::constants::{DONATE_PATH, DONATIONS_TAG, MONTHLY_SUPPORTERS_PATH};
use ghub_domain::site::Site;
use ghub_kernel::server::{ApiError, ApiState, parse_query};
use ghub_sites::{Sites, resolve_request_site};
use tracing::{debug, warn};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn donations_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(donate_handler))
        .routes(routes!(monthly_supporters_handler))
}

#[api_handler(
    get,
    path = "/donate",
    responses(
        (status = SEE_OTHER, description = "Redirect to the canonical donation page"),
        (status = OK, description = "Donation landing page"),
    ),
    tag = DONATIONS_TAG,
)]
async fn donate_handler(
    State(state): State<ApiState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    donation_response(&state, DONATE_PATH, &headers, raw.as_deref())
}

#[api_handler(
    get,
    path = "/monthly-supporters",
    responses(
        (status = SEE_OTHER, description = "Redirect to the canonical monthly supporters page"),
        (status = OK, description = "Monthly supporters landing page"),
    ),
    tag = DONATIONS_TAG,
)]
async fn monthly_supporters_handler(
    State(state): State<ApiState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    donation_response(&state, MONTHLY_SUPPORTERS_PATH, &headers, raw.as_deref())
}

/// Shared pipeline for both donation routes: attribute the request to a
/// site, derive redirect parameters, and either redirect or render locally.
fn donation_response(
    state: &ApiState,
    path: &str,
    headers: &HeaderMap,
    raw_query: Option<&str>,
) -> Result<Response, ApiError> {
    let sites = state.try_get_slice::<Sites>()?;
    let incoming = parse_query(raw_query);
    let host_header = headers.get(header::HOST).and_then(|value| value.to_str().ok());

    let current = resolve_request_site(&sites.registry, host_header, &incoming);
    let default_site = sites.registry.default();

    let Some(decision) = redirect_params(Some(current), default_site, &incoming) else {
        debug!(site = %current.id, path, "Attribution present, rendering locally");
        return Ok(landing_page(current).into_response());
    };

    match donation_url(path, &decision) {
        Some(target) => {
            debug!(site = %current.id, target = %target, "Redirecting donation request");
            Ok(Redirect::to(target.as_str()).into_response())
        }
        None => {
            warn!(site = %current.id, path, "Redirect target could not be built, rendering locally");
            Ok(landing_page(current).into_response())
        }
    }
}

fn landing_page(site: &Site) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Support {name}</title></head>\n\
         <body><h1>Support {name}</h1><p>Your donation keeps {name} running.</p></body>\n</html>\n",
        name = site.name
    ))
}
