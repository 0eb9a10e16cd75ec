use axum::Router;
use ghub::kernel::prelude::ApiState;
use ghub::kernel::safe_nanoid;
use tower_http::trace::TraceLayer;
use tracing::info_span;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(ghub::server::router::system_router())
        .merge(ghub::server::router::donations_router())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            info_span!(
                "http",
                id = %safe_nanoid!(),
                method = %request.method(),
                uri = %request.uri(),
            )
        }))
        .with_state(state)
        .split_for_parts();

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    // Merge all routes and then apply the state to the final router
    Router::new().merge(openapi_routes).merge(scalar_routes)
}
