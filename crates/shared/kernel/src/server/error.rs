use super::state::ApiStateError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::borrow::Cow;

/// Request-level error surface for handlers.
///
/// Handler faults are infrastructure faults here (a slice that was never
/// registered, an invariant that broke after startup), so everything renders
/// as a 500 with a JSON body; domain-level "no redirect" outcomes are not
/// errors and never pass through this type.
#[ghub_derive::ghub_error]
pub enum ApiError {
    #[error("State error{}: {source}", fmt_context(.context))]
    State {
        #[source]
        source: ApiStateError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", fmt_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": self.to_string() })))
            .into_response()
    }
}
