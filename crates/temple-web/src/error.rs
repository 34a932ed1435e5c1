//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use temple_core::{analysis::FAILURE_MESSAGE, TempleError};
use tracing::error;

/// JSON error body: `{"error": "..."}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Any failure inside an API handler.
///
/// Every kind collapses into the same 500 response; the kind and detail only
/// reach the server log.
#[derive(Debug)]
pub struct ApiError(pub TempleError);

impl<E> From<E> for ApiError
where
    E: Into<TempleError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(kind = self.0.kind(), error = %self.0, "API error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: FAILURE_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}
