pub mod app;
pub mod dashboard;
pub mod documents;
pub mod metrics;
pub mod upload;

use crate::services::documents::ClientError;
use askama::Template;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Template)]
#[template(path = "pages/error.html")]
pub struct ErrorTemplate {
    pub heading: &'static str,
    pub message: String,
    pub retryable: bool,
    pub retry_href: String,
}

/// Render an upstream failure as a 502 page. Failures are always shown to the
/// user; canned data is never substituted for a failed remote call.
pub(crate) fn upstream_error_page(error: &ClientError, retry_href: String) -> Response {
    let template = ErrorTemplate {
        heading: "Document service unavailable",
        message: error.to_string(),
        retryable: error.is_retryable(),
        retry_href,
    };

    (StatusCode::BAD_GATEWAY, template).into_response()
}
