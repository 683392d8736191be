use crate::models::Document;
use crate::services::documents::ClientError;
use crate::startup::AppState;
use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Template)]
#[template(path = "pages/document.html")]
pub struct DocumentTemplate {
    pub document: Document,
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub document_id: i64,
}

/// Analysis view for a single document. The id comes from the route and is
/// fetched fresh on every request.
pub async fn document_page(
    State(state): State<AppState>,
    Path(document_id): Path<i64>,
) -> Response {
    match state.documents.get_document(document_id).await {
        Ok(document) => DocumentTemplate { document }.into_response(),
        Err(ClientError::NotFound(id)) => {
            tracing::warn!(document_id = id, "Document not found");
            (StatusCode::NOT_FOUND, NotFoundTemplate { document_id: id }).into_response()
        }
        Err(e) => {
            tracing::error!(document_id, error = %e, "Failed to fetch document");
            super::upstream_error_page(&e, format!("/documents/{}", document_id))
        }
    }
}
