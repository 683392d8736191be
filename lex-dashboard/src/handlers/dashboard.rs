use crate::models::Document;
use crate::startup::AppState;
use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardTemplate {
    pub documents: Vec<Document>,
}

/// The document list. Each render replaces whatever was shown before; the
/// Refresh action simply reloads this page.
pub async fn dashboard_page(State(state): State<AppState>) -> Response {
    match state.documents.list_documents().await {
        Ok(documents) => DashboardTemplate { documents }.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch document list");
            super::upstream_error_page(&e, "/".to_string())
        }
    }
}
