use crate::services::documents::{ClientError, FileUpload};
use crate::startup::AppState;
use askama::Template;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

#[derive(Template)]
#[template(path = "pages/upload.html")]
pub struct UploadTemplate {}

pub async fn upload_page() -> impl IntoResponse {
    UploadTemplate {}
}

/// Accept one file and forward it to the document client. The page script
/// consumes the JSON response: success navigates back to the dashboard,
/// failure re-enables the form with the error shown.
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    // Single-file contract: only the first part is read.
    let field = multipart
        .next_field()
        .await
        .map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
        })?
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("No file uploaded")))?;

    let filename = field.file_name().unwrap_or("unnamed").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e)))?
        .to_vec();

    tracing::info!(
        filename = %filename,
        size = data.len(),
        "Document upload received"
    );

    let upload = FileUpload {
        filename,
        content_type,
        data,
    };

    match state.documents.upload_document(upload).await {
        Ok(document) => {
            tracing::info!(document_id = document.id, "Document upload accepted");
            Ok(Json(json!({
                "status": "success",
                "document": document,
            })))
        }
        Err(ClientError::InvalidUpload(msg)) => Err(AppError::BadRequest(anyhow::anyhow!(msg))),
        Err(e) => {
            tracing::error!(error = %e, "Document upload failed");
            Err(AppError::BadGateway(e.to_string()))
        }
    }
}
