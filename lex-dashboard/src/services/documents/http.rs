//! HTTP implementation of the document API client.

use super::{ClientError, DocumentApi, FileUpload};
use crate::config::DocumentApiSettings;
use crate::models::Document;
use crate::services::metrics;
use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::multipart;
use service_core::observability::TracedClientExt;

pub struct HttpDocumentClient {
    client: reqwest::Client,
    settings: DocumentApiSettings,
}

impl HttpDocumentClient {
    pub fn new(settings: DocumentApiSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, settings }
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/api/documents{}",
            self.settings.base_url.trim_end_matches('/'),
            path
        )
    }

    async fn list_inner(&self) -> Result<Vec<Document>, ClientError> {
        let url = self.api_url("");

        let response = self.client.traced_get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to send GET request to {}: {}", url, e);
            ClientError::Network(e.to_string())
        })?;

        let response = check_status(response, None).await?;

        response
            .json::<Vec<Document>>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn get_inner(&self, id: i64) -> Result<Document, ClientError> {
        let url = self.api_url(&format!("/{}", id));

        let response = self.client.traced_get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to send GET request to {}: {}", url, e);
            ClientError::Network(e.to_string())
        })?;

        let response = check_status(response, Some(id)).await?;

        response
            .json::<Document>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn upload_inner(&self, upload: FileUpload) -> Result<Document, ClientError> {
        let part = multipart::Part::bytes(upload.data)
            .file_name(upload.filename.clone())
            .mime_str(&upload.content_type)
            .map_err(|e| {
                ClientError::InvalidUpload(format!(
                    "content type {:?}: {}",
                    upload.content_type, e
                ))
            })?;
        let form = multipart::Form::new().part("file", part);

        let url = self.api_url("/upload");

        let response = self
            .client
            .traced_post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", url, e);
                ClientError::Network(e.to_string())
            })?;

        let response = check_status(response, None).await?;

        response
            .json::<Document>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Map non-2xx responses to typed errors; 404 with a known id becomes
/// [`ClientError::NotFound`].
async fn check_status(
    response: reqwest::Response,
    looked_up_id: Option<i64>,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = looked_up_id {
            return Err(ClientError::NotFound(id));
        }
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::UpstreamStatus { status, body })
}

#[async_trait]
impl DocumentApi for HttpDocumentClient {
    async fn list_documents(&self) -> Result<Vec<Document>, ClientError> {
        let result = self.list_inner().await;
        metrics::record_client_call("list", "remote", &result);
        result
    }

    async fn get_document(&self, id: i64) -> Result<Document, ClientError> {
        let result = self.get_inner(id).await;
        metrics::record_client_call("get", "remote", &result);
        result
    }

    async fn upload_document(&self, upload: FileUpload) -> Result<Document, ClientError> {
        let result = self.upload_inner(upload).await;
        metrics::record_client_call("upload", "remote", &result);
        result
    }
}
