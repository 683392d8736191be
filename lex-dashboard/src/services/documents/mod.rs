//! Document API clients.
//!
//! The dashboard talks to the document API through the [`DocumentApi`] trait;
//! which implementation backs it is decided once, at startup, from
//! configuration. Remote failures surface as typed [`ClientError`]s — mock
//! data is only ever served when mock mode was asked for explicitly.

pub mod http;
pub mod mock;

use crate::config::{ClientMode, DocumentApiSettings};
use crate::models::Document;
use async_trait::async_trait;
use axum::http::StatusCode;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("document {0} not found")]
    NotFound(i64),

    #[error("document API returned {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid upload: {0}")]
    InvalidUpload(String),
}

impl ClientError {
    /// Whether retrying the same call later could reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network(_) => true,
            ClientError::UpstreamStatus { status, .. } => status.is_server_error(),
            ClientError::NotFound(_) | ClientError::Decode(_) | ClientError::InvalidUpload(_) => {
                false
            }
        }
    }
}

/// A file handed to [`DocumentApi::upload_document`].
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// Fetch all documents, in the order the API returns them.
    async fn list_documents(&self) -> Result<Vec<Document>, ClientError>;

    /// Fetch a single document by id.
    async fn get_document(&self, id: i64) -> Result<Document, ClientError>;

    /// Upload a file; returns the server-created document record.
    async fn upload_document(&self, upload: FileUpload) -> Result<Document, ClientError>;
}

/// Build the document client the configuration asks for.
pub fn build_document_client(settings: &DocumentApiSettings) -> Arc<dyn DocumentApi> {
    match settings.mode {
        ClientMode::Remote => Arc::new(http::HttpDocumentClient::new(settings.clone())),
        ClientMode::Mock => {
            tracing::warn!("document API client running in mock mode; all data is canned");
            Arc::new(mock::MockDocumentClient::new())
        }
    }
}
