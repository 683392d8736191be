//! Canned document data for running the dashboard without a document API.
//!
//! The dataset is fixed so pages look the same on every load: three list
//! rows covering the status lifecycle, an id-echoing single-document fetch,
//! and uploads that are accepted with a random id. Every served call logs a
//! warning so canned data is never mistaken for live data.

use super::{ClientError, DocumentApi, FileUpload};
use crate::models::{Clause, ClauseKind, Document, DocumentStatus};
use crate::services::metrics;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

const NDA_SUMMARY: &str = "Non-disclosure agreement with standard terms.";

const CANNED_SUMMARY: &str = "This agreement establishes a service relationship between \
Provider and Client, covering payment schedules, confidentiality obligations and \
termination rights.";

pub struct MockDocumentClient;

impl MockDocumentClient {
    pub fn new() -> Self {
        Self
    }

    fn sample_documents() -> Vec<Document> {
        let now = Utc::now();
        vec![
            Document {
                id: 1,
                filename: "NDA_Partner_A.pdf".to_string(),
                storage_path: "s3://lexdash/NDA_Partner_A.pdf".to_string(),
                status: DocumentStatus::Completed,
                uploaded_at: now,
                summary: Some(NDA_SUMMARY.to_string()),
                clauses: Vec::new(),
            },
            Document {
                id: 2,
                filename: "Service_Agreement_v2.docx".to_string(),
                storage_path: "s3://lexdash/Service_Agreement_v2.docx".to_string(),
                status: DocumentStatus::Processing,
                uploaded_at: now,
                summary: None,
                clauses: Vec::new(),
            },
            Document {
                id: 3,
                filename: "Legacy_Contract_2024.pdf".to_string(),
                storage_path: String::new(),
                status: DocumentStatus::Pending,
                uploaded_at: now,
                summary: None,
                clauses: Vec::new(),
            },
        ]
    }

    fn canned_clauses() -> Vec<Clause> {
        vec![
            Clause {
                kind: ClauseKind::Risk,
                title: "Termination Clause".to_string(),
                excerpt: "Either party may terminate this agreement with 24 hours notice."
                    .to_string(),
                note: Some("Short notice period poses operational risk.".to_string()),
            },
            Clause {
                kind: ClauseKind::Standard,
                title: "Confidentiality".to_string(),
                excerpt: "Standard 2-year confidentiality term post-termination.".to_string(),
                note: None,
            },
        ]
    }
}

impl Default for MockDocumentClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentApi for MockDocumentClient {
    async fn list_documents(&self) -> Result<Vec<Document>, ClientError> {
        tracing::warn!("serving mock document list");

        let result = Ok(Self::sample_documents());
        metrics::record_client_call("list", "mock", &result);
        result
    }

    async fn get_document(&self, id: i64) -> Result<Document, ClientError> {
        tracing::warn!(document_id = id, "serving mock document");

        let result = Ok(Document {
            id,
            filename: "Mock_Agreement.pdf".to_string(),
            storage_path: "mock/path".to_string(),
            status: DocumentStatus::Completed,
            uploaded_at: Utc::now(),
            summary: Some(CANNED_SUMMARY.to_string()),
            clauses: Self::canned_clauses(),
        });
        metrics::record_client_call("get", "mock", &result);
        result
    }

    async fn upload_document(&self, upload: FileUpload) -> Result<Document, ClientError> {
        tracing::warn!(filename = %upload.filename, "accepting upload in mock mode");

        let result = Ok(Document {
            id: rand::thread_rng().gen_range(0..1000),
            filename: upload.filename,
            storage_path: "mock/path".to_string(),
            status: DocumentStatus::Pending,
            uploaded_at: Utc::now(),
            summary: None,
            clauses: Vec::new(),
        });
        metrics::record_client_call("upload", "mock", &result);
        result
    }
}
