use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Processing state reported by the document API.
///
/// The progression (PENDING -> PROCESSING -> COMPLETED or FAILED) is driven
/// entirely server-side; the dashboard only reads whatever the API reports at
/// fetch time and never advances a status itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    /// Catch-all for status values this build does not know about.
    #[serde(other)]
    Unknown,
}

/// Icon + color class for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusIndicator {
    pub glyph: &'static str,
    pub class: &'static str,
}

impl DocumentStatus {
    /// Badge mapping for the dashboard. Unrecognized statuses get no icon.
    pub fn indicator(&self) -> Option<StatusIndicator> {
        match self {
            DocumentStatus::Pending => Some(StatusIndicator {
                glyph: "\u{25F7}",
                class: "status-pending",
            }),
            DocumentStatus::Processing => Some(StatusIndicator {
                glyph: "\u{27F3}",
                class: "status-processing",
            }),
            DocumentStatus::Completed => Some(StatusIndicator {
                glyph: "\u{2713}",
                class: "status-completed",
            }),
            DocumentStatus::Failed => Some(StatusIndicator {
                glyph: "\u{26A0}",
                class: "status-failed",
            }),
            DocumentStatus::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "PENDING",
            DocumentStatus::Processing => "PROCESSING",
            DocumentStatus::Completed => "COMPLETED",
            DocumentStatus::Failed => "FAILED",
            DocumentStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of an AI-extracted clause record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClauseKind {
    Standard,
    Risk,
}

impl ClauseKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ClauseKind::Standard => "clause-standard",
            ClauseKind::Risk => "clause-risk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClauseKind::Standard => "Clause",
            ClauseKind::Risk => "Risk",
        }
    }
}

/// One clause the backend's analysis step extracted from a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    pub kind: ClauseKind,
    pub title: String,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A document record as the document API serves it (camelCase JSON).
///
/// Records are read-only on this side: every load replaces the previously
/// held value wholesale, there is no cache or merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub storage_path: String,
    pub status: DocumentStatus,
    pub uploaded_at: DateTime<Utc>,
    /// Present by convention only once processing completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clauses: Vec<Clause>,
}

impl Document {
    /// Upload date formatted for display.
    pub fn uploaded_on(&self) -> String {
        self.uploaded_at.format("%b %d, %Y").to_string()
    }

    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or("No summary available.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&DocumentStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
        assert_eq!(
            serde_json::from_str::<DocumentStatus>("\"PROCESSING\"").unwrap(),
            DocumentStatus::Processing
        );
    }

    #[test]
    fn unrecognized_status_deserializes_to_unknown() {
        let status: DocumentStatus = serde_json::from_str("\"ARCHIVED\"").unwrap();
        assert_eq!(status, DocumentStatus::Unknown);
        assert!(status.indicator().is_none());
    }

    #[test]
    fn known_statuses_have_indicators() {
        for status in [
            DocumentStatus::Pending,
            DocumentStatus::Processing,
            DocumentStatus::Completed,
            DocumentStatus::Failed,
        ] {
            assert!(status.indicator().is_some(), "{} has no indicator", status);
        }
    }

    #[test]
    fn document_parses_api_wire_format() {
        let body = r#"{
            "id": 1,
            "filename": "NDA_Partner_A.pdf",
            "storagePath": "s3://lexdash/NDA_Partner_A.pdf",
            "status": "COMPLETED",
            "uploadedAt": "2026-08-01T09:30:00Z",
            "summary": "Non-disclosure agreement with standard terms."
        }"#;

        let doc: Document = serde_json::from_str(body).unwrap();
        assert_eq!(doc.id, 1);
        assert_eq!(doc.filename, "NDA_Partner_A.pdf");
        assert_eq!(doc.status, DocumentStatus::Completed);
        assert!(doc.clauses.is_empty());
        assert_eq!(
            doc.summary.as_deref(),
            Some("Non-disclosure agreement with standard terms.")
        );
    }

    #[test]
    fn document_tolerates_missing_optional_fields() {
        let body = r#"{
            "id": 3,
            "filename": "Legacy_Contract_2024.pdf",
            "status": "PENDING",
            "uploadedAt": "2026-08-01T09:30:00Z"
        }"#;

        let doc: Document = serde_json::from_str(body).unwrap();
        assert_eq!(doc.storage_path, "");
        assert!(doc.summary.is_none());
    }

    #[test]
    fn document_serializes_camel_case() {
        let doc = Document {
            id: 9,
            filename: "contract.pdf".to_string(),
            storage_path: "mock/path".to_string(),
            status: DocumentStatus::Pending,
            uploaded_at: Utc::now(),
            summary: None,
            clauses: Vec::new(),
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["storagePath"], "mock/path");
        assert_eq!(value["status"], "PENDING");
        assert!(value.get("summary").is_none());
        assert!(value.get("uploadedAt").is_some());
    }
}
