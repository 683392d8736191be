pub mod document;

pub use document::{Clause, ClauseKind, Document, DocumentStatus, StatusIndicator};
