//! service-core: Shared infrastructure for the lexdash workspace.
pub mod error;
pub mod middleware;
pub mod observability;
