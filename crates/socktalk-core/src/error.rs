//! Store-level error types.

use thiserror::Error;

/// Errors surfaced by the post store port.
///
/// Handlers treat every variant as an internal failure; the variants exist
/// so the server-side log line says what actually went wrong.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Malformed post identifier: {0}")]
    MalformedId(String),
}
