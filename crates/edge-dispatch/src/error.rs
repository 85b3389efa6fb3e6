//! Dispatch errors.

use edge_core::ResponseError;
use edge_router::ClassifyError;

/// Errors that escape a dispatch.
///
/// Render failures never appear here; they are recovered through the
/// error page.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("route classification failed: {0}")]
    Classify(#[from] ClassifyError),

    #[error("response error: {0}")]
    Response(#[from] ResponseError),
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
