//! Per-request spans.

use edge_core::RequestId;
use http::Method;
use tracing::{field, Span};

/// Span wrapping one dispatch.
///
/// `route` and `status` start empty and are recorded once known.
pub fn request_span(request_id: &RequestId, method: &Method, uri: &str) -> Span {
    tracing::info_span!(
        "dispatch",
        request_id = %request_id,
        method = %method,
        uri = %uri,
        route = field::Empty,
        status = field::Empty,
    )
}
