//! Observability infrastructure for the edge SSR dispatcher.
//!
//! This crate provides:
//! - `init_logging` - Installs the `tracing` subscriber (JSON or human output)
//! - `request_span` - Per-request span carrying the request ID
//! - `DispatchMetrics` - One timing/outcome record per dispatched request

mod logging;
mod metrics;
mod span;

pub use logging::*;
pub use metrics::*;
pub use span::*;

// Re-export RequestId from edge-core for convenience
pub use edge_core::RequestId;
