//! Per-request dispatch metrics.

use std::time::Instant;

use edge_core::{RequestId, RouteKind};
use serde::Serialize;

/// How a dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// The response was written (or is being finalized) by the dispatcher.
    Handled,
    /// A static route was handed back for on-demand generation.
    Static,
    /// A public file route was handed back to the caller.
    PublicFile,
    /// An external route was handed back to the caller.
    External,
    /// Dispatch returned an error.
    Failed,
}

impl DispatchOutcome {
    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Handled => "handled",
            Self::Static => "static",
            Self::PublicFile => "public_file",
            Self::External => "external",
            Self::Failed => "failed",
        }
    }
}

/// Metrics for a single dispatched request.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// Classified route kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<&'static str>,
    /// How dispatch ended.
    pub outcome: DispatchOutcome,
    /// Response status at the end of dispatch.
    pub status_code: u16,
    /// Whether the response had been ended when dispatch returned.
    pub response_finished: bool,
    /// Total dispatch duration (microseconds).
    pub duration_us: u64,
}

impl DispatchMetrics {
    /// Emit the record as a single log event.
    pub fn record(&self) {
        tracing::info!(
            target: "edge_dispatch::metrics",
            request_id = %self.request_id,
            route = self.route.unwrap_or("none"),
            outcome = self.outcome.as_str(),
            status = self.status_code,
            finished = self.response_finished,
            duration_us = self.duration_us,
            "dispatch complete"
        );
    }
}

/// Collector for dispatch metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    route: Option<RouteKind>,
    start: Instant,
}

impl MetricsCollector {
    /// Start timing a dispatch.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            route: None,
            start: Instant::now(),
        }
    }

    /// Record the classified route kind.
    pub fn set_route(&mut self, route: RouteKind) {
        self.route = Some(route);
    }

    /// Stop timing and build the record.
    pub fn finish(
        self,
        outcome: DispatchOutcome,
        status_code: u16,
        response_finished: bool,
    ) -> DispatchMetrics {
        DispatchMetrics {
            request_id: self.request_id.0,
            route: self.route.map(|r| r.as_str()),
            outcome,
            status_code,
            response_finished,
            duration_us: self.start.elapsed().as_micros() as u64,
        }
    }
}
