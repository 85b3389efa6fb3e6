//! Serving previously generated artifacts for fallback/revalidate routes.

use edge_core::{Event, StaticRoute};
use tracing::debug;

use crate::handler::FileFetcher;

/// Try to serve the artifact for `route`.
///
/// Returns `true` when the fetcher fully served the response. A missing
/// artifact or a fetch error both return `false`, leaving generation to
/// the caller.
pub async fn resolve_static(event: &Event, route: &StaticRoute, file_fetcher: &dyn FileFetcher) -> bool {
    match file_fetcher.get_file(event, route).await {
        Ok(served) => {
            if !served {
                debug!(request_id = %event.request_id, file = %route.file, "artifact not served");
            }
            served
        }
        Err(error) => {
            debug!(
                request_id = %event.request_id,
                file = %route.file,
                error = %error,
                "artifact fetch failed"
            );
            false
        }
    }
}
