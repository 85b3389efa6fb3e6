//! Server rendering of a page route.

use edge_core::{Event, PageManifest, RenderRoute, RoutesManifest, StaticRoute};
use edge_router::add_default_locale_to_path;
use tracing::debug;

use crate::error::DispatchResult;
use crate::handler::{ErrorPageRenderer, PageLoader, RenderMode};
use crate::headers::set_custom_headers;

/// Render `route` into the event's response.
///
/// Returns `Some` only when the error page asks the caller to serve a
/// static page instead. Render failures are handed to `error_pages` and
/// never returned; the only errors are response misuse while preparing
/// headers and status.
pub async fn render_route(
    event: &mut Event,
    route: &RenderRoute,
    page_manifest: &PageManifest,
    routes_manifest: &RoutesManifest,
    page_loader: &dyn PageLoader,
    error_pages: &dyn ErrorPageRenderer,
) -> DispatchResult<Option<StaticRoute>> {
    set_custom_headers(event, routes_manifest)?;

    // Localized pages resolve from a locale-qualified URL.
    if routes_manifest.i18n.is_some() {
        if let Some(url) = event.req.url.as_deref() {
            event.req.url = Some(localize_url(url, routes_manifest));
        }
    }

    if let Some(status) = route.status_code {
        event.res.set_status(status)?;
    }

    match render_page(event, route, page_loader).await {
        Ok(()) => Ok(None),
        Err(error) => Ok(error_pages
            .render_error_page(error, event, route, page_manifest, routes_manifest, page_loader)
            .await),
    }
}

async fn render_page(
    event: &Event,
    route: &RenderRoute,
    page_loader: &dyn PageLoader,
) -> anyhow::Result<()> {
    let page = page_loader.get_page(&route.page).await?;

    if route.is_data {
        let output = page
            .render_req_to_html(&event.req, &event.res, RenderMode::Passthrough)
            .await?;
        let body = serde_json::to_vec(&output.render_opts.page_data)?;
        event.res.set_header("Content-Type", "application/json")?;
        event.res.end_with(body)?;
        return Ok(());
    }

    let mut completion = event.completion();
    tokio::select! {
        biased;
        _ = completion.wait() => {
            debug!(request_id = %event.request_id, page = %route.page, "response completed before render");
            Ok(())
        }
        result = page.render(&event.req, &event.res) => {
            if result.is_err() && completion.is_complete() {
                debug!(request_id = %event.request_id, page = %route.page, "render failed after response completed");
                return Ok(());
            }
            result
        }
    }
}

/// Add the default locale to the path of `url`, keeping its query string.
fn localize_url(url: &str, routes_manifest: &RoutesManifest) -> String {
    match url.split_once('?') {
        Some((path, query)) => format!(
            "{}?{}",
            add_default_locale_to_path(path, routes_manifest, None),
            query
        ),
        None => add_default_locale_to_path(url, routes_manifest, None),
    }
}
