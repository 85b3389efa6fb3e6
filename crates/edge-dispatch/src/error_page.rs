//! Default handling of failed renders.

use async_trait::async_trait;
use edge_core::{Event, PageManifest, RenderRoute, RoutesManifest, StaticRoute};
use edge_router::add_default_locale_to_path;
use http::StatusCode;
use tracing::{error, warn};

use crate::handler::{ErrorPageRenderer, PageLoader};

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Serves a static `/500` page when the build has one, otherwise renders
/// the error page in place.
///
/// Single attempt: a failure while rendering the error page ends the
/// response with a plain-text 500 and is not retried.
#[derive(Debug, Clone)]
pub struct DefaultErrorPage {
    error_page: String,
}

impl Default for DefaultErrorPage {
    fn default() -> Self {
        Self::new("/_error")
    }
}

impl DefaultErrorPage {
    /// Render `error_page` for failures without a static `/500`.
    pub fn new(error_page: impl Into<String>) -> Self {
        Self {
            error_page: error_page.into(),
        }
    }

    fn static_500(page_manifest: &PageManifest, routes_manifest: &RoutesManifest) -> Option<StaticRoute> {
        let html = &page_manifest.pages.html.non_dynamic;
        let localized = add_default_locale_to_path("/500", routes_manifest, None);
        let found = [localized.as_str(), "/500"]
            .into_iter()
            .find_map(|page| html.get(page).map(|file| (page, file)))
            .map(|(page, file)| {
                StaticRoute::new(file.clone())
                    .with_page(page)
                    .with_status(StatusCode::INTERNAL_SERVER_ERROR)
            });
        found
    }

    async fn render_in_place(&self, event: &Event, page_loader: &dyn PageLoader) -> anyhow::Result<()> {
        event.res.set_status(StatusCode::INTERNAL_SERVER_ERROR)?;
        let page = page_loader.get_page(&self.error_page).await?;

        let mut completion = event.completion();
        tokio::select! {
            biased;
            _ = completion.wait() => Ok(()),
            result = page.render(&event.req, &event.res) => {
                if completion.is_complete() { Ok(()) } else { result }
            }
        }
    }
}

#[async_trait]
impl ErrorPageRenderer for DefaultErrorPage {
    async fn render_error_page(
        &self,
        err: anyhow::Error,
        event: &mut Event,
        route: &RenderRoute,
        page_manifest: &PageManifest,
        routes_manifest: &RoutesManifest,
        page_loader: &dyn PageLoader,
    ) -> Option<StaticRoute> {
        error!(
            request_id = %event.request_id,
            page = %route.page,
            error = %format!("{:#}", err),
            "page render failed"
        );

        if event.res.is_finished() {
            return None;
        }

        if let Some(route) = Self::static_500(page_manifest, routes_manifest) {
            return Some(route);
        }

        if let Err(err) = self.render_in_place(event, page_loader).await {
            warn!(
                request_id = %event.request_id,
                page = %self.error_page,
                error = %format!("{:#}", err),
                "error page failed"
            );
            if !event.res.is_finished() {
                // Headers are frozen once a partial body went out.
                let _ = event.res.set_status(StatusCode::INTERNAL_SERVER_ERROR);
                if let Err(err) = event.res.end_with(INTERNAL_SERVER_ERROR) {
                    warn!(request_id = %event.request_id, error = %err, "could not end response");
                }
            }
        }

        None
    }
}
