//! Collaborators the dispatcher calls out to.

use std::sync::Arc;

use async_trait::async_trait;
use edge_core::{Event, IncomingRequest, PageManifest, RenderRoute, Response, RoutesManifest, StaticRoute};

/// How `render_req_to_html` should treat the response.
///
/// Dispatch only ever asks for render output; the response is written by
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Produce render output without writing the response.
    Passthrough,
}

/// Options produced while rendering a page.
#[derive(Debug, Clone, Default)]
pub struct RenderOpts {
    /// Props handed to the page, served as the body of data requests.
    pub page_data: serde_json::Value,
}

/// Result of `render_req_to_html`.
#[derive(Debug, Clone, Default)]
pub struct RenderOutput {
    /// Rendered markup, absent in passthrough mode.
    pub html: Option<String>,
    pub render_opts: RenderOpts,
}

/// A loaded page bundle.
#[async_trait]
pub trait Page: Send + Sync {
    /// Render the full page into `res`.
    async fn render(&self, req: &IncomingRequest, res: &Response) -> anyhow::Result<()>;

    /// Render and return the output instead of (or as well as) writing it.
    async fn render_req_to_html(
        &self,
        req: &IncomingRequest,
        res: &Response,
        mode: RenderMode,
    ) -> anyhow::Result<RenderOutput>;
}

/// Resolves page identifiers (e.g. `/blog/[slug]`) to page bundles.
#[async_trait]
pub trait PageLoader: Send + Sync {
    async fn get_page(&self, page: &str) -> anyhow::Result<Arc<dyn Page>>;
}

/// Serves previously generated artifacts.
#[async_trait]
pub trait FileFetcher: Send + Sync {
    /// Serve the artifact for `route`. `Ok(true)` means the response was
    /// fully served.
    async fn get_file(&self, event: &Event, route: &StaticRoute) -> anyhow::Result<bool>;
}

/// Everything `handle_default` needs from its host.
pub trait Handler: PageLoader + FileFetcher {}

impl<T: PageLoader + FileFetcher + ?Sized> Handler for T {}

/// Last-resort handling for a failed render.
#[async_trait]
pub trait ErrorPageRenderer: Send + Sync {
    /// Handle `error` raised while rendering `route`.
    ///
    /// Either writes an error response and returns `None`, or returns a
    /// static error page for the caller to serve. Called at most once per
    /// request and never retried.
    async fn render_error_page(
        &self,
        error: anyhow::Error,
        event: &mut Event,
        route: &RenderRoute,
        page_manifest: &PageManifest,
        routes_manifest: &RoutesManifest,
        page_loader: &dyn PageLoader,
    ) -> Option<StaticRoute>;
}
