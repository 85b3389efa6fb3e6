//! Dispatch orchestration: classify a request and run its strategy.

use std::sync::Arc;

use edge_core::{
    Event, ExternalRoute, Manifests, PageManifest, PrerenderManifest, PublicFileRoute, Request,
    Route, RouteKind, RoutesManifest, StaticRoute,
};
use edge_observability::{request_span, DispatchOutcome, MetricsCollector};
use edge_router::{ManifestClassifier, RouteClassifier};
use tracing::{debug, Instrument};

use crate::config::DispatchConfig;
use crate::deadline::arm_deadline;
use crate::error::DispatchResult;
use crate::error_page::DefaultErrorPage;
use crate::handler::{ErrorPageRenderer, Handler};
use crate::redirect::redirect;
use crate::render::render_route;
use crate::static_route::resolve_static;
use crate::unauthorized::unauthorized;

/// What the caller still has to do after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// The response has been written, or will be finalized through the
    /// event's completion signal.
    Handled,
    /// Proxy to an external URL.
    External(ExternalRoute),
    /// Serve a public file.
    PublicFile(PublicFileRoute),
    /// Serve or generate a static page.
    Static(StaticRoute),
}

impl Dispatched {
    /// Whether the dispatcher took care of the response.
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }

    /// Metrics outcome for this result.
    pub fn outcome(&self) -> DispatchOutcome {
        match self {
            Self::Handled => DispatchOutcome::Handled,
            Self::External(_) => DispatchOutcome::External,
            Self::PublicFile(_) => DispatchOutcome::PublicFile,
            Self::Static(_) => DispatchOutcome::Static,
        }
    }
}

/// Dispatch one request with the default classifier and error page.
///
/// Returns [`Dispatched::Handled`] when the response is finalized (or
/// will be, through the event's completion signal); any other variant is
/// a route the caller must still serve.
pub async fn handle_default<H: Handler>(
    event: &mut Event,
    page_manifest: &PageManifest,
    prerender_manifest: &PrerenderManifest,
    routes_manifest: &RoutesManifest,
    handler: &H,
) -> DispatchResult<Dispatched> {
    let manifests = ManifestRefs {
        page: page_manifest,
        prerender: prerender_manifest,
        routes: routes_manifest,
    };
    let (_, result) = run(
        event,
        manifests,
        &ManifestClassifier::default(),
        &DefaultErrorPage::default(),
        handler,
    )
    .await;
    result
}

#[derive(Clone, Copy)]
struct ManifestRefs<'a> {
    page: &'a PageManifest,
    prerender: &'a PrerenderManifest,
    routes: &'a RoutesManifest,
}

async fn run<H: Handler>(
    event: &mut Event,
    manifests: ManifestRefs<'_>,
    classifier: &dyn RouteClassifier,
    error_pages: &dyn ErrorPageRenderer,
    handler: &H,
) -> (Option<RouteKind>, DispatchResult<Dispatched>) {
    let request = Request::from_event(event);
    let route = match classifier
        .classify(&request, manifests.page, manifests.prerender, manifests.routes)
        .await
    {
        Ok(route) => route,
        Err(err) => return (None, Err(err.into())),
    };
    let kind = route.kind();
    debug!(request_id = %event.request_id, route = %kind, "classified");

    if let Some(querystring) = route.querystring() {
        let separator = if request.querystring.is_some() { '&' } else { '?' };
        let url = event.req.url.as_deref().unwrap_or_default();
        event.req.url = Some(format!("{}{}{}", url, separator, querystring));
    }

    let result = match route {
        Route::Redirect(route) => redirect(event, &route).map(|()| Dispatched::Handled),
        Route::Render(route) => render_route(
            event,
            &route,
            manifests.page,
            manifests.routes,
            handler,
            error_pages,
        )
        .await
        .map(|fallback| fallback.map_or(Dispatched::Handled, Dispatched::Static)),
        Route::Unauthorized(route) => unauthorized(event, &route).map(|()| Dispatched::Handled),
        Route::Static(route) => {
            if route.needs_resolution() && resolve_static(event, &route, handler).await {
                Ok(Dispatched::Handled)
            } else {
                Ok(Dispatched::Static(route))
            }
        }
        Route::PublicFile(route) => Ok(Dispatched::PublicFile(route)),
        Route::External(route) => Ok(Dispatched::External(route)),
    };

    (Some(kind), result)
}

/// Long-lived dispatcher sharing manifests and collaborators across
/// requests.
#[derive(Clone)]
pub struct Dispatcher {
    manifests: Arc<Manifests>,
    classifier: Arc<dyn RouteClassifier>,
    error_pages: Arc<dyn ErrorPageRenderer>,
    config: DispatchConfig,
}

impl Dispatcher {
    /// Create a dispatcher with default configuration.
    pub fn new(manifests: Arc<Manifests>) -> Self {
        Self::from_config(manifests, DispatchConfig::default())
    }

    /// Create a dispatcher whose classifier and error page follow `config`.
    pub fn from_config(manifests: Arc<Manifests>, config: DispatchConfig) -> Self {
        Self {
            manifests,
            classifier: Arc::new(ManifestClassifier::new(config.classifier.clone())),
            error_pages: Arc::new(DefaultErrorPage::new(config.classifier.error_page.clone())),
            config,
        }
    }

    /// Replace the route classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn RouteClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace the error page renderer.
    pub fn with_error_pages(mut self, error_pages: Arc<dyn ErrorPageRenderer>) -> Self {
        self.error_pages = error_pages;
        self
    }

    /// Get the manifests.
    pub fn manifests(&self) -> &Manifests {
        &self.manifests
    }

    /// Get the configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Dispatch one request.
    ///
    /// Runs inside a request span, guards the response with the configured
    /// render deadline, and records one metrics event.
    pub async fn dispatch<H: Handler>(&self, event: &mut Event, handler: &H) -> DispatchResult<Dispatched> {
        let span = request_span(&event.request_id, &event.req.method, event.req.path());
        let mut metrics = MetricsCollector::new(event.request_id.clone());
        let deadline = self
            .config
            .render
            .deadline()
            .map(|after| arm_deadline(event.res.clone(), after));

        let manifests = ManifestRefs {
            page: &self.manifests.page,
            prerender: &self.manifests.prerender,
            routes: &self.manifests.routes,
        };
        let (kind, result) = run(
            event,
            manifests,
            self.classifier.as_ref(),
            self.error_pages.as_ref(),
            handler,
        )
        .instrument(span.clone())
        .await;

        if let Some(deadline) = deadline {
            deadline.abort();
        }

        let status = event.res.status();
        if let Some(kind) = kind {
            metrics.set_route(kind);
            span.record("route", kind.as_str());
        }
        span.record("status", status.as_u16());

        let outcome = match &result {
            Ok(dispatched) => dispatched.outcome(),
            Err(err) => {
                span.in_scope(|| tracing::error!(error = %err, "dispatch failed"));
                DispatchOutcome::Failed
            }
        };
        span.in_scope(|| {
            metrics
                .finish(outcome, status.as_u16(), event.res.is_finished())
                .record()
        });

        result
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
