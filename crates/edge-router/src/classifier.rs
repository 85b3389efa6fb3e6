//! Route classification: request + manifests → exactly one [`Route`].

use async_trait::async_trait;
use edge_core::{
    ExternalRoute, Fallback, PageManifest, PrerenderManifest, PublicFileRoute, RedirectRoute,
    RenderRoute, Request, Route, RoutesManifest, StaticRoute,
};
use http::StatusCode;
use serde::Deserialize;

use crate::auth::check_basic_auth;
use crate::locale::{add_default_locale_to_path, remove_locale_from_path};
use crate::pattern::{interpolate, MissingParam, PathPattern};

/// Errors from route classification. Fatal for the request.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("invalid destination for rule {rule}: {reason}")]
    InvalidDestination {
        rule: String,
        #[source]
        reason: MissingParam,
    },

    #[error("classifier error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Maps a normalized request plus manifests to a route.
#[async_trait]
pub trait RouteClassifier: Send + Sync {
    async fn classify(
        &self,
        request: &Request,
        page_manifest: &PageManifest,
        prerender_manifest: &PrerenderManifest,
        routes_manifest: &RoutesManifest,
    ) -> Result<Route, ClassifyError>;
}

/// Conventions of the build output the classifier relies on.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierOptions {
    /// Prefix of page-data requests: `<prefix>/<build id>/<page>.json`.
    pub data_prefix: String,
    /// Prefix of hashed build assets.
    pub static_prefix: String,
    /// Page rendered for unknown routes when no static 404 exists.
    pub error_page: String,
    /// Cookie that bypasses prerendered pages.
    pub preview_cookie: String,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            data_prefix: "/_next/data".to_string(),
            static_prefix: "/_next/static".to_string(),
            error_page: "/_error".to_string(),
            preview_cookie: "__prerender_bypass".to_string(),
        }
    }
}

impl ClassifierOptions {
    /// Set the page-data prefix.
    pub fn with_data_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.data_prefix = prefix.into();
        self
    }

    /// Set the build asset prefix.
    pub fn with_static_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.static_prefix = prefix.into();
        self
    }

    /// Set the error page.
    pub fn with_error_page(mut self, page: impl Into<String>) -> Self {
        self.error_page = page.into();
        self
    }
}

/// Default classifier reading the page, prerender and routes manifests.
///
/// Checks, in order: basic auth, trailing-slash canonicalization, redirect
/// rules, public files, build assets, then page lookup (static pages,
/// prerendered pages, server-rendered pages, rewrites, dynamic routes,
/// not-found).
#[derive(Debug, Clone, Default)]
pub struct ManifestClassifier {
    options: ClassifierOptions,
}

/// Manifests and request facts threaded through page lookup.
struct Lookup<'a> {
    page: &'a PageManifest,
    prerender: &'a PrerenderManifest,
    routes: &'a RoutesManifest,
    is_data: bool,
    preview: bool,
}

impl ManifestClassifier {
    /// Create a classifier with the given options.
    pub fn new(options: ClassifierOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    fn is_internal(&self, path: &str) -> bool {
        path.starts_with(&self.options.data_prefix) || path.starts_with(&self.options.static_prefix)
    }

    fn trailing_slash_redirect(&self, uri: &str, page: &PageManifest) -> Option<String> {
        let last = uri.rsplit('/').find(|s| !s.is_empty()).unwrap_or_default();
        if uri == "/"
            || self.is_internal(uri)
            || last.contains('.')
            || page.public_files.contains_key(uri)
        {
            return None;
        }

        if page.trailing_slash && !uri.ends_with('/') {
            Some(format!("{}/", uri))
        } else if !page.trailing_slash && uri.ends_with('/') {
            let trimmed = uri.trim_end_matches('/');
            Some(if trimmed.is_empty() { "/".to_string() } else { trimmed.to_string() })
        } else {
            None
        }
    }

    fn redirect_rule(
        &self,
        uri: &str,
        querystring: Option<&str>,
        routes: &RoutesManifest,
    ) -> Result<Option<RedirectRoute>, ClassifyError> {
        for rule in &routes.redirects {
            let Some(params) = PathPattern::parse(&rule.source).matches(uri) else {
                continue;
            };
            let destination =
                interpolate(&rule.destination, &params).map_err(|reason| {
                    ClassifyError::InvalidDestination {
                        rule: rule.source.clone(),
                        reason,
                    }
                })?;
            let status = rule
                .status_code
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(if rule.permanent {
                    StatusCode::PERMANENT_REDIRECT
                } else {
                    StatusCode::TEMPORARY_REDIRECT
                });
            return Ok(Some(RedirectRoute::new(
                append_query(&destination, querystring),
                status,
            )));
        }
        Ok(None)
    }

    /// `<data_prefix>/<build id>/<page>.json` → `/<page>`.
    fn data_page_path(&self, uri: &str, build_id: &str) -> Option<String> {
        let inner = uri
            .strip_prefix(&self.options.data_prefix)?
            .strip_prefix('/')?
            .strip_prefix(build_id)?
            .strip_prefix('/')?
            .strip_suffix(".json")?;
        Some(if inner == "index" {
            "/".to_string()
        } else {
            format!("/{}", inner)
        })
    }

    fn is_preview(&self, request: &Request, prerender: &PrerenderManifest) -> bool {
        let id = &prerender.preview.preview_mode_id;
        !id.is_empty() && request.cookie(&self.options.preview_cookie) == Some(id.as_str())
    }

    /// Localized then unlocalized spelling of a page path.
    fn candidates(path: &str, routes: &RoutesManifest) -> Vec<String> {
        let localized = add_default_locale_to_path(path, routes, None);
        let plain = remove_locale_from_path(path, routes);
        if localized == plain {
            vec![localized]
        } else {
            vec![localized, plain]
        }
    }

    fn resolve_page(&self, path: &str, lookup: &Lookup<'_>) -> Result<Route, ClassifyError> {
        let candidates = Self::candidates(path, lookup.routes);

        if let Some(route) = candidates.iter().find_map(|c| self.non_dynamic(c, lookup)) {
            return Ok(route);
        }

        for rule in &lookup.routes.rewrites {
            let Some(params) = PathPattern::parse(&rule.source).matches(path) else {
                continue;
            };
            let destination =
                interpolate(&rule.destination, &params).map_err(|reason| {
                    ClassifyError::InvalidDestination {
                        rule: rule.source.clone(),
                        reason,
                    }
                })?;
            let (target, querystring) = match destination.split_once('?') {
                Some((target, qs)) => (target.to_string(), Some(qs.to_string())),
                None => (destination, None),
            };

            if target.starts_with("http://") || target.starts_with("https://") {
                return Ok(Route::External(ExternalRoute {
                    url: target,
                    querystring,
                }));
            }

            let rewritten = Self::candidates(&target, lookup.routes)
                .iter()
                .find_map(|c| self.non_dynamic(c, lookup).or_else(|| self.dynamic(c, lookup)));
            if let Some(route) = rewritten {
                return Ok(with_querystring(route, querystring));
            }
        }

        if let Some(route) = candidates.iter().find_map(|c| self.dynamic(c, lookup)) {
            return Ok(route);
        }

        Ok(self.not_found(lookup))
    }

    fn ssg_file(path: &str, lookup: &Lookup<'_>) -> String {
        let name = if path == "/" { "/index" } else { path.trim_end_matches('/') };
        if lookup.is_data {
            format!("_next/data/{}{}.json", lookup.page.build_id, name)
        } else {
            format!("pages{}.html", name)
        }
    }

    fn non_dynamic(&self, path: &str, lookup: &Lookup<'_>) -> Option<Route> {
        let pages = &lookup.page.pages;

        if !lookup.is_data {
            if let Some(file) = pages.html.non_dynamic.get(path) {
                return Some(Route::Static(StaticRoute::new(file.clone()).with_page(path)));
            }
        }

        if let Some(ssg) = pages.ssg.non_dynamic.get(path) {
            let src = ssg.src_route.clone().unwrap_or_else(|| path.to_string());
            if lookup.preview {
                return Some(Route::Render(render(&src, lookup.is_data)));
            }

            let revalidate = lookup
                .prerender
                .routes
                .get(path)
                .and_then(|r| r.initial_revalidate_seconds)
                .or(ssg.initial_revalidate_seconds);
            let mut route = StaticRoute::new(Self::ssg_file(path, lookup)).with_page(src);
            route.is_data = lookup.is_data;
            route.revalidate = revalidate;
            return Some(Route::Static(route));
        }

        pages
            .ssr
            .non_dynamic
            .contains_key(path)
            .then(|| Route::Render(render(path, lookup.is_data)))
    }

    fn dynamic(&self, path: &str, lookup: &Lookup<'_>) -> Option<Route> {
        enum Kind<'m> {
            Ssg(&'m Fallback),
            Html(&'m String),
            Ssr,
        }

        let pages = &lookup.page.pages;
        let ssg = pages.ssg.dynamic.iter().map(|(route, entry)| {
            let fallback = lookup
                .prerender
                .dynamic_routes
                .get(route)
                .map_or(&entry.fallback, |r| &r.fallback);
            (route, Kind::Ssg(fallback))
        });
        let html = pages
            .html
            .dynamic
            .iter()
            .filter(|_| !lookup.is_data)
            .map(|(route, file)| (route, Kind::Html(file)));
        let ssr = pages.ssr.dynamic.keys().map(|route| (route, Kind::Ssr));

        let mut best: Option<((bool, usize, usize), &String, Kind<'_>)> = None;
        for (route, kind) in ssg.chain(html).chain(ssr) {
            let pattern = PathPattern::parse(route);
            if pattern.matches(path).is_none() {
                continue;
            }
            let rank = pattern.rank();
            if best.as_ref().map_or(true, |(r, _, _)| rank > *r) {
                best = Some((rank, route, kind));
            }
        }

        let (_, route, kind) = best?;
        Some(match kind {
            Kind::Ssg(_) if lookup.preview => Route::Render(render(route, lookup.is_data)),
            Kind::Ssg(fallback) => {
                let mut out = StaticRoute::new(Self::ssg_file(path, lookup))
                    .with_page(route.clone())
                    .with_fallback(fallback.clone());
                out.is_data = lookup.is_data;
                out.revalidate = lookup
                    .prerender
                    .routes
                    .get(path)
                    .and_then(|r| r.initial_revalidate_seconds);
                Route::Static(out)
            }
            Kind::Html(file) => Route::Static(StaticRoute::new(file.clone()).with_page(route.clone())),
            Kind::Ssr => Route::Render(render(route, lookup.is_data)),
        })
    }

    fn not_found(&self, lookup: &Lookup<'_>) -> Route {
        if !lookup.is_data {
            let html = &lookup.page.pages.html.non_dynamic;
            let static_404 = Self::candidates("/404", lookup.routes)
                .into_iter()
                .find_map(|c| html.get(&c).map(|file| (c, file)));
            if let Some((page, file)) = static_404 {
                return Route::Static(
                    StaticRoute::new(file.clone())
                        .with_page(page)
                        .with_status(StatusCode::NOT_FOUND),
                );
            }
        }

        Route::Render(render(&self.options.error_page, lookup.is_data).with_status(StatusCode::NOT_FOUND))
    }
}

#[async_trait]
impl RouteClassifier for ManifestClassifier {
    async fn classify(
        &self,
        request: &Request,
        page_manifest: &PageManifest,
        prerender_manifest: &PrerenderManifest,
        routes_manifest: &RoutesManifest,
    ) -> Result<Route, ClassifyError> {
        if let Some(route) = check_basic_auth(
            request.header("authorization"),
            page_manifest.authentication.as_ref(),
        ) {
            return Ok(Route::Unauthorized(route));
        }

        let uri = request.uri.as_str();
        let querystring = request.querystring.as_deref();

        if let Some(target) = self.trailing_slash_redirect(uri, page_manifest) {
            return Ok(Route::Redirect(RedirectRoute::new(
                append_query(&target, querystring),
                StatusCode::PERMANENT_REDIRECT,
            )));
        }

        if let Some(redirect) = self.redirect_rule(uri, querystring, routes_manifest)? {
            return Ok(Route::Redirect(redirect));
        }

        if let Some(file) = page_manifest.public_files.get(uri) {
            return Ok(Route::PublicFile(PublicFileRoute { file: file.clone() }));
        }

        let path = strip_base_path(uri, &routes_manifest.base_path);

        if path.starts_with(&self.options.static_prefix) {
            return Ok(Route::Static(StaticRoute::new(path.trim_start_matches('/'))));
        }

        let mut lookup = Lookup {
            page: page_manifest,
            prerender: prerender_manifest,
            routes: routes_manifest,
            is_data: false,
            preview: self.is_preview(request, prerender_manifest),
        };

        if let Some(page_path) = self.data_page_path(path, &page_manifest.build_id) {
            lookup.is_data = true;
            return self.resolve_page(&page_path, &lookup);
        }

        self.resolve_page(path, &lookup)
    }
}

fn render(page: &str, is_data: bool) -> RenderRoute {
    if is_data {
        RenderRoute::data(page)
    } else {
        RenderRoute::new(page)
    }
}

fn with_querystring(route: Route, querystring: Option<String>) -> Route {
    match route {
        Route::Render(r) => Route::Render(RenderRoute { querystring, ..r }),
        Route::Static(r) => Route::Static(StaticRoute { querystring, ..r }),
        other => other,
    }
}

fn append_query(target: &str, querystring: Option<&str>) -> String {
    match querystring.filter(|qs| !qs.is_empty()) {
        Some(qs) if target.contains('?') => format!("{}&{}", target, qs),
        Some(qs) => format!("{}?{}", target, qs),
        None => target.to_string(),
    }
}

fn strip_base_path<'a>(uri: &'a str, base_path: &str) -> &'a str {
    if base_path.is_empty() {
        return uri;
    }
    match uri.strip_prefix(base_path) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => uri,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine};
    use edge_core::{
        Authentication, DynamicSsgRoute, I18nConfig, IncomingRequest, PreviewSettings,
        RedirectRule, RewriteRule, SsgRoute,
    };
    use std::time::Duration;

    fn page_manifest() -> PageManifest {
        let mut page = PageManifest {
            build_id: "build-1".into(),
            ..Default::default()
        };
        let pages = &mut page.pages;
        pages.html.non_dynamic.insert("/terms".into(), "pages/terms.html".into());
        pages.html.non_dynamic.insert("/404".into(), "pages/404.html".into());
        pages.html.dynamic.insert("/legal/[doc]".into(), "pages/legal/[doc].html".into());
        pages.ssr.non_dynamic.insert("/".into(), "pages/index.js".into());
        pages.ssr.non_dynamic.insert("/account".into(), "pages/account.js".into());
        pages.ssr.dynamic.insert("/blog/[slug]".into(), "pages/blog/[slug].js".into());
        pages.ssr.dynamic.insert("/[...all]".into(), "pages/[...all].js".into());
        pages.ssg.non_dynamic.insert(
            "/pricing".into(),
            SsgRoute {
                initial_revalidate_seconds: Some(Duration::from_secs(60)),
                src_route: None,
            },
        );
        pages.ssg.dynamic.insert(
            "/products/[id]".into(),
            DynamicSsgRoute {
                fallback: Fallback::Blocking,
            },
        );
        page.public_files.insert("/favicon.ico".into(), "favicon.ico".into());
        page
    }

    async fn classify_with(
        req: IncomingRequest,
        page: &PageManifest,
        prerender: &PrerenderManifest,
        routes: &RoutesManifest,
    ) -> Route {
        ManifestClassifier::default()
            .classify(&Request::from_incoming(&req), page, prerender, routes)
            .await
            .unwrap()
    }

    async fn classify(url: &str) -> Route {
        classify_with(
            IncomingRequest::get(url),
            &page_manifest(),
            &PrerenderManifest::default(),
            &RoutesManifest::default(),
        )
        .await
    }

    #[tokio::test]
    async fn test_ssr_page() {
        assert_eq!(classify("/account").await, Route::Render(RenderRoute::new("/account")));
        assert_eq!(classify("/").await, Route::Render(RenderRoute::new("/")));
    }

    #[tokio::test]
    async fn test_dynamic_ssr_prefers_specific() {
        assert_eq!(
            classify("/blog/post").await,
            Route::Render(RenderRoute::new("/blog/[slug]"))
        );
        assert_eq!(
            classify("/anything/else").await,
            Route::Render(RenderRoute::new("/[...all]"))
        );
    }

    #[tokio::test]
    async fn test_static_html() {
        let Route::Static(route) = classify("/terms").await else {
            panic!("expected static route");
        };
        assert_eq!(route.file, "pages/terms.html");
        assert!(!route.needs_resolution());

        let Route::Static(dynamic) = classify("/legal/privacy").await else {
            panic!("expected static route");
        };
        assert_eq!(dynamic.file, "pages/legal/[doc].html");
    }

    #[tokio::test]
    async fn test_isr_page_has_revalidate() {
        let Route::Static(route) = classify("/pricing").await else {
            panic!("expected static route");
        };
        assert_eq!(route.file, "pages/pricing.html");
        assert_eq!(route.revalidate, Some(Duration::from_secs(60)));
        assert!(route.needs_resolution());
    }

    #[tokio::test]
    async fn test_dynamic_ssg_has_fallback() {
        let Route::Static(route) = classify("/products/42").await else {
            panic!("expected static route");
        };
        assert_eq!(route.file, "pages/products/42.html");
        assert_eq!(route.page.as_deref(), Some("/products/[id]"));
        assert_eq!(route.fallback, Some(Fallback::Blocking));
    }

    #[tokio::test]
    async fn test_data_request() {
        assert_eq!(
            classify("/_next/data/build-1/account.json").await,
            Route::Render(RenderRoute::data("/account"))
        );

        let Route::Static(route) = classify("/_next/data/build-1/pricing.json").await else {
            panic!("expected static route");
        };
        assert!(route.is_data);
        assert_eq!(route.file, "_next/data/build-1/pricing.json");
    }

    #[tokio::test]
    async fn test_public_and_build_assets() {
        assert_eq!(
            classify("/favicon.ico").await,
            Route::PublicFile(PublicFileRoute {
                file: "favicon.ico".into()
            })
        );

        let Route::Static(asset) = classify("/_next/static/chunks/main.js").await else {
            panic!("expected static route");
        };
        assert_eq!(asset.file, "_next/static/chunks/main.js");
    }

    #[tokio::test]
    async fn test_not_found_uses_static_404() {
        let mut page = page_manifest();
        page.pages.ssr.dynamic.remove("/[...all]");
        let route = classify_with(
            IncomingRequest::get("/missing"),
            &page,
            &PrerenderManifest::default(),
            &RoutesManifest::default(),
        )
        .await;

        let Route::Static(route) = route else {
            panic!("expected static route");
        };
        assert_eq!(route.file, "pages/404.html");
        assert_eq!(route.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_not_found_renders_error_page() {
        let route = classify_with(
            IncomingRequest::get("/missing"),
            &PageManifest::default(),
            &PrerenderManifest::default(),
            &RoutesManifest::default(),
        )
        .await;

        assert_eq!(
            route,
            Route::Render(RenderRoute::new("/_error").with_status(StatusCode::NOT_FOUND))
        );
    }

    #[tokio::test]
    async fn test_trailing_slash_redirect() {
        let Route::Redirect(route) = classify("/account/?a=1").await else {
            panic!("expected redirect");
        };
        assert_eq!(route.target, "/account?a=1");
        assert_eq!(route.status, StatusCode::PERMANENT_REDIRECT);

        let mut page = page_manifest();
        page.trailing_slash = true;
        let route = classify_with(
            IncomingRequest::get("/account"),
            &page,
            &PrerenderManifest::default(),
            &RoutesManifest::default(),
        )
        .await;
        let Route::Redirect(route) = route else {
            panic!("expected redirect");
        };
        assert_eq!(route.target, "/account/");
    }

    #[tokio::test]
    async fn test_redirect_rule() {
        let routes = RoutesManifest {
            redirects: vec![RedirectRule {
                source: "/old/:slug".into(),
                destination: "/blog/:slug".into(),
                status_code: None,
                permanent: false,
            }],
            ..Default::default()
        };
        let route = classify_with(
            IncomingRequest::get("/old/post?ref=x"),
            &page_manifest(),
            &PrerenderManifest::default(),
            &routes,
        )
        .await;

        let Route::Redirect(route) = route else {
            panic!("expected redirect");
        };
        assert_eq!(route.target, "/blog/post?ref=x");
        assert_eq!(route.status, StatusCode::TEMPORARY_REDIRECT);
    }

    #[tokio::test]
    async fn test_rewrites() {
        let routes = RoutesManifest {
            rewrites: vec![
                RewriteRule {
                    source: "/api/:path*".into(),
                    destination: "https://api.example.com/:path*".into(),
                },
                RewriteRule {
                    source: "/me".into(),
                    destination: "/account?tab=profile".into(),
                },
            ],
            ..Default::default()
        };
        let page = page_manifest();
        let prerender = PrerenderManifest::default();

        let external = classify_with(IncomingRequest::get("/api/users/1"), &page, &prerender, &routes).await;
        assert_eq!(
            external,
            Route::External(ExternalRoute {
                url: "https://api.example.com/users/1".into(),
                querystring: None,
            })
        );

        let internal = classify_with(IncomingRequest::get("/me"), &page, &prerender, &routes).await;
        assert_eq!(
            internal,
            Route::Render(RenderRoute::new("/account").with_querystring("tab=profile"))
        );
    }

    #[tokio::test]
    async fn test_preview_cookie_renders_ssg() {
        let prerender = PrerenderManifest {
            preview: PreviewSettings {
                preview_mode_id: "secret".into(),
            },
            ..Default::default()
        };
        let req = IncomingRequest::get("/pricing").with_header("Cookie", "__prerender_bypass=secret");
        let route = classify_with(req, &page_manifest(), &prerender, &RoutesManifest::default()).await;

        assert_eq!(route, Route::Render(RenderRoute::new("/pricing")));
    }

    #[tokio::test]
    async fn test_basic_auth() {
        let mut page = page_manifest();
        page.authentication = Some(Authentication {
            username: "u".into(),
            password: "p".into(),
        });
        let prerender = PrerenderManifest::default();
        let routes = RoutesManifest::default();

        let denied = classify_with(IncomingRequest::get("/account"), &page, &prerender, &routes).await;
        assert!(matches!(denied, Route::Unauthorized(_)));

        let header = format!("Basic {}", STANDARD.encode("u:p"));
        let req = IncomingRequest::get("/account").with_header("Authorization", &header);
        let allowed = classify_with(req, &page, &prerender, &routes).await;
        assert_eq!(allowed, Route::Render(RenderRoute::new("/account")));
    }

    #[tokio::test]
    async fn test_localized_lookup() {
        let mut page = page_manifest();
        page.pages.html.non_dynamic.insert("/fr/terms".into(), "pages/fr/terms.html".into());
        let routes = RoutesManifest {
            i18n: Some(I18nConfig {
                locales: vec!["en".into(), "fr".into()],
                default_locale: "en".into(),
            }),
            ..Default::default()
        };
        let prerender = PrerenderManifest::default();

        let Route::Static(fr) = classify_with(IncomingRequest::get("/fr/terms"), &page, &prerender, &routes).await else {
            panic!("expected static route");
        };
        assert_eq!(fr.file, "pages/fr/terms.html");

        let Route::Static(en) = classify_with(IncomingRequest::get("/terms"), &page, &prerender, &routes).await else {
            panic!("expected static route");
        };
        assert_eq!(en.file, "pages/terms.html");

        let ssr = classify_with(IncomingRequest::get("/en/account"), &page, &prerender, &routes).await;
        assert_eq!(ssr, Route::Render(RenderRoute::new("/account")));
    }

    #[test]
    fn test_helpers() {
        assert_eq!(append_query("/a", Some("x=1")), "/a?x=1");
        assert_eq!(append_query("/a?y=2", Some("x=1")), "/a?y=2&x=1");
        assert_eq!(append_query("/a", None), "/a");
        assert_eq!(strip_base_path("/app/x", "/app"), "/x");
        assert_eq!(strip_base_path("/app", "/app"), "/");
        assert_eq!(strip_base_path("/apple", "/app"), "/apple");
    }
}
