//! Route classification outcomes.

use std::fmt;
use std::time::Duration;

use http::StatusCode;
use serde::Deserialize;

/// A single `key: value` header attached to a route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeaderEntry {
    /// Header name as it should be sent.
    pub key: String,
    /// Header value.
    pub value: String,
}

impl HeaderEntry {
    /// Create a header entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Server-render a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRoute {
    /// Page identifier as known to the page loader (e.g. `/blog/[slug]`).
    pub page: String,
    /// Whether only the page-data JSON was requested.
    pub is_data: bool,
    /// Status to set before rendering (error pages).
    pub status_code: Option<StatusCode>,
    /// Query string to append to the request URL before rendering.
    pub querystring: Option<String>,
}

impl RenderRoute {
    /// Render `page` as a full HTML page.
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            is_data: false,
            status_code: None,
            querystring: None,
        }
    }

    /// Render `page` as a page-data JSON request.
    pub fn data(page: impl Into<String>) -> Self {
        Self {
            is_data: true,
            ..Self::new(page)
        }
    }

    /// Force a status code.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = Some(status);
        self
    }

    /// Attach a supplemental query string.
    pub fn with_querystring(mut self, qs: impl Into<String>) -> Self {
        self.querystring = Some(qs.into());
        self
    }
}

/// Redirect the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRoute {
    /// Redirect target (`Location`).
    pub target: String,
    /// Redirect status.
    pub status: StatusCode,
    /// Headers to send. `Location` is always set from `target`.
    pub headers: Vec<HeaderEntry>,
}

impl RedirectRoute {
    /// Build a redirect.
    ///
    /// Every redirect carries `Location` and `Cache-Control: s-maxage=0`;
    /// permanent 308 redirects also carry a `Refresh` header for clients
    /// that do not understand 308.
    pub fn new(target: impl Into<String>, status: StatusCode) -> Self {
        let target = target.into();
        let mut headers = vec![HeaderEntry::new("Location", target.clone())];
        if status == StatusCode::PERMANENT_REDIRECT {
            headers.push(HeaderEntry::new("Refresh", format!("0;url={}", target)));
        }
        headers.push(HeaderEntry::new("Cache-Control", "s-maxage=0"));

        Self {
            target,
            status,
            headers,
        }
    }
}

/// Static fallback policy of a prerendered dynamic route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// Unknown paths are not generated (`fallback: false`).
    Disabled,
    /// Unknown paths are generated on demand before responding (`fallback: 'blocking'`).
    Blocking,
    /// Unknown paths first receive this fallback file (`fallback: true`).
    Page(String),
}

/// Serve a prerendered artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRoute {
    /// Artifact key, e.g. `pages/about.html`.
    pub file: String,
    /// Page the artifact was generated from, when known.
    pub page: Option<String>,
    /// Whether the JSON page-data artifact was requested.
    pub is_data: bool,
    /// Fallback marker for dynamic prerendered routes.
    pub fallback: Option<Fallback>,
    /// Interval after which the artifact is stale.
    pub revalidate: Option<Duration>,
    /// Status to serve the artifact with.
    pub status_code: Option<StatusCode>,
    /// Query string to append to the request URL.
    pub querystring: Option<String>,
}

impl StaticRoute {
    /// Serve `file`.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            page: None,
            is_data: false,
            fallback: None,
            revalidate: None,
            status_code: None,
            querystring: None,
        }
    }

    /// Record the source page.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Mark as a page-data request.
    pub fn as_data(mut self) -> Self {
        self.is_data = true;
        self
    }

    /// Attach a fallback marker.
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Attach a revalidate interval.
    pub fn with_revalidate(mut self, revalidate: Duration) -> Self {
        self.revalidate = Some(revalidate);
        self
    }

    /// Force a status code.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = Some(status);
        self
    }

    /// Whether a previously generated artifact must be looked up before
    /// the caller generates on demand.
    pub fn needs_resolution(&self) -> bool {
        self.fallback.is_some() || self.revalidate.is_some_and(|r| !r.is_zero())
    }
}

/// Serve a file from the public directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicFileRoute {
    /// File key, e.g. `favicon.ico`.
    pub file: String,
}

/// Proxy to an external URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalRoute {
    /// Absolute upstream URL.
    pub url: String,
    /// Query string to append to the request URL.
    pub querystring: Option<String>,
}

/// Reject the request for missing or wrong credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnauthorizedRoute {
    /// Response status.
    pub status: StatusCode,
    /// Reason phrase.
    pub status_description: String,
    /// Response body.
    pub body: String,
    /// Headers to send.
    pub headers: Vec<HeaderEntry>,
}

impl Default for UnauthorizedRoute {
    fn default() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            status_description: "Unauthorized".to_string(),
            body: "Unauthorized".to_string(),
            headers: vec![HeaderEntry::new(
                "WWW-Authenticate",
                r#"Basic realm="Protected""#,
            )],
        }
    }
}

/// The classification outcome for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Render(RenderRoute),
    Redirect(RedirectRoute),
    Static(StaticRoute),
    PublicFile(PublicFileRoute),
    External(ExternalRoute),
    Unauthorized(UnauthorizedRoute),
}

impl Route {
    /// Supplemental query string to append to the request URL.
    pub fn querystring(&self) -> Option<&str> {
        match self {
            Route::Render(r) => r.querystring.as_deref(),
            Route::Static(r) => r.querystring.as_deref(),
            Route::External(r) => r.querystring.as_deref(),
            Route::Redirect(_) | Route::PublicFile(_) | Route::Unauthorized(_) => None,
        }
        .filter(|qs| !qs.is_empty())
    }

    /// Variant name, for logs.
    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Render(_) => RouteKind::Render,
            Route::Redirect(_) => RouteKind::Redirect,
            Route::Static(_) => RouteKind::Static,
            Route::PublicFile(_) => RouteKind::PublicFile,
            Route::External(_) => RouteKind::External,
            Route::Unauthorized(_) => RouteKind::Unauthorized,
        }
    }
}

/// Discriminant of [`Route`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Render,
    Redirect,
    Static,
    PublicFile,
    External,
    Unauthorized,
}

impl RouteKind {
    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Render => "render",
            Self::Redirect => "redirect",
            Self::Static => "static",
            Self::PublicFile => "public_file",
            Self::External => "external",
            Self::Unauthorized => "unauthorized",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
