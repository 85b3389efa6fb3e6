//! Incoming request and its normalized description.

use http::{HeaderMap, Method};

/// Header carrying the request identifier.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Reuse the caller's `x-request-id` header, or generate a fresh ID.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(Self::from_string)
            .unwrap_or_else(Self::generate)
    }

    /// Borrow the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The mutable request half of an [`Event`](crate::Event).
///
/// `url` is the raw path plus query string (e.g. `/blog/post?ref=x`). It is
/// optional because some transports hand over requests without one.
#[derive(Debug, Clone)]
pub struct IncomingRequest {
    /// HTTP method.
    pub method: Method,
    /// Raw URL: path and optional query string.
    pub url: Option<String>,
    /// Request headers.
    pub headers: HeaderMap,
}

impl IncomingRequest {
    /// Create a request for the given method and URL.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: Some(url.into()),
            headers: HeaderMap::new(),
        }
    }

    /// Shorthand for a `GET` request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Add a header. Invalid names or values are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            http::HeaderName::from_bytes(name.as_bytes()),
            http::HeaderValue::from_str(value),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    /// Path portion of the URL (everything before `?`).
    pub fn path(&self) -> &str {
        let url = self.url.as_deref().unwrap_or_default();
        url.split_once('?').map_or(url, |(path, _)| path)
    }
}

/// Canonical request description consumed by route classification.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string. Never empty.
    pub uri: String,
    /// Query string without the leading `?`, if any.
    pub querystring: Option<String>,
    /// Request headers (names are case-insensitive).
    pub headers: HeaderMap,
}

impl Request {
    /// Normalize an incoming request.
    ///
    /// The URL is split at the first `?`; an empty query string is treated
    /// as absent and a missing or empty path becomes `/`.
    pub fn from_incoming(req: &IncomingRequest) -> Self {
        let url = req.url.as_deref().unwrap_or_default();
        let (uri, querystring) = match url.split_once('?') {
            Some((uri, qs)) => (uri, Some(qs).filter(|qs| !qs.is_empty())),
            None => (url, None),
        };

        Self {
            method: req.method.clone(),
            uri: if uri.is_empty() { "/".to_string() } else { uri.to_string() },
            querystring: querystring.map(str::to_string),
            headers: req.headers.clone(),
        }
    }

    /// Normalize the request half of an event.
    pub fn from_event(event: &crate::Event) -> Self {
        Self::from_incoming(&event.req)
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get a cookie value from the `Cookie` header(s).
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.headers
            .get_all(http::header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}
