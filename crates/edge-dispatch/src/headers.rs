//! Custom header rules from the routes manifest.

use edge_core::{Event, ResponseError, RoutesManifest};
use edge_router::{add_default_locale_to_path, PathPattern};

/// Apply every header rule whose source matches the request path.
///
/// Matching uses the path without its query string, locale-qualified when
/// i18n is configured. Must run before any body byte is written; entries
/// with invalid names or values are skipped.
pub fn set_custom_headers(event: &Event, routes_manifest: &RoutesManifest) -> Result<(), ResponseError> {
    let path = event.req.path();
    let path = if routes_manifest.i18n.is_some() {
        add_default_locale_to_path(path, routes_manifest, None)
    } else {
        path.to_string()
    };

    for rule in &routes_manifest.headers {
        if PathPattern::parse(&rule.source).matches(&path).is_none() {
            continue;
        }
        for header in &rule.headers {
            if header.key.is_empty() || header.value.is_empty() {
                continue;
            }
            match event.res.set_header(&header.key, &header.value) {
                Ok(()) => {}
                Err(
                    err @ (ResponseError::InvalidHeaderName(_)
                    | ResponseError::InvalidHeaderValue(_)),
                ) => {
                    tracing::warn!(source = %rule.source, error = %err, "skipping custom header");
                }
                Err(err) => return Err(err),
            }
        }
    }

    Ok(())
}
