//! Locale prefix handling.

use edge_core::RoutesManifest;

/// Split `path` into the configured base path and the remainder.
fn split_base_path<'a>(path: &'a str, base_path: &'a str) -> (&'a str, &'a str) {
    if base_path.is_empty() {
        return ("", path);
    }
    match path.strip_prefix(base_path) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => (base_path, rest),
        _ => ("", path),
    }
}

/// Prefix `path` with the default locale unless it already carries one.
///
/// A known locale prefix (matched case-insensitively against whole
/// segments) is normalized to its configured spelling, or replaced by
/// `force_locale` when given. Without i18n configuration the path is
/// returned unchanged. The result is a fixed point: rewriting it again
/// returns it as is.
pub fn add_default_locale_to_path(
    path: &str,
    routes_manifest: &RoutesManifest,
    force_locale: Option<&str>,
) -> String {
    let Some(i18n) = &routes_manifest.i18n else {
        return path.to_string();
    };

    let (base, rest) = split_base_path(path, &routes_manifest.base_path);
    let trimmed = rest.strip_prefix('/').unwrap_or(rest);
    let (first, tail) = match trimmed.split_once('/') {
        Some((first, tail)) => (first, Some(tail)),
        None => (trimmed, None),
    };

    if let Some(known) = i18n.locales.iter().find(|l| l.eq_ignore_ascii_case(first)) {
        let locale = force_locale.unwrap_or(known);
        return match tail {
            Some(tail) => format!("{}/{}/{}", base, locale, tail),
            None => format!("{}/{}", base, locale),
        };
    }

    let locale = force_locale.unwrap_or(&i18n.default_locale);
    if trimmed.is_empty() {
        format!("{}/{}", base, locale)
    } else {
        format!("{}/{}/{}", base, locale, trimmed)
    }
}

/// The locale prefix of `path`, if any, in its configured spelling.
pub fn find_locale<'m>(path: &str, routes_manifest: &'m RoutesManifest) -> Option<&'m str> {
    let i18n = routes_manifest.i18n.as_ref()?;
    let (_, rest) = split_base_path(path, &routes_manifest.base_path);
    let first = rest.trim_start_matches('/').split('/').next()?;
    i18n.locales
        .iter()
        .find(|l| l.eq_ignore_ascii_case(first))
        .map(String::as_str)
}

/// Remove a leading locale segment, keeping the base path.
pub fn remove_locale_from_path(path: &str, routes_manifest: &RoutesManifest) -> String {
    let Some(locale) = find_locale(path, routes_manifest) else {
        return path.to_string();
    };

    let (base, rest) = split_base_path(path, &routes_manifest.base_path);
    let after = &rest.trim_start_matches('/')[locale.len()..];
    if after.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}{}", base, after)
    }
}
