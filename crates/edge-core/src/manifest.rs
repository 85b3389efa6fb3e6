//! Build-time manifests.
//!
//! Loaded once at startup, shared read-only by every request through
//! `Arc<Manifests>`. Field names follow the camelCase JSON emitted by the
//! build.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::route::{Fallback, HeaderEntry};

/// The three manifests a dispatcher reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Manifests {
    pub page: PageManifest,
    pub prerender: PrerenderManifest,
    pub routes: RoutesManifest,
}

impl Manifests {
    /// Bundle three manifests.
    pub fn new(page: PageManifest, prerender: PrerenderManifest, routes: RoutesManifest) -> Self {
        Self {
            page,
            prerender,
            routes,
        }
    }
}

/// Pages and public files known to the build.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageManifest {
    /// Build identifier, part of data-request URLs.
    pub build_id: String,
    pub pages: Pages,
    /// Public URL path → file key.
    pub public_files: BTreeMap<String, String>,
    /// Whether canonical URLs end with `/`.
    pub trailing_slash: bool,
    /// Basic-auth credentials guarding every route.
    pub authentication: Option<Authentication>,
}

/// Page tables by rendering strategy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pages {
    /// Server-rendered pages: route → bundle.
    pub ssr: PageRoutes,
    /// Fully static HTML pages: route → HTML file.
    pub html: PageRoutes,
    /// Statically generated pages.
    pub ssg: SsgRoutes,
}

/// Route → file tables split by whether the route has parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRoutes {
    pub non_dynamic: BTreeMap<String, String>,
    pub dynamic: BTreeMap<String, String>,
}

/// Statically generated routes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SsgRoutes {
    pub non_dynamic: BTreeMap<String, SsgRoute>,
    pub dynamic: BTreeMap<String, DynamicSsgRoute>,
}

/// A concrete prerendered path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SsgRoute {
    /// Revalidate interval; `false` or absent means never stale.
    #[serde(deserialize_with = "deserialize_revalidate")]
    pub initial_revalidate_seconds: Option<Duration>,
    /// Dynamic page this path was generated from.
    pub src_route: Option<String>,
}

/// A prerendered dynamic route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicSsgRoute {
    #[serde(default = "default_fallback")]
    pub fallback: Fallback,
}

fn default_fallback() -> Fallback {
    Fallback::Disabled
}

/// Prerender output of the build.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrerenderManifest {
    pub version: u32,
    pub routes: BTreeMap<String, PrerenderRoute>,
    pub dynamic_routes: BTreeMap<String, DynamicSsgRoute>,
    pub preview: PreviewSettings,
}

/// One prerendered path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrerenderRoute {
    #[serde(deserialize_with = "deserialize_revalidate")]
    pub initial_revalidate_seconds: Option<Duration>,
    pub src_route: Option<String>,
    pub data_route: Option<String>,
}

/// Preview-mode secrets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewSettings {
    /// Value of the bypass cookie that turns static pages into renders.
    pub preview_mode_id: String,
}

/// Basic-auth credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct Authentication {
    pub username: String,
    pub password: String,
}

/// Routing rules of the build.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutesManifest {
    pub base_path: String,
    pub headers: Vec<HeaderRule>,
    pub redirects: Vec<RedirectRule>,
    pub rewrites: Vec<RewriteRule>,
    pub i18n: Option<I18nConfig>,
}

/// Headers applied to responses whose path matches `source`.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderRule {
    pub source: String,
    pub headers: Vec<HeaderEntry>,
}

/// Redirect requests matching `source` to `destination`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectRule {
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub permanent: bool,
}

/// Serve `destination` for requests matching `source`.
#[derive(Debug, Clone, Deserialize)]
pub struct RewriteRule {
    pub source: String,
    pub destination: String,
}

/// Internationalization settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    pub locales: Vec<String>,
    pub default_locale: String,
}

impl<'de> Deserialize<'de> for Fallback {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Page(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None | Some(Raw::Flag(true)) => Fallback::Blocking,
            Some(Raw::Flag(false)) => Fallback::Disabled,
            Some(Raw::Page(page)) => Fallback::Page(page),
        })
    }
}

/// `number | bool | null` → optional interval. Zero means never stale.
fn deserialize_revalidate<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Seconds(u64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Seconds(secs)) if secs > 0 => Some(Duration::from_secs(secs)),
        // `true` carries no interval.
        Some(Raw::Flag(false | true)) | Some(Raw::Seconds(_)) | None => None,
    })
}
