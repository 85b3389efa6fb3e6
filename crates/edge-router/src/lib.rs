//! Route classification for the edge SSR dispatcher.
//!
//! Maps a normalized [`Request`](edge_core::Request) and the build manifests
//! to exactly one [`Route`](edge_core::Route):
//!
//! ```ignore
//! let classifier = ManifestClassifier::default();
//! let route = classifier
//!     .classify(&request, &manifests.page, &manifests.prerender, &manifests.routes)
//!     .await?;
//! ```

mod auth;
mod classifier;
pub mod locale;
pub mod pattern;

pub use auth::check_basic_auth;
pub use classifier::{ClassifierOptions, ClassifyError, ManifestClassifier, RouteClassifier};
pub use locale::add_default_locale_to_path;
pub use pattern::{PathPattern, Params};
