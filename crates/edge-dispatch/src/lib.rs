//! Manifest-driven request dispatch for edge server-side rendering.
//!
//! Given an [`Event`](edge_core::Event) and the build manifests, the
//! dispatcher classifies the request into exactly one route and runs its
//! strategy:
//!
//! - Redirect and unauthorized routes are written and ended immediately.
//! - Render routes load the page and render it, racing the render against
//!   the event's completion signal. Failures fall back to the error page.
//! - Static routes with a fallback or revalidate interval are served from
//!   a previously generated artifact when one exists.
//! - Everything else is handed back as a [`Dispatched`] value for the
//!   caller to serve.
//!
//! ```ignore
//! let dispatcher = Dispatcher::from_config(Arc::new(manifests), config);
//! match dispatcher.dispatch(&mut event, &handler).await? {
//!     Dispatched::Handled => {}
//!     Dispatched::Static(route) => serve_or_generate(route).await?,
//!     Dispatched::PublicFile(route) => serve_public(route).await?,
//!     Dispatched::External(route) => proxy(route).await?,
//! }
//! ```

mod config;
mod deadline;
mod dispatch;
mod error;
mod error_page;
mod handler;
pub mod headers;
mod redirect;
mod render;
mod static_route;
mod unauthorized;

pub use config::*;
pub use deadline::arm_deadline;
pub use dispatch::{handle_default, Dispatched, Dispatcher};
pub use error::*;
pub use error_page::DefaultErrorPage;
pub use handler::*;
pub use redirect::redirect;
pub use render::render_route;
pub use static_route::resolve_static;
pub use unauthorized::unauthorized;
