//! Core abstractions for the edge SSR dispatcher.
//!
//! This crate provides the fundamental types:
//! - `Event` - One request in flight: request, response sink, completion signal
//! - `Request` - Normalized request description used for classification
//! - `Response` - Write-once response sink
//! - `Route` - Classification outcome (closed sum type)
//! - `Manifests` - Build-time page, prerender and routes manifests

mod context;
mod event;
mod lifecycle;
mod manifest;
mod response;
mod route;

pub use context::*;
pub use event::*;
pub use lifecycle::*;
pub use manifest::*;
pub use response::*;
pub use route::*;
