//! Embeddable micro web framework glue around the wren routing core.
//!
//! The routing machinery lives in [`wren_route`]; this crate adds the thin
//! layer an embedding server adapter talks to: [`Request`] / [`Response`]
//! boundary types, the [`Handler`] capability, the [`Logger`] capability,
//! the server-adapter registry, and the [`App`] instance that dispatches a
//! resolved request to its handler.

mod adapter;
mod app;
mod config;
mod handler;
mod logger;
mod request;
mod response;

pub use adapter::{AdapterError, AdapterInit, AdapterKind, AdapterRegistry, ServerAdapter, StubAdapter};
pub use app::{App, AppBuilder, DispatchError};
pub use config::ServerConfig;
pub use handler::{handler_fn, FnHandler, Handler};
pub use logger::{LogLevel, Logger, TracingLogger};
pub use request::Request;
pub use response::Response;

pub use wren_route::{MatchError, PatternError, ResolveError, RouteArgs, Router};
