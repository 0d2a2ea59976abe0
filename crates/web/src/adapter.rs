//! Server adapters: the embedding layer that feeds requests into the
//! dispatcher and writes responses back out.
//!
//! Adapter kinds form a closed enumeration; the [`AdapterRegistry`] maps a
//! kind to its constructor and reports a missing initializer explicitly
//! instead of falling through. Real socket servers are the embedding's
//! business; the built-in [`StubAdapter`] drives the dispatcher in-process,
//! which is what the demos and tests use.

use crate::app::{App, DispatchError};
use crate::config::ServerConfig;
use crate::request::Request;
use crate::response::Response;
use http::StatusCode;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// The closed set of server adapter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    /// Whatever the registry considers the default; aliases the stub here.
    Default,
    /// In-process adapter, no sockets involved.
    Stub,
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Stub => "stub",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("no initializer registered for server adapter [{0}]")]
    NoInitializer(AdapterKind),

    #[error("server adapter [{kind}] failed to start: {reason}")]
    Startup { kind: AdapterKind, reason: String },
}

/// Constructor for one adapter kind.
pub type AdapterInit = fn(Arc<App>, &ServerConfig) -> Result<Box<dyn ServerAdapter>, AdapterError>;

/// Kind-to-constructor mapping, resolved when the app starts serving.
pub struct AdapterRegistry {
    entries: Vec<(AdapterKind, AdapterInit)>,
}

impl AdapterRegistry {
    /// A registry with no entries; every lookup fails explicitly.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// The built-in mapping: both [`AdapterKind::Stub`] and
    /// [`AdapterKind::Default`] construct a [`StubAdapter`].
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(AdapterKind::Stub, StubAdapter::init);
        registry.register(AdapterKind::Default, StubAdapter::init);
        registry
    }

    /// Maps a kind to a constructor; the first registration for a kind wins.
    pub fn register(&mut self, kind: AdapterKind, init: AdapterInit) {
        self.entries.push((kind, init));
    }

    /// Looks up the constructor for `kind`, or reports the missing
    /// initializer.
    pub fn initializer(&self, kind: AdapterKind) -> Result<AdapterInit, AdapterError> {
        self.entries
            .iter()
            .find(|(registered, _)| *registered == kind)
            .map(|(_, init)| *init)
            .ok_or(AdapterError::NoInitializer(kind))
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter().map(|(kind, _)| kind)).finish()
    }
}

/// A running (or runnable) server front end.
pub trait ServerAdapter: Send {
    fn kind(&self) -> AdapterKind;
    fn is_running(&self) -> bool;
    fn run(&mut self) -> Result<(), AdapterError>;
    fn stop(&mut self);
}

/// In-process adapter: requests are fed straight into the dispatcher and the
/// response comes back to the caller, no wire in between.
pub struct StubAdapter {
    app: Arc<App>,
    bind_address: String,
    running: bool,
}

impl StubAdapter {
    pub fn new(app: Arc<App>, config: &ServerConfig) -> Self {
        Self { app, bind_address: config.bind_address(), running: false }
    }

    fn init(app: Arc<App>, config: &ServerConfig) -> Result<Box<dyn ServerAdapter>, AdapterError> {
        Ok(Box::new(Self::new(app, config)))
    }

    /// Dispatches one request and maps dispatch failures the way a wire
    /// adapter would: a miss becomes 404, router faults and silent handlers
    /// become 500.
    pub fn feed(&self, request: &Request) -> Response {
        match self.app.dispatch(request) {
            Ok(response) => response,
            Err(DispatchError::NotFound) => {
                let mut response = Response::with_status(StatusCode::NOT_FOUND);
                response.add_body("<html><body><h1>Not Found</h1></body></html>");
                response
            }
            Err(DispatchError::Internal(_) | DispatchError::EmptyResponse) => {
                let mut response = Response::with_status(StatusCode::INTERNAL_SERVER_ERROR);
                response.add_body("<html><body><h1>Internal Server Error</h1></body></html>");
                response
            }
        }
    }
}

impl ServerAdapter for StubAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Stub
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn run(&mut self) -> Result<(), AdapterError> {
        info!(bind_address = %self.bind_address, "stub adapter up, feed requests in-process");
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
    }
}

impl fmt::Debug for StubAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubAdapter")
            .field("bind_address", &self.bind_address)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}
