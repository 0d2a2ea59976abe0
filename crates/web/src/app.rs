//! Application instance: the dispatch table plus the logger and the server
//! adapter selection, wired together behind a builder.

use crate::adapter::{AdapterError, AdapterKind, AdapterRegistry, ServerAdapter};
use crate::config::ServerConfig;
use crate::handler::Handler;
use crate::logger::{LogLevel, Logger, TracingLogger};
use crate::request::Request;
use crate::response::Response;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use wren_route::{MatchError, PatternError, ResolveError, Router};

/// Why a dispatch produced no response.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Normal miss; the adapter turns this into a 404.
    #[error("no route matches the request path")]
    NotFound,

    /// Router-internal fault; the adapter should answer with a 5xx.
    #[error("routing failed: {0}")]
    Internal(#[from] MatchError),

    /// The matched handler returned no response; the adapter decides how to
    /// fail the request.
    #[error("handler produced no response")]
    EmptyResponse,
}

/// An assembled application: routes, handlers, logger, adapter choice.
///
/// Built single-threaded via [`App::builder`]; afterwards every method takes
/// `&self` and the instance can be shared freely between request threads.
pub struct App {
    router: Router<Arc<dyn Handler>>,
    logger: Arc<dyn Logger>,
    adapters: AdapterRegistry,
    kind: AdapterKind,
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    /// Resolves the request path and invokes the matched handler.
    pub fn dispatch(&self, request: &Request) -> Result<Response, DispatchError> {
        match self.router.resolve(request.path()) {
            Ok(matched) => match matched.payload().handle(request, matched.args()) {
                Some(response) => Ok(response),
                None => {
                    self.logger.log(
                        LogLevel::Error,
                        "dsp",
                        &format!("handler for [{}] produced no response", matched.pattern().source()),
                    );
                    Err(DispatchError::EmptyResponse)
                }
            },
            Err(ResolveError::NotFound) => Err(DispatchError::NotFound),
            Err(ResolveError::Matcher(fault)) => {
                self.logger.log(LogLevel::Critical, "rtr", &format!("cannot route [{}]: {fault}", request.path()));
                Err(DispatchError::Internal(fault))
            }
        }
    }

    /// Number of registered route bindings.
    pub fn route_count(&self) -> usize {
        self.router.len()
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    /// Builds and starts the server adapter selected for this app.
    ///
    /// The running adapter is handed back to the caller, who owns stopping
    /// it. A missing initializer or a startup failure is logged and returned.
    pub fn serve(self: Arc<Self>, config: &ServerConfig) -> Result<Box<dyn ServerAdapter>, AdapterError> {
        let logger = Arc::clone(&self.logger);
        let init = self.adapters.initializer(self.kind).inspect_err(|e| {
            logger.log(LogLevel::Critical, "adp", &e.to_string());
        })?;
        let mut adapter = init(self, config)?;
        adapter.run().inspect_err(|e| {
            logger.log(LogLevel::Critical, "adp", &e.to_string());
        })?;
        Ok(adapter)
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App").field("router", &self.router).field("kind", &self.kind).finish_non_exhaustive()
    }
}

/// Collects handlers and settings, then compiles everything into an [`App`].
pub struct AppBuilder {
    routes: Vec<(String, Arc<dyn Handler>)>,
    logger: Arc<dyn Logger>,
    adapters: AdapterRegistry,
    kind: AdapterKind,
}

impl AppBuilder {
    fn new() -> Self {
        Self {
            routes: Vec::new(),
            logger: Arc::new(TracingLogger),
            adapters: AdapterRegistry::with_builtin(),
            kind: AdapterKind::Default,
        }
    }

    /// Registers a handler under a route pattern.
    pub fn handler(mut self, route: impl Into<String>, handler: impl Handler + 'static) -> Self {
        self.routes.push((route.into(), Arc::new(handler)));
        self
    }

    /// Registers the most recently added handler under an additional route.
    ///
    /// # Panics
    /// Panics when no handler has been added yet.
    pub fn alias(mut self, route: impl Into<String>) -> Self {
        let (_, handler) = self.routes.last().expect("alias requires a previously registered handler");
        let handler = Arc::clone(handler);
        self.routes.push((route.into(), handler));
        self
    }

    /// Replaces the default tracing-backed logger.
    pub fn logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Selects the server adapter kind to start on [`App::serve`].
    pub fn adapter(mut self, kind: AdapterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replaces the adapter registry, e.g. to add an embedding-specific
    /// adapter.
    pub fn adapters(mut self, registry: AdapterRegistry) -> Self {
        self.adapters = registry;
        self
    }

    /// Compiles all registered routes. The first pattern that fails to
    /// compile aborts the build and is reported to the caller.
    pub fn build(self) -> Result<App, PatternError> {
        let mut router = Router::new();
        for (route, handler) in self.routes {
            router.register(&route, handler)?;
        }
        Ok(App { router, logger: self.logger, adapters: self.adapters, kind: self.kind })
    }
}

impl fmt::Debug for AppBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppBuilder")
            .field("routes", &self.routes.iter().map(|(route, _)| route).collect::<Vec<_>>())
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
