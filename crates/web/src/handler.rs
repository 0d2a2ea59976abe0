//! The handler capability.
//!
//! A handler is invoked with the request and the arguments bound from the
//! matched route; any context it needs is captured in the closure or stored
//! in the implementing type's fields. Returning `None` means the handler
//! produced no output, which the dispatcher escalates as a failure.

use crate::request::Request;
use crate::response::Response;
use wren_route::RouteArgs;

/// A route handler.
///
/// `Send + Sync` is required so one handler can serve concurrent requests;
/// handlers therefore take `&self` and must keep their own state immutable
/// or internally synchronized.
pub trait Handler: Send + Sync {
    fn handle(&self, request: &Request, args: &RouteArgs) -> Option<Response>;
}

/// A [`Handler`] wrapping a plain closure.
pub struct FnHandler<F>(F);

impl<F> Handler for FnHandler<F>
where
    F: Fn(&Request, &RouteArgs) -> Option<Response> + Send + Sync,
{
    fn handle(&self, request: &Request, args: &RouteArgs) -> Option<Response> {
        (self.0)(request, args)
    }
}

/// Wraps a closure as a [`Handler`].
pub fn handler_fn<F>(f: F) -> FnHandler<F>
where
    F: Fn(&Request, &RouteArgs) -> Option<Response> + Send + Sync,
{
    FnHandler(f)
}

impl<F> std::fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnHandler")
    }
}
