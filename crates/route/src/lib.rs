//! Routing core of the wren micro framework.
//!
//! A route pattern is a path template mixing literal segments with named
//! `:tag` placeholders, e.g. `/hello/:name/:surname`. Patterns compile to an
//! anchored regular expression with one capturing group per placeholder;
//! a [`Router`] holds an ordered list of (pattern, payload) bindings and
//! resolves a concrete request path to the first binding whose pattern
//! matches, together with the [`RouteArgs`] extracted from the path.
//!
//! Registration is a single-threaded build phase; once built, the router is
//! read-only and resolution from many threads at once is safe. All per-match
//! state lives in the [`MatchResult`] and [`RouteArgs`] values produced for
//! each call.

mod args;
mod error;
mod pattern;
mod router;

pub mod scanner;

pub use args::RouteArgs;
pub use error::{MatchError, PatternError, ResolveError};
pub use pattern::{MatchResult, RoutePattern};
pub use router::{Matched, Router, RouterBuilder};
pub use scanner::{ScanReport, MAX_ROUTE_PARAMS};
