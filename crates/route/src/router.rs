//! Dispatch table: an ordered collection of (pattern, payload) bindings.
//!
//! Resolution is first-match-wins in registration order, not best-match or
//! longest-match. Overlapping patterns are disambiguated purely by the order
//! they were registered in, so more specific routes must be registered before
//! more general ones. This is a deliberate simplicity trade-off, not a bug.

use crate::args::RouteArgs;
use crate::error::{PatternError, ResolveError};
use crate::pattern::RoutePattern;
use tracing::{debug, error};

struct Binding<T> {
    pattern: RoutePattern,
    payload: T,
}

/// An ordered dispatch table mapping route patterns to payloads.
///
/// `T` is whatever the caller dispatches to, typically a handler reference.
/// Registration is a single-threaded build phase; afterwards the table is
/// read-only and [`resolve`](Router::resolve) may be called from any number
/// of threads concurrently.
pub struct Router<T> {
    bindings: Vec<Binding<T>>,
}

/// A successful resolution: the matched binding's payload and the arguments
/// bound from the path.
pub struct Matched<'router, 'path, T> {
    pattern: &'router RoutePattern,
    payload: &'router T,
    args: RouteArgs<'router, 'path>,
}

impl<'router, 'path, T> Matched<'router, 'path, T> {
    pub fn payload(&self) -> &'router T {
        self.payload
    }

    pub fn pattern(&self) -> &'router RoutePattern {
        self.pattern
    }

    pub fn args(&self) -> &RouteArgs<'router, 'path> {
        &self.args
    }
}

impl<T> std::fmt::Debug for Matched<'_, '_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matched").field("pattern", &self.pattern.source()).field("args", &self.args).finish_non_exhaustive()
    }
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self { bindings: Vec::new() }
    }

    pub fn builder() -> RouterBuilder<T> {
        RouterBuilder::new()
    }

    /// Compiles `pattern` and appends a binding for it.
    ///
    /// On compile failure no binding is added and previously registered
    /// bindings keep working; the error is returned to the caller.
    pub fn register(&mut self, pattern: &str, payload: T) -> Result<(), PatternError> {
        let compiled = RoutePattern::compile(pattern)?;
        debug!(pattern, derived = compiled.derived(), params = compiled.params().len(), "registered route");
        self.bindings.push(Binding { pattern: compiled, payload });
        Ok(())
    }

    /// Resolves `path` to the first binding whose pattern matches it.
    ///
    /// A miss is reported as [`ResolveError::NotFound`]; an internal matcher
    /// fault is logged and reported as [`ResolveError::Matcher`], which the
    /// caller must not treat as a routing miss.
    pub fn resolve<'router, 'path>(&'router self, path: &'path str) -> Result<Matched<'router, 'path, T>, ResolveError> {
        for binding in &self.bindings {
            let Some(found) = binding.pattern.find(path) else {
                continue;
            };
            let args = binding.pattern.fetch(path, &found).map_err(|fault| {
                error!(pattern = binding.pattern.source(), path, "route resolution failed: {fault}");
                fault
            })?;
            return Ok(Matched { pattern: &binding.pattern, payload: &binding.payload, args });
        }
        Err(ResolveError::NotFound)
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.bindings.iter().map(|b| b.pattern.source())).finish()
    }
}

/// Builder collecting (pattern, payload) pairs before compiling them all at
/// once. The first pattern that fails to compile aborts the build.
pub struct RouterBuilder<T> {
    routes: Vec<(String, T)>,
}

impl<T> RouterBuilder<T> {
    fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn route(mut self, pattern: impl Into<String>, payload: T) -> Self {
        self.routes.push((pattern.into(), payload));
        self
    }

    pub fn build(self) -> Result<Router<T>, PatternError> {
        let mut router = Router::new();
        for (pattern, payload) in self.routes {
            router.register(&pattern, payload)?;
        }
        Ok(router)
    }
}

impl<T> std::fmt::Debug for RouterBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.routes.iter().map(|(pattern, _)| pattern)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_round_trip() {
        let mut router = Router::new();
        router.register("/hello/:name", "hello").unwrap();

        let matched = router.resolve("/hello/world").unwrap();
        assert_eq!(*matched.payload(), "hello");
        assert_eq!(matched.args().len(), 1);
        assert_eq!(matched.args().get("name"), Some("world"));
    }

    #[test]
    fn resolve_miss_is_not_found() {
        let mut router = Router::new();
        router.register("/hello/:name", ()).unwrap();

        assert!(matches!(router.resolve("/goodbye/world"), Err(ResolveError::NotFound)));
        assert!(matches!(Router::<()>::new().resolve("/anything"), Err(ResolveError::NotFound)));
    }

    #[test]
    fn first_match_wins_over_later_literal() {
        // '/item/new' also matches the wildcard registered first; order
        // decides, the later literal route is shadowed.
        let router = Router::builder().route("/item/:id", "wild").route("/item/new", "literal").build().unwrap();

        let matched = router.resolve("/item/new").unwrap();
        assert_eq!(*matched.payload(), "wild");
        assert_eq!(matched.args().get("id"), Some("new"));
    }

    #[test]
    fn specific_before_general_reverses_the_outcome() {
        let router = Router::builder().route("/item/new", "literal").route("/item/:id", "wild").build().unwrap();

        assert_eq!(*router.resolve("/item/new").unwrap().payload(), "literal");
        assert_eq!(*router.resolve("/item/42").unwrap().payload(), "wild");
    }

    #[test]
    fn failed_registration_leaves_table_usable() {
        let mut router = Router::new();
        router.register("/ok", 1).unwrap();
        assert!(router.register("/broken(", 2).is_err());

        assert_eq!(router.len(), 1);
        assert_eq!(*router.resolve("/ok").unwrap().payload(), 1);
    }

    #[test]
    fn builder_reports_the_first_bad_pattern() {
        let result = Router::builder().route("/fine", ()).route("/broken(", ()).build();
        assert!(matches!(result, Err(PatternError::Regex { .. })));
    }

    #[test]
    fn matcher_fault_is_not_a_miss() {
        let mut router = Router::new();
        router.register("/a/:x/|/b", ()).unwrap();

        assert!(matches!(router.resolve("/b"), Err(ResolveError::Matcher(_))));
    }

    #[test]
    fn router_is_shareable_across_threads() {
        let router = Router::builder().route("/hello/:name", "h").build().unwrap();

        let router = &router;
        std::thread::scope(|scope| {
            for path in ["/hello/a", "/hello/b"] {
                scope.spawn(move || {
                    let matched = router.resolve(path).unwrap();
                    assert_eq!(matched.args().len(), 1);
                });
            }
        });
    }
}
