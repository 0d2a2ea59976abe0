//! Arguments bound from a matched request path.

use std::fmt;

/// Ordered (name, value) pairs produced by one successful match.
///
/// Names are borrowed from the compiled pattern, values from the request
/// path the caller handed in, so a `RouteArgs` is an ephemeral per-call
/// value: build it, hand it to the handler, drop it. Nothing is shared
/// between requests.
#[derive(Clone, Default)]
pub struct RouteArgs<'route, 'path> {
    pairs: Vec<(&'route str, &'path str)>,
}

impl<'route, 'path> RouteArgs<'route, 'path> {
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { pairs: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, name: &'route str, value: &'path str) {
        self.pairs.push((name, value));
    }

    /// Number of bound arguments.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Value bound to the first argument with the given name, if any.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&'path str> {
        let name = name.as_ref();
        self.pairs.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }

    /// Value of the argument at `index`, in binding order.
    pub fn get_index(&self, index: usize) -> Option<&'path str> {
        self.pairs.get(index).map(|(_, value)| *value)
    }

    /// Iterates (name, value) pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&'route str, &'path str)> + '_ {
        self.pairs.iter().copied()
    }
}

impl fmt::Debug for RouteArgs<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.pairs.iter().copied()).finish()
    }
}
