//! Inbound request boundary.
//!
//! The server adapter hands the framework a method, a URI string and a
//! header list; this type carries them across the boundary. Nothing here
//! parses the wire, that stays on the adapter side.

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;

/// Conventional marker header for AJAX-style requests.
const XHR_HEADER: &str = "x-requested-with";
const XHR_VALUE: &str = "XMLHttpRequest";

/// An incoming request as seen by handlers: method, path, raw query string
/// and headers. Built by the server adapter, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    query: String,
    headers: HeaderMap,
}

impl Request {
    /// Builds a request from a method and a URI string, splitting the query
    /// string off at the first `?`.
    pub fn new(method: Method, uri: &str) -> Self {
        let (path, query) = match uri.split_once('?') {
            Some((path, query)) => (path, query),
            None => (uri, ""),
        };
        Self { method, path: path.to_owned(), query: query.to_owned(), headers: HeaderMap::new() }
    }

    /// Appends a header; invalid names or values are rejected.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, http::Error> {
        let name = HeaderName::try_from(name)?;
        let value = HeaderValue::try_from(value)?;
        self.headers.append(name, value);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query string, without the leading `?`. Empty if the URI had none.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Decodes the query string into (name, value) pairs.
    pub fn query_pairs(&self) -> Result<Vec<(String, String)>, serde_urlencoded::de::Error> {
        serde_urlencoded::from_str(&self.query)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Case-insensitive header lookup; non-UTF-8 values read as `None`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Header at `index` in insertion order, for adapters that iterate the
    /// list positionally.
    pub fn header_at(&self, index: usize) -> Option<(&str, &str)> {
        self.headers
            .iter()
            .nth(index)
            .and_then(|(name, value)| value.to_str().ok().map(|value| (name.as_str(), value)))
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// True when the conventional AJAX marker header is present.
    pub fn is_xhr(&self) -> bool {
        self.header(XHR_HEADER).is_some_and(|value| value.eq_ignore_ascii_case(XHR_VALUE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_splits_into_path_and_query() {
        let req = Request::new(Method::GET, "/search?q=wren&page=2");
        assert_eq!(req.path(), "/search");
        assert_eq!(req.query(), "q=wren&page=2");

        let pairs = req.query_pairs().unwrap();
        assert_eq!(pairs, [("q".to_owned(), "wren".to_owned()), ("page".to_owned(), "2".to_owned())]);
    }

    #[test]
    fn uri_without_query() {
        let req = Request::new(Method::GET, "/plain");
        assert_eq!(req.path(), "/plain");
        assert_eq!(req.query(), "");
        assert!(req.query_pairs().unwrap().is_empty());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let req = Request::new(Method::GET, "/").with_header("X-Custom", "yes").unwrap();
        assert_eq!(req.header("x-custom"), Some("yes"));
        assert_eq!(req.header("X-CUSTOM"), Some("yes"));
        assert_eq!(req.header("x-other"), None);
    }

    #[test]
    fn headers_are_indexable() {
        let req = Request::new(Method::GET, "/")
            .with_header("a", "1")
            .unwrap()
            .with_header("b", "2")
            .unwrap();
        assert_eq!(req.header_count(), 2);
        assert_eq!(req.header_at(0), Some(("a", "1")));
        assert_eq!(req.header_at(1), Some(("b", "2")));
        assert_eq!(req.header_at(2), None);
    }

    #[test]
    fn xhr_flag_follows_the_marker_header() {
        let plain = Request::new(Method::GET, "/");
        assert!(!plain.is_xhr());

        let ajax = Request::new(Method::GET, "/").with_header("X-Requested-With", "XMLHttpRequest").unwrap();
        assert!(ajax.is_xhr());

        let other = Request::new(Method::GET, "/").with_header("X-Requested-With", "SomethingElse").unwrap();
        assert!(!other.is_xhr());
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        assert!(Request::new(Method::GET, "/").with_header("bad name", "v").is_err());
    }
}
