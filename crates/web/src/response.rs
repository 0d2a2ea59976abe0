//! Outbound response boundary: append-only accumulation of a status, header
//! lines and body chunks. The server adapter owns writing it to the wire.

use bytes::{Bytes, BytesMut};
use http::header::{HeaderName, HeaderValue};
use http::StatusCode;

/// A response under construction by a handler.
///
/// Everything is append-only: headers keep duplicates in append order, body
/// chunks concatenate in append order. Only the status can be replaced.
#[derive(Debug, Clone, Default)]
pub struct Response {
    status: StatusCode,
    headers: Vec<(HeaderName, HeaderValue)>,
    body: Vec<Bytes>,
}

impl Response {
    /// A fresh response with status 200 and nothing accumulated.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(status: StatusCode) -> Self {
        Self { status, ..Self::default() }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Appends a header line; duplicates are kept, nothing is replaced.
    pub fn add_header(&mut self, name: &str, value: &str) -> Result<(), http::Error> {
        let name = HeaderName::try_from(name)?;
        let value = HeaderValue::try_from(value)?;
        self.headers.push((name, value));
        Ok(())
    }

    /// Appends a body chunk.
    pub fn add_body(&mut self, chunk: impl Into<Bytes>) {
        self.body.push(chunk.into());
    }

    /// Header lines in append order.
    pub fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }

    /// Body chunks in append order.
    pub fn body_chunks(&self) -> &[Bytes] {
        &self.body
    }

    /// Concatenated body.
    pub fn body_bytes(&self) -> Bytes {
        let mut joined = BytesMut::with_capacity(self.body.iter().map(Bytes::len).sum());
        for chunk in &self.body {
            joined.extend_from_slice(chunk);
        }
        joined.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_response_is_200_and_empty() {
        let res = Response::new();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().is_empty());
        assert!(res.body_chunks().is_empty());
        assert!(res.body_bytes().is_empty());
    }

    #[test]
    fn body_chunks_concatenate_in_order() {
        let mut res = Response::new();
        res.add_body("<p>");
        res.add_body("hello");
        res.add_body("</p>");
        assert_eq!(res.body_chunks().len(), 3);
        assert_eq!(res.body_bytes(), Bytes::from("<p>hello</p>"));
    }

    #[test]
    fn headers_keep_duplicates_in_append_order() {
        let mut res = Response::new();
        res.add_header("set-cookie", "a=1").unwrap();
        res.add_header("set-cookie", "b=2").unwrap();
        let lines: Vec<_> = res.headers().iter().map(|(n, v)| (n.as_str(), v.to_str().unwrap())).collect();
        assert_eq!(lines, [("set-cookie", "a=1"), ("set-cookie", "b=2")]);
    }

    #[test]
    fn status_can_be_replaced() {
        let mut res = Response::with_status(StatusCode::CREATED);
        assert_eq!(res.status(), StatusCode::CREATED);
        res.set_status(StatusCode::NO_CONTENT);
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn invalid_header_is_rejected() {
        let mut res = Response::new();
        assert!(res.add_header("bad name", "v").is_err());
        assert!(res.headers().is_empty());
    }
}
