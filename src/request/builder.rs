use bytes::Bytes;
use std::any::Any;
use std::io::{Cursor, Read};

use super::{Parts, Request};
use crate::http::{Method, Version};

/// Fluent [`Request`] builder, mostly used for fixtures.
///
/// Headers are stored as given, no `Content-Length` is derived from the body.
///
/// ```rust
/// use wicket::{http::Method, request::Request};
///
/// let mut request = Request::builder()
///     .method(Method::POST)
///     .url("/echo?lang=en")
///     .header("Content-Length", "5")
///     .body("hello")
///     .build();
///
/// assert_eq!(request.path(), "/echo");
/// assert_eq!(&request.collect_body(false).unwrap()[..], b"hello");
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    parts: Parts,
    body: Bytes,
}

impl Builder {
    /// Create new [`Builder`] for a `GET /` request.
    pub fn new() -> Self {
        Self::default().url("/")
    }

    /// Set the request method.
    pub fn method(mut self, method: Method) -> Self {
        self.parts.method = method;
        self
    }

    /// Set the request target, its query parameters replace the current ones.
    pub fn url(mut self, url: &str) -> Self {
        self.parts.set_url(url);
        self
    }

    /// Set the protocol version.
    pub fn version(mut self, version: Version) -> Self {
        self.parts.version = version;
        self
    }

    /// Add a header value.
    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.parts.headers.add(name, value);
        self
    }

    /// Store a context value.
    pub fn context<K, T>(mut self, name: K, value: T) -> Self
    where
        K: Into<String>,
        T: Any + Send + Sync,
    {
        self.parts.context.insert(name, value);
        self
    }

    /// Set the raw body bytes, including any transfer framing.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Build a request reading from the raw body bytes.
    pub fn build(self) -> Request<Cursor<Bytes>> {
        Request::from_parts(self.parts, Cursor::new(self.body))
    }

    /// Build a request reading from `reader`, raw body bytes are discarded.
    pub fn body_reader<R: Read>(self, reader: R) -> Request<R> {
        Request::from_parts(self.parts, reader)
    }
}
