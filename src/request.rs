//! HTTP Request
use bytes::Bytes;
use std::io::{Read, Write};

use crate::{
    body::{self, BodyError},
    headers::HeaderMap,
    http::{Context, Method, Version},
    query::{self, QueryMap},
};

mod builder;

pub use builder::Builder;

/// HTTP Request Parts.
#[derive(Debug, Default)]
pub struct Parts {
    pub method: Method,
    /// Request target without the query and fragment.
    pub path: String,
    pub version: Version,
    pub headers: HeaderMap,
    pub query: QueryMap,
    pub context: Context,
}

impl Parts {
    /// Create [`Parts`] from a request target, splitting its query parameters.
    ///
    /// ```rust
    /// use wicket::request::Parts;
    ///
    /// let parts = Parts::from_url("/search?q=rust&page=2#top");
    /// assert_eq!(parts.path, "/search");
    /// assert_eq!(parts.query.get_first("page").map(String::as_str), Some("2"));
    /// ```
    pub fn from_url(url: &str) -> Self {
        let mut parts = Self::default();
        parts.set_url(url);
        parts
    }

    /// Replace the path and query parameters with the ones of `url`.
    pub fn set_url(&mut self, url: &str) {
        let end = url.find(['?', '#']).unwrap_or(url.len());
        self.path = url[..end].to_owned();
        self.query = query::parse_query_parameters(url);
    }
}

/// HTTP Request.
///
/// The body is the raw byte source `B` the transport reads the request from, positioned at the
/// start of the message body. Its framing is only removed by [`read_body`][Request::read_body]
/// and [`collect_body`][Request::collect_body].
#[derive(Debug, Default)]
pub struct Request<B> {
    parts: Parts,
    body: B,
}

/// Constructor
impl<B> Request<B> {
    /// Create [`Request`] from [`Parts`] and a byte source.
    #[inline]
    pub fn from_parts(parts: Parts, body: B) -> Self {
        Self { parts, body }
    }
}

impl Request<()> {
    /// Create a [`Builder`] for fixtures.
    #[inline]
    pub fn builder() -> Builder {
        Builder::new()
    }
}

impl<B> Request<B> {
    /// Returns shared reference to [`Parts`].
    #[inline]
    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    /// Returns mutable reference to [`Parts`].
    #[inline]
    pub fn parts_mut(&mut self) -> &mut Parts {
        &mut self.parts
    }

    delegate! {
        /// Returns shared reference to [`Method`].
        method(),
        /// Returns mutable reference to [`Method`].
        method_mut() -> Method;

        /// Returns the request target without the query.
        path(),
        /// Returns mutable reference to the request path.
        path_mut() -> String;

        /// Returns shared reference to [`Version`].
        version(),
        /// Returns mutable reference to [`Version`].
        version_mut() -> Version;

        /// Returns shared reference to [`HeaderMap`].
        headers(),
        /// Returns mutable reference to [`HeaderMap`].
        headers_mut() -> HeaderMap;

        /// Returns the decoded query parameters.
        query(),
        /// Returns mutable reference to the query parameters.
        query_mut() -> QueryMap;

        /// Returns shared reference to [`Context`].
        context(),
        /// Returns mutable reference to [`Context`].
        context_mut() -> Context;
    }

    /// Returns shared reference to the byte source.
    #[inline]
    pub fn body(&self) -> &B {
        &self.body
    }

    /// Returns mutable reference to the byte source.
    #[inline]
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }
}

impl<B: Read> Request<B> {
    /// Copy the request body into `sink`, see [`transfer_body`][body::transfer_body].
    #[inline]
    pub fn read_body<W>(&mut self, allow_infinite_read: bool, sink: &mut W) -> Result<u64, BodyError>
    where
        W: Write + ?Sized,
    {
        body::transfer_body(&mut self.body, &self.parts.headers, allow_infinite_read, sink)
    }

    /// Buffer the request body, see [`collect_body`][body::collect_body].
    #[inline]
    pub fn collect_body(&mut self, allow_infinite_read: bool) -> Result<Bytes, BodyError> {
        body::collect_body(&mut self.body, &self.parts.headers, allow_infinite_read)
    }
}

/// Destructor
impl<B> Request<B> {
    /// Destruct request into [`Parts`] and the byte source.
    #[inline]
    pub fn into_parts(self) -> (Parts, B) {
        (self.parts, self.body)
    }

    /// Destruct request into the byte source.
    #[inline]
    pub fn into_body(self) -> B {
        self.body
    }
}

// ===== Macros =====

macro_rules! delegate {
    (@CORE
        $(#[$rdoc:meta])*
        $mref:ident(),
        $(#[$mdoc:meta])*
        $mmut:ident() -> $ty:ty
    ) => {
        $(#[$rdoc])*
        #[inline]
        pub fn $mref(&self) -> &$ty {
            &self.parts.$mref
        }

        $(#[$mdoc])*
        #[inline]
        pub fn $mmut(&mut self) -> &mut $ty {
            &mut self.parts.$mref
        }
    };
    (
        $(
            $(#[$rdoc:meta])*
            $mref:ident(),
            $(#[$mdoc:meta])*
            $mmut:ident() -> $ty:ty;
        )*
    ) => {
        $(
            delegate! {
                @CORE
                $(#[$rdoc])*
                $mref(),
                $(#[$mdoc])*
                $mmut() -> $ty
            }
        )*
    };
}

pub(crate) use delegate;

#[cfg(test)]
mod test;
