//! HTTP Response
use crate::{headers::HeaderMap, http::StatusCode, request::delegate};

mod write;

/// HTTP Response Parts.
#[derive(Debug, Default)]
pub struct Parts {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// HTTP Response.
///
/// The body is the byte sink `W` the transport sends the response payload to. Serializing the
/// status line and headers is left to the transport.
#[derive(Debug, Default)]
pub struct Response<W> {
    parts: Parts,
    body: W,
}

/// Constructor
impl<W> Response<W> {
    /// Create `200 OK` [`Response`] writing to `body`.
    #[inline]
    pub fn new(body: W) -> Self {
        Self::from_parts(Parts::default(), body)
    }

    /// Create [`Response`] from [`Parts`] and a byte sink.
    #[inline]
    pub fn from_parts(parts: Parts, body: W) -> Self {
        Self { parts, body }
    }
}

impl<W> Response<W> {
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
        /// Returns shared reference to [`StatusCode`].
        status(),
        /// Returns mutable reference to [`StatusCode`].
        status_mut() -> StatusCode;

        /// Returns shared reference to [`HeaderMap`].
        headers(),
        /// Returns mutable reference to [`HeaderMap`].
        headers_mut() -> HeaderMap;
    }

    /// Returns shared reference to the byte sink.
    #[inline]
    pub fn body(&self) -> &W {
        &self.body
    }

    /// Returns mutable reference to the byte sink.
    #[inline]
    pub fn body_mut(&mut self) -> &mut W {
        &mut self.body
    }
}

/// Destructor
impl<W> Response<W> {
    /// Destruct response into [`Parts`] and the byte sink.
    #[inline]
    pub fn into_parts(self) -> (Parts, W) {
        (self.parts, self.body)
    }

    /// Destruct response into the byte sink.
    #[inline]
    pub fn into_body(self) -> W {
        self.body
    }
}

#[cfg(test)]
mod test;
