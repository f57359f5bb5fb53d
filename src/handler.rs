//! Request handler.
use std::sync::Arc;

use crate::{request::Request, response::Response};

// ===== Handler =====

/// Handle one request by writing its response.
///
/// The transport owns both messages and lends them for the duration of one call.
///
/// ```rust
/// use std::io::{Read, Write};
/// use wicket::{body::BodyError, handler::Handler, request::Request, response::Response};
///
/// struct Echo;
///
/// impl<B: Read, W: Write> Handler<B, W> for Echo {
///     type Error = BodyError;
///
///     fn handle(&self, req: &mut Request<B>, res: &mut Response<W>) -> Result<(), BodyError> {
///         let body = req.collect_body(false)?;
///         res.write_bytes(&body, None)
///     }
/// }
///
/// let mut req = Request::builder().header("Content-Length", "2").body("hi").build();
/// let mut res = Response::new(Vec::new());
///
/// Echo.handle(&mut req, &mut res).unwrap();
/// assert_eq!(res.body(), b"hi");
/// ```
pub trait Handler<B, W> {
    type Error;

    fn handle(&self, request: &mut Request<B>, response: &mut Response<W>) -> Result<(), Self::Error>;
}

impl<H, B, W> Handler<B, W> for &H
where
    H: Handler<B, W> + ?Sized,
{
    type Error = H::Error;

    #[inline]
    fn handle(&self, request: &mut Request<B>, response: &mut Response<W>) -> Result<(), Self::Error> {
        H::handle(self, request, response)
    }
}

impl<H, B, W> Handler<B, W> for Box<H>
where
    H: Handler<B, W> + ?Sized,
{
    type Error = H::Error;

    #[inline]
    fn handle(&self, request: &mut Request<B>, response: &mut Response<W>) -> Result<(), Self::Error> {
        H::handle(self, request, response)
    }
}

impl<H, B, W> Handler<B, W> for Arc<H>
where
    H: Handler<B, W> + ?Sized,
{
    type Error = H::Error;

    #[inline]
    fn handle(&self, request: &mut Request<B>, response: &mut Response<W>) -> Result<(), Self::Error> {
        H::handle(self, request, response)
    }
}

// ===== FromFn =====

/// Create [`Handler`] from a function or closure.
///
/// ```rust
/// use std::convert::Infallible;
/// use wicket::{handler::{Handler, from_fn}, request::Request, response::Response};
///
/// let handler = from_fn(|_req: &mut Request<&[u8]>, res: &mut Response<Vec<u8>>| {
///     res.headers_mut().add("X-Handled", "1");
///     Ok::<_, Infallible>(())
/// });
///
/// let mut req = Request::builder().body_reader(&b""[..]);
/// let mut res = Response::new(Vec::new());
/// handler.handle(&mut req, &mut res).unwrap();
///
/// assert!(res.headers().contains("x-handled"));
/// ```
#[inline]
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn { f }
}

/// [`Handler`] returned by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

impl<F, B, W, E> Handler<B, W> for FromFn<F>
where
    F: Fn(&mut Request<B>, &mut Response<W>) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn handle(&self, request: &mut Request<B>, response: &mut Response<W>) -> Result<(), E> {
        (self.f)(request, response)
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
