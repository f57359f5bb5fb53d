//! HTTP Message Body.
//!
//! ## Transfer
//!
//! - [`transfer_body`] copy a request body from a byte source into a byte sink
//! - [`collect_body`] buffer an entire request body
//! - [`BodyError`] every failure of a transfer, with its classification
//!
//! ## Framing
//!
//! - [`ChunkedDecoder`] remove chunked transfer framing from a [`Read`][std::io::Read]
//! - [`ChunkedEncoder`] apply chunked transfer framing to a [`Write`][std::io::Write]
//!
mod chunked;
mod encoder;
mod transfer;
pub mod error;

pub use chunked::{ChunkedDecoder, ChunkedError};
pub use encoder::ChunkedEncoder;
pub use transfer::{BUFFER_SIZE, collect_body, transfer_body};
pub use error::BodyError;

// ===== Macros =====

/// `io_err!(ConnectionAborted)`
/// `io_err!(ConnectionAborted, "already closed")`
/// `io_err!("already closed")`
macro_rules! io_err {
    ($kind:ident) => {
        ::std::io::Error::from(::std::io::ErrorKind::$kind)
    };
    ($kind:ident,$e:expr) => {
        ::std::io::Error::new(::std::io::ErrorKind::$kind, $e)
    };
    ($e:literal) => {
        ::std::io::Error::new(::std::io::ErrorKind::InvalidData, $e)
    };
}

pub(crate) use io_err;
