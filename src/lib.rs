//! HTTP Request and Response Toolkit
//!
//! In-memory HTTP messages exchanged between a transport and handler code.
//!
//! - [`multimap`] ordered multi-value map, optionally ASCII case-insensitive
//! - [`headers`] header map and the header fields the toolkit consumes
//! - [`query`] query string parsing and percent decoding
//! - [`body`] request body transfer and chunked framing
//! - [`request`] and [`response`] message containers
//! - [`handler`] the capability of handling one request
//!
//! Everything is synchronous, byte sources and sinks are [`std::io::Read`] and
//! [`std::io::Write`] supplied by the transport.
//!
//! ```rust
//! use wicket::{handler::{Handler, from_fn}, http::Method, request::Request, response::Response};
//!
//! let handler = from_fn(|req: &mut Request<_>, res: &mut Response<Vec<u8>>| {
//!     let name = req.query().get_first("name").cloned().unwrap_or_default();
//!     res.write_text(&format!("hello {name}"), None)
//! });
//!
//! let mut req = Request::builder().method(Method::GET).url("/greet?name=world").build();
//! let mut res = Response::new(Vec::new());
//! handler.handle(&mut req, &mut res).unwrap();
//!
//! assert_eq!(res.body(), b"hello world");
//! ```
#![warn(missing_debug_implementations)]

mod log;

pub mod multimap;
pub mod headers;
pub mod query;
pub mod http;
pub mod body;
pub mod request;
pub mod response;
pub mod handler;

pub use http::{Method, StatusCode, Version};
pub use request::Request;
pub use response::Response;
pub use handler::Handler;
