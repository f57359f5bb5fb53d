//! HTTP Protocol.
mod method;
mod status;
mod version;
mod context;

pub mod mime;

pub use method::{Method, UnknownMethod};
pub use version::{Version, UnknownVersion};
pub use status::{StatusCode, InvalidStatusCode};
pub use context::Context;
