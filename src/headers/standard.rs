//! Header names used by this crate.
//!
//! Names are written in their conventional casing. Lookup in [`HeaderMap`] is case-insensitive,
//! so any casing works.
//!
//! [`HeaderMap`]: super::HeaderMap

/// [`Content-Length`](https://www.rfc-editor.org/rfc/rfc9110.html#name-content-length)
pub const CONTENT_LENGTH: &str = "Content-Length";

/// [`Content-Type`](https://www.rfc-editor.org/rfc/rfc9110.html#name-content-type)
pub const CONTENT_TYPE: &str = "Content-Type";

/// [`Transfer-Encoding`](https://www.rfc-editor.org/rfc/rfc9112.html#name-transfer-encoding)
pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
