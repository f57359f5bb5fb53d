//! Content type constants.
//!
//! Values are used verbatim as the `Content-Type` header value.

/// `text/plain; charset=utf-8`
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// `text/html; charset=utf-8`
pub const TEXT_HTML: &str = "text/html; charset=utf-8";

/// `application/json`
pub const APPLICATION_JSON: &str = "application/json";

/// `application/octet-stream`
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

/// `application/x-www-form-urlencoded`
pub const APPLICATION_WWW_FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Returns `true` if the `Content-Type` value `content_type` has the media type `mime`.
///
/// Parameters are ignored and the media type is compared case-insensitively.
///
/// ```rust
/// use wicket::http::mime;
///
/// assert!(mime::matches("Application/JSON; charset=utf-8", mime::APPLICATION_JSON));
/// assert!(mime::matches("text/plain", mime::TEXT_PLAIN));
/// assert!(!mime::matches("text/html", mime::TEXT_PLAIN));
/// ```
pub fn matches(content_type: &str, mime: &str) -> bool {
    fn essence(value: &str) -> &str {
        value.split(';').next().unwrap_or_default().trim()
    }
    essence(content_type).eq_ignore_ascii_case(essence(mime))
}
