use std::io::Write;

use super::Response;
use crate::{
    body::BodyError,
    headers::{HeaderMap, standard::{CONTENT_LENGTH, CONTENT_TYPE}},
    http::mime,
    log::{debug, error},
};

impl<W: Write> Response<W> {
    /// Write `bytes` as the response payload.
    ///
    /// Adds `Content-Type`, defaulting to `application/octet-stream`, and `Content-Length`
    /// headers, then hands the whole payload to the byte sink in one
    /// [`write`][Write::write] call.
    ///
    /// # Errors
    ///
    /// The response is unfinished after any error, nothing is retried.
    ///
    /// - write failure returns [`Kind::Write`]
    /// - sink accepting fewer bytes returns [`Kind::ShortWrite`]
    ///
    /// [`Kind::Write`]: crate::body::error::Kind::Write
    /// [`Kind::ShortWrite`]: crate::body::error::Kind::ShortWrite
    ///
    /// ```rust
    /// use wicket::response::Response;
    ///
    /// let mut response = Response::new(Vec::new());
    /// response.write_bytes(b"\x00\x01", None).unwrap();
    ///
    /// assert_eq!(response.headers().content_type(), Some("application/octet-stream"));
    /// assert_eq!(response.headers().content_length(), Some(2));
    /// assert_eq!(response.body(), b"\x00\x01");
    /// ```
    pub fn write_bytes(&mut self, bytes: &[u8], content_type: Option<&str>) -> Result<(), BodyError> {
        let content_type = content_type.unwrap_or(mime::APPLICATION_OCTET_STREAM);
        write_payload(&mut self.parts.headers, &mut self.body, bytes, content_type)
    }

    /// Write `text` as the response payload.
    ///
    /// Same as [`write_bytes`][Response::write_bytes] with the UTF-8 bytes of `text`, the
    /// `Content-Type` defaults to `text/plain; charset=utf-8`.
    pub fn write_text(&mut self, text: &str, content_type: Option<&str>) -> Result<(), BodyError> {
        let content_type = content_type.unwrap_or(mime::TEXT_PLAIN);
        write_payload(&mut self.parts.headers, &mut self.body, text.as_bytes(), content_type)
    }
}

fn write_payload<W: Write>(
    headers: &mut HeaderMap,
    sink: &mut W,
    payload: &[u8],
    content_type: &str,
) -> Result<(), BodyError> {
    headers.add(CONTENT_TYPE, content_type);
    headers.add(CONTENT_LENGTH, itoa::Buffer::new().format(payload.len()));

    match sink.write(payload) {
        Ok(written) if written < payload.len() => {
            error!("response short write, {written} of {} bytes", payload.len());
            Err(BodyError::short_write(payload.len(), written))
        }
        Ok(_) => {
            debug!("response written, {} bytes", payload.len());
            Ok(())
        }
        Err(err) => {
            error!("response write failed: {err}");
            Err(BodyError::write(err))
        }
    }
}
