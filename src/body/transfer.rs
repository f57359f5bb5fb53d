use bytes::{BufMut, Bytes, BytesMut};
use std::io::{Read, Write};

use super::{BodyError, ChunkedDecoder};
use crate::headers::HeaderMap;
use crate::log::{debug, warning};

/// Maximum number of bytes moved by one read and write pair.
pub const BUFFER_SIZE: usize = 8 * 1024;

/// Initial capacity limit of [`collect_body`], the declared length is not trusted beyond it.
const COLLECT_CAPACITY: u64 = 64 * 1024;

/// Copy a request body from `source` into `sink`, returns the number of bytes transferred.
///
/// The body framing is taken from `headers`:
///
/// - `Content-Length` is the declared length, bytes past it are never read from the (decoded)
///   source. A missing or invalid value means the length is unknown.
/// - unknown length with `allow_infinite_read` set to `false` performs no read at all and returns
///   `Ok(0)`, so an unterminated body of an untrusted client is never read
/// - `Transfer-Encoding: chunked` wraps `source` with [`ChunkedDecoder`], the declared length
///   still bounds the decoded bytes
///
/// The source is never read past the end of the body, bytes that follow it, such as the next
/// message of the connection, stay in the source.
///
/// Bytes are moved through a fixed buffer of [`BUFFER_SIZE`] bytes, every read slice is handed to
/// the sink in one [`write`][Write::write] call before the next read.
///
/// # Errors
///
/// Nothing is retried, bytes transferred before a failure stay in the sink.
///
/// - read failure, including invalid chunked framing, returns [`Kind::Read`]
/// - write failure returns [`Kind::Write`]
/// - sink accepting fewer bytes than given returns [`Kind::ShortWrite`]
/// - source ending before a known positive declared length returns [`Kind::Incomplete`]
///
/// [`Kind::Read`]: super::error::Kind::Read
/// [`Kind::Write`]: super::error::Kind::Write
/// [`Kind::ShortWrite`]: super::error::Kind::ShortWrite
/// [`Kind::Incomplete`]: super::error::Kind::Incomplete
///
/// ```rust
/// use wicket::{body::transfer_body, headers::HeaderMap};
///
/// let mut headers = HeaderMap::new();
/// headers.add("Content-Length", "5");
///
/// let mut source = &b"hello world"[..];
/// let mut sink = Vec::new();
///
/// assert_eq!(transfer_body(&mut source, &headers, false, &mut sink).unwrap(), 5);
/// assert_eq!(sink, b"hello");
/// assert_eq!(source, b" world");
/// ```
pub fn transfer_body<R, W>(
    source: &mut R,
    headers: &HeaderMap,
    allow_infinite_read: bool,
    sink: &mut W,
) -> Result<u64, BodyError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let declared = headers.content_length();

    if declared.is_none() && !allow_infinite_read {
        debug!("body length unknown, infinite read not allowed, skipping body");
        return Ok(0);
    }

    if headers.is_chunked() {
        copy(&mut ChunkedDecoder::new(source), declared, sink)
    } else {
        copy(source, declared, sink)
    }
}

/// Buffer an entire request body.
///
/// Follows the same rules and errors as [`transfer_body`].
pub fn collect_body<R>(
    source: &mut R,
    headers: &HeaderMap,
    allow_infinite_read: bool,
) -> Result<Bytes, BodyError>
where
    R: Read + ?Sized,
{
    #[allow(
        clippy::cast_possible_truncation,
        reason = "capacity is at most COLLECT_CAPACITY"
    )]
    let capacity = headers.content_length().unwrap_or(0).min(COLLECT_CAPACITY) as usize;

    let mut writer = BytesMut::with_capacity(capacity).writer();
    transfer_body(source, headers, allow_infinite_read, &mut writer)?;
    Ok(writer.into_inner().freeze())
}

fn copy<R, W>(source: &mut R, declared: Option<u64>, sink: &mut W) -> Result<u64, BodyError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut transferred = 0u64;

    loop {
        let cap = match declared {
            Some(declared) => match declared - transferred {
                0 => break,
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "remaining is at most BUFFER_SIZE"
                )]
                remaining => remaining.min(BUFFER_SIZE as u64) as usize,
            },
            None => BUFFER_SIZE,
        };

        let read = match source.read(&mut buffer[..cap]) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) => {
                warning!("body read failed after {transferred} bytes: {err}");
                return Err(BodyError::read(err));
            }
        };

        match sink.write(&buffer[..read]) {
            Ok(written) if written < read => {
                warning!("body short write, {written} of {read} bytes");
                return Err(BodyError::short_write(read, written));
            }
            Ok(_) => transferred += read as u64,
            Err(err) => {
                warning!("body write failed after {transferred} bytes: {err}");
                return Err(BodyError::write(err));
            }
        }
    }

    if let Some(declared) = declared
        && transferred < declared
    {
        warning!("body ended after {transferred} of {declared} declared bytes");
        return Err(BodyError::incomplete(declared, transferred));
    }

    debug!("body transferred, {transferred} bytes");
    Ok(transferred)
}
