use bytes::{Buf, BytesMut};
use std::{
    io::{self, Read},
    num::NonZeroU64,
};

use super::io_err;
use crate::log::debug;

/// Largest accepted chunk size.
const MAX_CHUNK_SIZE: u64 = 64 * 1024 * 1024;

/// Largest accepted chunk header or trailer line, including CRLF.
const MAX_LINE_LEN: usize = 4 * 1024;

/// A [`Read`] adapter that removes HTTP chunked transfer framing.
///
/// Only chunk payload bytes are yielded. End of stream is reported once the terminating
/// zero-size chunk and the trailer section are consumed. Chunk extensions and trailer fields are
/// skipped.
///
/// Framing errors are reported as [`io::ErrorKind::InvalidData`] carrying a [`ChunkedError`],
/// and an inner reader that ends before the terminating chunk is reported as
/// [`io::ErrorKind::UnexpectedEof`].
///
/// The inner reader is never read past the end of the chunked body, bytes that follow it stay in
/// the inner reader. Framing lines are read one byte at a time, so an unbuffered reader is better
/// wrapped in [`BufReader`][std::io::BufReader].
///
/// ```rust
/// use std::io::Read;
/// use wicket::body::ChunkedDecoder;
///
/// let mut decoder = ChunkedDecoder::new(&b"5\r\nhello\r\n0\r\n\r\n"[..]);
/// let mut body = String::new();
/// decoder.read_to_string(&mut body).unwrap();
///
/// assert_eq!(body, "hello");
/// ```
#[derive(Debug)]
pub struct ChunkedDecoder<R> {
    io: R,
    /// bytes of the framing element being parsed, never past its end
    buffer: BytesMut,
    phase: Phase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// `chunk-size [ chunk-ext ] CRLF`
    Header,
    /// `chunk-data`, remaining bytes
    Chunk(NonZeroU64),
    /// CRLF after `chunk-data`
    ChunkEnd,
    /// `*( field-line CRLF ) CRLF`
    Trailer,
    Eof,
}

impl<R: Read> ChunkedDecoder<R> {
    /// Create new [`ChunkedDecoder`] reading framed bytes from `io`.
    #[inline]
    pub fn new(io: R) -> Self {
        Self {
            io,
            buffer: BytesMut::new(),
            phase: Phase::Header,
        }
    }

    /// Returns `true` if the terminating chunk has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.phase, Phase::Eof)
    }

    /// Returns shared reference to the inner reader.
    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.io
    }

    /// Returns mutable reference to the inner reader.
    ///
    /// Reading from the inner reader directly corrupts the framing state.
    #[inline]
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.io
    }

    /// Destruct the decoder into the inner reader.
    ///
    /// After end of stream, the inner reader is positioned right after the chunked body.
    #[inline]
    pub fn into_inner(self) -> R {
        self.io
    }

    /// Read at most `want` framing bytes, returns the number of bytes read.
    fn fill(&mut self, want: usize) -> io::Result<usize> {
        let len = self.buffer.len();
        self.buffer.resize(len + want, 0);
        match self.io.read(&mut self.buffer[len..]) {
            Ok(read) => {
                self.buffer.truncate(len + read);
                Ok(read)
            }
            Err(err) => {
                self.buffer.truncate(len);
                Err(err)
            }
        }
    }

    /// Read more bytes of the current framing element, end of stream is an error.
    ///
    /// Line lengths are unknown up front, so lines are read one byte at a time.
    fn fill_required(&mut self) -> io::Result<()> {
        let want = match self.phase {
            Phase::ChunkEnd => 2usize.saturating_sub(self.buffer.len()).max(1),
            _ => 1,
        };
        match self.fill(want)? {
            0 => Err(io_err!(UnexpectedEof, "chunked body ended before the terminating chunk")),
            _ => Ok(()),
        }
    }

    /// Advance the framing state, returns `false` if more bytes are required.
    fn decode_framing(&mut self) -> Result<bool, ChunkedError> {
        match self.phase {
            Phase::Header => {
                let Some((chunk_len, header_len)) = decode_header(&self.buffer)? else {
                    return Ok(false);
                };
                self.buffer.advance(header_len);
                self.phase = match NonZeroU64::new(chunk_len) {
                    Some(len) => Phase::Chunk(len),
                    None => Phase::Trailer,
                };
            }
            Phase::ChunkEnd => {
                match self.buffer.first_chunk::<2>() {
                    Some(b"\r\n") => {}
                    Some(_) => return Err(ChunkedError::InvalidChunked),
                    None => return Ok(false),
                }
                self.buffer.advance(2);
                self.phase = Phase::Header;
            }
            Phase::Trailer => {
                let Some(line_len) = find_line(&self.buffer)? else {
                    return Ok(false);
                };
                self.buffer.advance(line_len);
                // an empty line ends the trailer section
                if line_len == 2 {
                    debug!("chunked body complete");
                    self.phase = Phase::Eof;
                }
            }
            Phase::Chunk(_) | Phase::Eof => {}
        }
        Ok(true)
    }

    fn read_chunk(&mut self, buf: &mut [u8], remaining: NonZeroU64) -> io::Result<usize> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "the result is at most buf.len() which is usize"
        )]
        let cap = (buf.len() as u64).min(remaining.get()) as usize;

        // framing is consumed up to its last byte, chunk data is read straight from `io`
        let read = match self.io.read(&mut buf[..cap])? {
            0 => return Err(io_err!(UnexpectedEof, "chunked body ended inside a chunk")),
            read => read,
        };

        self.phase = match NonZeroU64::new(remaining.get() - read as u64) {
            Some(leftover) => Phase::Chunk(leftover),
            None => Phase::ChunkEnd,
        };

        Ok(read)
    }
}

impl<R: Read> Read for ChunkedDecoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        loop {
            match self.phase {
                Phase::Eof => return Ok(0),
                Phase::Chunk(remaining) => return self.read_chunk(buf, remaining),
                _ => {
                    if !self.decode_framing().map_err(io::Error::from)? {
                        self.fill_required()?;
                    }
                }
            }
        }
    }
}

// ===== Parser =====

/// chunk      = chunk-size [ chunk-ext ] CRLF
/// chunk-size = 1*HEXDIG
/// chunk-ext  = *( BWS ";" BWS chunk-ext-name [ BWS "=" BWS chunk-ext-val ] )
///
/// Returns the chunk size and the header length including CRLF, or `None` if the header is not
/// complete yet.
fn decode_header(bytes: &[u8]) -> Result<Option<(u64, usize)>, ChunkedError> {
    let Some(digits_len) = bytes.iter().position(|e| !e.is_ascii_hexdigit()) else {
        // more than 16 hex digits overflow u64
        if bytes.len() > 16 {
            return Err(ChunkedError::ChunkTooLarge);
        }
        return Ok(None);
    };
    if digits_len == 0 {
        return Err(ChunkedError::InvalidChunked);
    }
    if digits_len > 16 {
        return Err(ChunkedError::ChunkTooLarge);
    }

    // `is_ascii_hexdigit` is subset of ASCII
    let digits = std::str::from_utf8(&bytes[..digits_len]).map_err(|_| ChunkedError::InvalidChunked)?;
    let chunk_len = match u64::from_str_radix(digits, 16) {
        Ok(len) if len <= MAX_CHUNK_SIZE => len,
        Ok(_) | Err(_) => return Err(ChunkedError::ChunkTooLarge),
    };

    // extension / CRLF delimiter
    let header_len = match bytes[digits_len] {
        b'\r' => match bytes.get(digits_len + 1) {
            Some(b'\n') => digits_len + 2,
            Some(_) => return Err(ChunkedError::InvalidChunked),
            None => return Ok(None),
        },
        b';' | b' ' | b'\t' => match find_line(&bytes[digits_len..])? {
            Some(ext_len) => digits_len + ext_len,
            None => return Ok(None),
        },
        _ => return Err(ChunkedError::InvalidChunked),
    };

    Ok(Some((chunk_len, header_len)))
}

/// Returns the length of the first CRLF terminated line including the CRLF, or `None` if the line
/// is not complete yet.
fn find_line(bytes: &[u8]) -> Result<Option<usize>, ChunkedError> {
    match bytes.iter().position(|&e| e == b'\n') {
        Some(lf) if lf > MAX_LINE_LEN => Err(ChunkedError::LineTooLong),
        Some(lf) => match lf.checked_sub(1).map(|cr| bytes[cr]) {
            Some(b'\r') => Ok(Some(lf + 1)),
            _ => Err(ChunkedError::InvalidChunked),
        },
        None if bytes.len() > MAX_LINE_LEN => Err(ChunkedError::LineTooLong),
        None => Ok(None),
    }
}

// ===== Error =====

/// A framing error in a chunked message body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkedError {
    /// Chunked format is invalid.
    InvalidChunked,
    /// Chunk size exceeds the accepted limit.
    ChunkTooLarge,
    /// Chunk header or trailer line exceeds the accepted limit.
    LineTooLong,
}

impl ChunkedError {
    const fn message(&self) -> &'static str {
        match self {
            Self::InvalidChunked => "invalid chunked format",
            Self::ChunkTooLarge => "chunk too large",
            Self::LineTooLong => "chunk line too long",
        }
    }
}

impl std::error::Error for ChunkedError { }

impl std::fmt::Display for ChunkedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<ChunkedError> for io::Error {
    #[inline]
    fn from(value: ChunkedError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode_header() {
        assert_eq!(decode_header(b"a\r\n"), Ok(Some((10, 3))));
        assert_eq!(decode_header(b"1F\r\nxx"), Ok(Some((31, 4))));
        assert_eq!(decode_header(b"0\r\n"), Ok(Some((0, 3))));
        assert_eq!(decode_header(b"5;name=value\r\nhello"), Ok(Some((5, 14))));
        assert_eq!(decode_header(b"5 ;ext\r\n"), Ok(Some((5, 8))));

        assert_eq!(decode_header(b""), Ok(None));
        assert_eq!(decode_header(b"5"), Ok(None));
        assert_eq!(decode_header(b"5\r"), Ok(None));
        assert_eq!(decode_header(b"5;ext"), Ok(None));

        assert_eq!(decode_header(b"\r\n"), Err(ChunkedError::InvalidChunked));
        assert_eq!(decode_header(b"5\n"), Err(ChunkedError::InvalidChunked));
        assert_eq!(decode_header(b"5\rx"), Err(ChunkedError::InvalidChunked));
        assert_eq!(decode_header(b"5;ext\n"), Err(ChunkedError::InvalidChunked));
        assert_eq!(decode_header(b"fffffffffff\r\n"), Err(ChunkedError::ChunkTooLarge));
        assert_eq!(decode_header(b"00000000000000001"), Err(ChunkedError::ChunkTooLarge));
    }

    #[test]
    fn test_find_line() {
        assert_eq!(find_line(b"\r\n"), Ok(Some(2)));
        assert_eq!(find_line(b"Expires: never\r\nrest"), Ok(Some(16)));
        assert_eq!(find_line(b"Expires"), Ok(None));
        assert_eq!(find_line(b"\n"), Err(ChunkedError::InvalidChunked));
        assert_eq!(find_line(&[b'a'; MAX_LINE_LEN + 1]), Err(ChunkedError::LineTooLong));
    }

    #[test]
    fn test_phases() {
        let mut decoder = ChunkedDecoder::new(&b"3\r\nabc\r\n0\r\n\r\n"[..]);
        let mut buf = [0u8; 2];

        assert_eq!(decoder.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf, b"ab");
        assert!(matches!(decoder.phase, Phase::Chunk(n) if n.get() == 1));

        assert_eq!(decoder.read(&mut buf).unwrap(), 1);
        assert_eq!(&buf[..1], b"c");
        assert_eq!(decoder.phase, Phase::ChunkEnd);

        assert_eq!(decoder.read(&mut buf).unwrap(), 0);
        assert!(decoder.is_eof());
        assert_eq!(decoder.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_stops_at_body_end() {
        let mut decoder = ChunkedDecoder::new(&b"2\r\nhi\r\n0\r\n\r\nGET / HTTP/1.1"[..]);
        let mut body = Vec::new();
        decoder.read_to_end(&mut body).unwrap();
        assert_eq!(body, b"hi");

        assert_eq!(decoder.into_inner(), b"GET / HTTP/1.1");
    }
}
