use std::io::{self, Write};

/// A [`Write`] adapter that applies HTTP chunked transfer framing.
///
/// Each non-empty [`write`][Write::write] call is framed as exactly one chunk.
/// [`finish`][ChunkedEncoder::finish] writes the terminating zero-size chunk.
///
/// A failed write may leave a partially written chunk in the inner writer, the framing cannot be
/// resumed after an error.
///
/// ```rust
/// use std::io::Write;
/// use wicket::body::ChunkedEncoder;
///
/// let mut encoder = ChunkedEncoder::new(Vec::new());
/// encoder.write_all(b"hello").unwrap();
/// let framed = encoder.finish().unwrap();
///
/// assert_eq!(framed, b"5\r\nhello\r\n0\r\n\r\n");
/// ```
#[derive(Debug)]
pub struct ChunkedEncoder<W> {
    io: W,
}

impl<W: Write> ChunkedEncoder<W> {
    /// Create new [`ChunkedEncoder`] writing framed bytes into `io`.
    #[inline]
    pub fn new(io: W) -> Self {
        Self { io }
    }

    /// Returns shared reference to the inner writer.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.io
    }

    /// Write the terminating chunk and return the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.io.write_all(b"0\r\n\r\n")?;
        self.io.flush()?;
        Ok(self.io)
    }
}

impl<W: Write> Write for ChunkedEncoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // an empty chunk would terminate the body
        if buf.is_empty() {
            return Ok(0);
        }
        write!(self.io, "{:X}\r\n", buf.len())?;
        self.io.write_all(buf)?;
        self.io.write_all(b"\r\n")?;
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.io.flush()
    }
}

#[cfg(test)]
mod test {
    use std::io::Read;

    use super::*;
    use crate::body::ChunkedDecoder;

    #[test]
    fn test_chunk_per_write() {
        let mut encoder = ChunkedEncoder::new(Vec::new());
        encoder.write_all(b"0123456789abcdef").unwrap();
        encoder.write_all(b"").unwrap();
        encoder.write_all(b"xyz").unwrap();
        let framed = encoder.finish().unwrap();

        assert_eq!(framed, b"10\r\n0123456789abcdef\r\n3\r\nxyz\r\n0\r\n\r\n");
    }

    #[test]
    fn test_decode_encoded() {
        let payload: Vec<u8> = (0..=255u8).cycle().take(5000).collect();

        let mut encoder = ChunkedEncoder::new(Vec::new());
        for chunk in payload.chunks(777) {
            encoder.write_all(chunk).unwrap();
        }
        let framed = encoder.finish().unwrap();

        let mut decoded = Vec::new();
        ChunkedDecoder::new(&framed[..]).read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, payload);
    }
}
