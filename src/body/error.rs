//! Error types that can occur during body transfer.
use std::io;

use crate::http::StatusCode;

/// Body transfer error.
///
/// Carries a human-readable message through [`Display`][std::fmt::Display] and a numeric
/// classification through [`code`][BodyError::code].
pub struct BodyError {
    kind: Box<Kind>,
}

/// The classification of a [`BodyError`].
#[derive(Debug)]
pub enum Kind {
    /// Reading from the byte source failed, including invalid chunked framing.
    Read(io::Error),
    /// Writing to the byte sink failed.
    Write(io::Error),
    /// The byte sink accepted fewer bytes than it was given.
    ShortWrite {
        /// Bytes handed to the sink.
        expected: usize,
        /// Bytes the sink reported as written.
        written: usize,
    },
    /// The byte source ended before the declared `Content-Length` was transferred.
    Incomplete {
        /// Declared body length.
        declared: u64,
        /// Bytes transferred before the source ended.
        transferred: u64,
    },
}

impl BodyError {
    pub(crate) fn read(err: io::Error) -> Self {
        Self::new(Kind::Read(err))
    }

    pub(crate) fn write(err: io::Error) -> Self {
        Self::new(Kind::Write(err))
    }

    pub(crate) fn short_write(expected: usize, written: usize) -> Self {
        Self::new(Kind::ShortWrite { expected, written })
    }

    pub(crate) fn incomplete(declared: u64, transferred: u64) -> Self {
        Self::new(Kind::Incomplete { declared, transferred })
    }

    fn new(kind: Kind) -> Self {
        Self { kind: Box::new(kind) }
    }

    /// Returns the error classification.
    #[inline]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Consume the error into its classification.
    #[inline]
    pub fn into_kind(self) -> Kind {
        *self.kind
    }

    /// Returns the numeric classification.
    ///
    /// | code | kind                     |
    /// |------|--------------------------|
    /// | `1`  | [`Kind::Read`]           |
    /// | `2`  | [`Kind::Write`]          |
    /// | `3`  | [`Kind::ShortWrite`]     |
    /// | `4`  | [`Kind::Incomplete`]     |
    #[inline]
    pub fn code(&self) -> u16 {
        match self.kind.as_ref() {
            Kind::Read(_) => 1,
            Kind::Write(_) => 2,
            Kind::ShortWrite { .. } => 3,
            Kind::Incomplete { .. } => 4,
        }
    }

    /// Returns the status code a handler would usually respond with.
    ///
    /// Failures caused by the client map to `400 Bad Request`, failures of the byte sink map to
    /// `500 Internal Server Error`.
    #[inline]
    pub fn status(&self) -> StatusCode {
        match self.kind.as_ref() {
            Kind::Read(_) | Kind::Incomplete { .. } => StatusCode::BAD_REQUEST,
            Kind::Write(_) | Kind::ShortWrite { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::error::Error for BodyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind.as_ref() {
            Kind::Read(err) | Kind::Write(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for BodyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind.as_ref() {
            Kind::Read(err) => write!(f, "failed to read body: {err}"),
            Kind::Write(err) => write!(f, "failed to write body: {err}"),
            Kind::ShortWrite { expected, written } => {
                write!(f, "short write: {written} of {expected} bytes written")
            }
            Kind::Incomplete { declared, transferred } => {
                write!(f, "body ended after {transferred} of {declared} declared bytes")
            }
        }
    }
}

impl std::fmt::Debug for BodyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BodyError").field(&self.kind).finish()
    }
}

impl From<BodyError> for io::Error {
    fn from(value: BodyError) -> Self {
        match value.into_kind() {
            Kind::Read(err) | Kind::Write(err) => err,
            kind @ Kind::ShortWrite { .. } => {
                io::Error::new(io::ErrorKind::WriteZero, BodyError::new(kind))
            }
            kind @ Kind::Incomplete { .. } => {
                io::Error::new(io::ErrorKind::UnexpectedEof, BodyError::new(kind))
            }
        }
    }
}
