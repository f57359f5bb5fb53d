use std::io::{self, Write};

use super::{Parts, Response};
use crate::{body::error::Kind, http::StatusCode};

struct Closed;

impl Write for Closed {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts half of every write, records the number of calls.
#[derive(Default)]
struct Half {
    inner: Vec<u8>,
    calls: usize,
}

impl Write for Half {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        let len = buf.len() / 2;
        self.inner.extend_from_slice(&buf[..len]);
        Ok(len)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_text() {
    let mut response = Response::new(Vec::new());
    response.write_text("hello", None).unwrap();

    let (parts, body) = response.into_parts();
    assert_eq!(parts.status, StatusCode::OK);
    assert_eq!(parts.headers.get_first("content-type"), Some("text/plain; charset=utf-8"));
    assert_eq!(parts.headers.get_first("content-length"), Some("5"));
    assert_eq!(body, b"hello");
}

#[test]
fn write_bytes_with_content_type() {
    let parts = Parts { status: StatusCode::CREATED, ..Parts::default() };
    let mut response = Response::from_parts(parts, Vec::new());
    response.write_bytes(br#"{"id":1}"#, Some("application/json")).unwrap();

    assert_eq!(response.status(), &StatusCode::CREATED);
    assert_eq!(response.headers().content_type(), Some("application/json"));
    assert_eq!(response.headers().content_length(), Some(8));
    assert_eq!(response.into_body(), br#"{"id":1}"#);
}

#[test]
fn write_empty() {
    let mut response = Response::new(Vec::new());
    response.write_bytes(b"", None).unwrap();
    assert_eq!(response.headers().content_length(), Some(0));
    assert!(response.body().is_empty());
}

#[test]
fn write_failure() {
    let mut response = Response::new(Closed);
    let err = response.write_text("lost", None).unwrap_err();
    assert!(matches!(err.kind(), Kind::Write(err) if err.kind() == io::ErrorKind::BrokenPipe));
    assert_eq!(err.code(), 2);

    // headers are added before the write
    assert!(response.headers().contains("Content-Length"));
}

#[test]
fn short_write() {
    let mut response = Response::new(Half::default());
    let err = response.write_bytes(b"abcdef", None).unwrap_err();
    assert!(matches!(err.kind(), Kind::ShortWrite { expected: 6, written: 3 }));
    assert_eq!(response.body().calls, 1);
    assert_eq!(response.body().inner, b"abc");
}

#[test]
fn status_mut() {
    let mut response = Response::new(io::sink());
    *response.status_mut() = StatusCode::NOT_FOUND;
    assert_eq!(response.parts().status.as_str(), "404 Not Found");
}
