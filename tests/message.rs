use std::io::{self, Cursor, Read, Write};

use wicket::{
    Handler, Method, Request, Response, StatusCode,
    body::{BodyError, ChunkedEncoder, error::Kind, transfer_body},
    handler::from_fn,
    headers::HeaderMap,
    query::parse_query_parameters,
};

/// Yields one byte per read.
struct Trickle<R>(R);

impl<R: Read> Read for Trickle<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = buf.len().min(1);
        self.0.read(&mut buf[..len])
    }
}

fn chunked(parts: &[&[u8]]) -> Vec<u8> {
    let mut encoder = ChunkedEncoder::new(Vec::new());
    for part in parts {
        encoder.write_all(part).unwrap();
    }
    encoder.finish().unwrap()
}

fn echo<B: Read>(req: &mut Request<B>, res: &mut Response<Vec<u8>>) -> Result<(), BodyError> {
    let allow_infinite_read = req.headers().is_chunked();
    let body = req.collect_body(allow_infinite_read)?;
    res.write_bytes(&body, req.headers().content_type())
}

#[test]
fn declared_length_exact() {
    let headers: HeaderMap = [("Content-Length", "5")].into_iter().collect();
    let mut source = Cursor::new(&b"12345"[..]);
    let mut sink = Vec::new();

    assert_eq!(transfer_body(&mut source, &headers, false, &mut sink).unwrap(), 5);
    assert_eq!(sink, b"12345");
}

#[test]
fn declared_length_shortfall() {
    let headers: HeaderMap = [("Content-Length", "8")].into_iter().collect();
    let mut source = Cursor::new(&b"12345"[..]);
    let mut sink = Vec::new();

    let err = transfer_body(&mut source, &headers, false, &mut sink).unwrap_err();
    assert!(matches!(err.kind(), Kind::Incomplete { declared: 8, transferred: 5 }));
    assert_eq!(err.code(), 4);
    assert_eq!(sink, b"12345");

    let err = io::Error::from(err);
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}

#[test]
fn chunked_with_declared_length() {
    let body = chunked(&[b"abcd", b"efghij"]);
    let headers: HeaderMap = [("Transfer-Encoding", "chunked"), ("Content-Length", "10")]
        .into_iter()
        .collect();
    let mut sink = Vec::new();

    let len = transfer_body(&mut &body[..], &headers, false, &mut sink);
    assert_eq!(len.unwrap(), 10);
    assert_eq!(sink, b"abcdefghij");
}

#[test]
fn chunked_slow_source() {
    let raw = b"4;ext=1\r\nWiki\r\n5\r\npedia\r\nE\r\n in\r\n\r\nchunks.\r\n0\r\nExpires: never\r\n\r\n";
    let headers: HeaderMap = [("Transfer-Encoding", "gzip, chunked")].into_iter().collect();
    let mut sink = Vec::new();

    let len = transfer_body(&mut Trickle(&raw[..]), &headers, true, &mut sink);
    assert_eq!(len.unwrap(), 23);
    assert_eq!(sink, b"Wikipedia in\r\n\r\nchunks.");
}

#[test]
fn request_to_response() {
    let mut req = Request::builder()
        .method(Method::POST)
        .url("/echo?format=raw")
        .header("content-type", "application/json")
        .header("Transfer-Encoding", "chunked")
        .body(chunked(&[br#"{"a":"#, b"1}"]))
        .build();
    let mut res = Response::new(Vec::new());

    from_fn(echo).handle(&mut req, &mut res).unwrap();

    assert_eq!(req.query().get_first("format").map(String::as_str), Some("raw"));
    assert_eq!(res.status(), &StatusCode::OK);
    assert_eq!(res.headers().get_first("Content-Type"), Some("application/json"));
    assert_eq!(res.headers().get_first("Content-Length"), Some("7"));
    assert_eq!(res.body(), br#"{"a":1}"#);
}

#[test]
fn request_without_length() {
    let mut req = Request::builder().method(Method::POST).body("unbounded").build();
    let mut res = Response::new(Vec::new());

    from_fn(echo).handle(&mut req, &mut res).unwrap();

    assert_eq!(res.headers().content_length(), Some(0));
    assert!(res.body().is_empty());
    assert_eq!(req.body().position(), 0);
}

#[test]
fn truncated_request() {
    let mut req = Request::builder()
        .header("Content-Length", "100")
        .body("too short")
        .build();
    let mut res = Response::new(Vec::new());

    let err = from_fn(echo).handle(&mut req, &mut res).unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(res.headers().is_empty());
}

#[test]
fn query_is_stable() {
    let url = "/search?q=%E2%9C%93&tag=a&tag=b+c&empty=";
    let first = parse_query_parameters(url);
    let second = parse_query_parameters(url);

    assert_eq!(first, second);
    assert_eq!(first.get_first("q").map(String::as_str), Some("\u{2713}"));
    assert_eq!(first.get_all("tag"), ["a", "b c"]);
    assert_eq!(first.get_first("empty").map(String::as_str), Some(""));
}
