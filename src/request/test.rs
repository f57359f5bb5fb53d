use bytes::Bytes;
use std::io::Cursor;

use super::{Parts, Request};
use crate::http::{Method, Version};

const _: () = {
    const fn is_send_sync<T: Send + Sync>() { }
    is_send_sync::<Parts>();
    is_send_sync::<Request<Cursor<Bytes>>>();
};

#[test]
fn from_url() {
    let parts = Parts::from_url("/users/1?fields=name&fields=email");
    assert_eq!(parts.path, "/users/1");
    assert_eq!(parts.query.get_all("fields"), ["name", "email"]);

    let parts = Parts::from_url("/plain");
    assert_eq!(parts.path, "/plain");
    assert!(parts.query.is_empty());

    let parts = Parts::from_url("/doc#intro");
    assert_eq!(parts.path, "/doc");
}

#[test]
fn builder() {
    let request = Request::builder().build();
    assert_eq!(request.method(), &Method::GET);
    assert_eq!(request.version(), &Version::HTTP_11);
    assert_eq!(request.path(), "/");
    assert!(request.headers().is_empty());

    let request = Request::builder()
        .method(Method::PUT)
        .version(Version::HTTP_10)
        .url("/items?id=7")
        .header("X-Trace", "a")
        .header("x-trace", "b")
        .context("tenant", String::from("acme"))
        .build();

    assert_eq!(request.method(), &Method::PUT);
    assert_eq!(request.version(), &Version::HTTP_10);
    assert_eq!(request.query().get_first("id").map(String::as_str), Some("7"));
    assert_eq!(request.headers().get_all("X-TRACE"), ["a", "b"]);
    assert_eq!(request.context().get::<String>("tenant").map(String::as_str), Some("acme"));
}

#[test]
fn read_body() {
    let mut request = Request::builder()
        .header("Content-Length", "4")
        .body("ping and more")
        .build();

    let mut sink = Vec::new();
    assert_eq!(request.read_body(false, &mut sink).unwrap(), 4);
    assert_eq!(sink, b"ping");
    assert_eq!(request.body().position(), 4);
}

#[test]
fn collect_chunked_body() {
    let mut request = Request::builder()
        .header("Transfer-Encoding", "chunked")
        .body_reader(&b"3\r\nabc\r\n0\r\n\r\n"[..]);

    assert_eq!(&request.collect_body(true).unwrap()[..], b"abc");

    let (parts, rest) = request.into_parts();
    assert!(parts.headers.is_chunked());
    assert!(rest.is_empty());
}

#[test]
fn body_without_length() {
    let mut request = Request::builder().body("ignored").build();
    assert!(request.collect_body(false).unwrap().is_empty());
    assert_eq!(request.into_body().position(), 0);
}
