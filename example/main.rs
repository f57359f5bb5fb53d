//! Handle one HTTP/1.1 request read from stdin, the response is written to stdout.
//!
//! ```bash
//! printf 'POST /echo HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello' | RUST_LOG=debug cargo run -p example
//! ```
use std::io::{self, BufRead, Read, Write};
use wicket::{
    Handler, Method, Request, Response, StatusCode, Version,
    body::BodyError,
    handler::from_fn,
    http::mime,
    request::Parts,
};

fn main() -> io::Result<()> {
    env_logger::init();

    let mut stdin = io::stdin().lock();
    let Some(parts) = read_head(&mut stdin)? else {
        log::warn!("no request");
        return Ok(());
    };

    log::info!("> {} {} {}", parts.method, parts.path, parts.version);

    let mut request = Request::from_parts(parts, stdin);
    let mut response = Response::new(Vec::new());

    if let Err(err) = from_fn(handle::<io::StdinLock<'static>>).handle(&mut request, &mut response) {
        log::error!("{err}");
        response = Response::new(Vec::new());
        *response.status_mut() = err.status();
        response
            .write_text(err.status().message(), None)
            .map_err(io::Error::from)?;
    }

    log::info!("< {}", response.status());
    write_response(io::stdout().lock(), response)
}

fn handle<B: Read>(req: &mut Request<B>, res: &mut Response<Vec<u8>>) -> Result<(), BodyError> {
    let path = req.path().clone();

    match (*req.method(), path.as_str()) {
        (Method::POST, "/echo") => {
            let chunked = req.headers().is_chunked();
            let body = req.collect_body(chunked)?;
            res.write_bytes(&body, req.headers().content_type())
        }
        (Method::GET, "/greet") => {
            let name = req.query().get_first("name").map_or("world", String::as_str);
            res.write_text(&format!("hello, {name}"), None)
        }
        (Method::GET, "/headers") => {
            let mut out = String::new();
            for (name, values) in req.headers() {
                out.push_str(&format!("{name}: {}\n", values.join(", ")));
            }
            res.write_text(&out, None)
        }
        _ => {
            *res.status_mut() = StatusCode::NOT_FOUND;
            res.write_text("<h1>Not Found</h1>", Some(mime::TEXT_HTML))
        }
    }
}

/// Read the request line and header fields.
fn read_head<R: BufRead>(reader: &mut R) -> io::Result<Option<Parts>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let mut tokens = line.split_ascii_whitespace();
    let (Some(method), Some(target), Some(version)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(invalid("malformed request line"));
    };

    let mut parts = Parts::from_url(target);
    parts.method = method.parse().map_err(invalid)?;
    parts.version = version.parse().map_err(invalid)?;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }

        let field = line.trim_end_matches(['\r', '\n']);
        if field.is_empty() {
            break;
        }

        let Some((name, value)) = field.split_once(':') else {
            return Err(invalid("malformed header field"));
        };
        parts.headers.add(name.trim(), value.trim());
    }

    Ok(Some(parts))
}

fn write_response<W: Write>(mut io: W, response: Response<Vec<u8>>) -> io::Result<()> {
    let (parts, body) = response.into_parts();

    write!(io, "{} {}\r\n", Version::HTTP_11, parts.status)?;
    for (name, values) in &parts.headers {
        for value in values {
            write!(io, "{name}: {value}\r\n")?;
        }
    }
    io.write_all(b"\r\n")?;
    io.write_all(&body)?;
    io.flush()
}

fn invalid<E: Into<Box<dyn std::error::Error + Send + Sync>>>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}
