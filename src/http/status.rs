use std::num::NonZeroU16;

/// HTTP [Status Code][rfc].
///
/// Only codes present in the status table can be represented, see [`StatusCode::from_u16`].
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(NonZeroU16);

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

impl StatusCode {
    /// Returns status code value, e.g: `200`.
    #[inline]
    pub const fn status(&self) -> u16 {
        self.0.get()
    }

    /// Returns `true` for `2xx` status codes.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.0.get(), 200..300)
    }

    /// Returns `true` for `3xx` status codes.
    #[inline]
    pub const fn is_redirection(&self) -> bool {
        matches!(self.0.get(), 300..400)
    }

    /// Returns `true` for `4xx` status codes.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.0.get(), 400..500)
    }

    /// Returns `true` for `5xx` status codes.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(self.0.get(), 500..600)
    }
}

macro_rules! status_table {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = Self(NonZeroU16::new($int).unwrap());
            )*

            /// Lookup the status table.
            ///
            /// Returns [`None`] if `code` is not in the table.
            ///
            /// ```rust
            /// use wicket::http::StatusCode;
            ///
            /// assert_eq!(StatusCode::from_u16(404), Some(StatusCode::NOT_FOUND));
            /// assert_eq!(StatusCode::from_u16(299), None);
            /// ```
            pub const fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $(
                        $int => Some(Self::$id),
                    )*
                    _ => None,
                }
            }

            /// Returns status code and reason phrase, e.g: `"200 OK"`.
            pub const fn as_str(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => concat!(stringify!($int), " ", $msg),
                    )*
                    // SAFETY: StatusCode is only constructed from the table
                    _ => unsafe { std::hint::unreachable_unchecked() },
                }
            }

            /// Returns reason phrase, e.g: `"OK"`.
            pub const fn message(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => $msg,
                    )*
                    // SAFETY: StatusCode is only constructed from the table
                    _ => unsafe { std::hint::unreachable_unchecked() },
                }
            }
        }
    };
}

status_table! {
    /// `100`. The client should continue the request.
    100 CONTINUE "Continue";
    /// `101`. The server is switching to the protocol requested by the `Upgrade` header.
    101 SWITCHING_PROTOCOLS "Switching Protocols";
    /// `200`. The request succeeded.
    200 OK "OK";
    /// `201`. The request succeeded, and a new resource was created as a result.
    201 CREATED "Created";
    /// `202`. The request has been received but not yet acted upon.
    202 ACCEPTED "Accepted";
    /// `204`. There is no content to send for this request, but the headers are useful.
    204 NO_CONTENT "No Content";
    /// `206`. Only part of the resource is sent, as requested by the `Range` header.
    206 PARTIAL_CONTENT "Partial Content";
    /// `301`. The URI of the requested resource has been changed permanently.
    301 MOVED_PERMANENTLY "Moved Permanently";
    /// `302`. The URI of the requested resource has been changed temporarily.
    302 FOUND "Found";
    /// `303`. Get the requested resource at another URI with a GET request.
    303 SEE_OTHER "See Other";
    /// `304`. The response has not been modified, the cached version can be used.
    304 NOT_MODIFIED "Not Modified";
    /// `307`. Get the requested resource at another URI with the same method.
    307 TEMPORARY_REDIRECT "Temporary Redirect";
    /// `308`. The resource is now permanently located at another URI, with the same method.
    308 PERMANENT_REDIRECT "Permanent Redirect";
    /// `400`. The server cannot process the request due to a client error.
    400 BAD_REQUEST "Bad Request";
    /// `401`. Semantically this response means "unauthenticated".
    401 UNAUTHORIZED "Unauthorized";
    /// `403`. The client's identity is known, but it does not have access rights to the content.
    403 FORBIDDEN "Forbidden";
    /// `404`. The server cannot find the requested resource.
    404 NOT_FOUND "Not Found";
    /// `405`. The request method is not supported by the target resource.
    405 METHOD_NOT_ALLOWED "Method Not Allowed";
    /// `406`. No content conforms to the criteria given by the user agent.
    406 NOT_ACCEPTABLE "Not Acceptable";
    /// `408`. The server would like to shut down this unused connection.
    408 REQUEST_TIMEOUT "Request Timeout";
    /// `409`. The request conflicts with the current state of the server.
    409 CONFLICT "Conflict";
    /// `410`. The requested content has been permanently deleted.
    410 GONE "Gone";
    /// `411`. The server requires the `Content-Length` header field.
    411 LENGTH_REQUIRED "Length Required";
    /// `412`. Preconditions given in the request headers are not met.
    412 PRECONDITION_FAILED "Precondition Failed";
    /// `413`. The request body is larger than limits defined by server.
    413 CONTENT_TOO_LARGE "Content Too Large";
    /// `414`. The URI is longer than the server is willing to interpret.
    414 URI_TOO_LONG "URI Too Long";
    /// `415`. The media format of the request body is not supported.
    415 UNSUPPORTED_MEDIA_TYPE "Unsupported Media Type";
    /// `416`. The ranges specified by the `Range` header cannot be fulfilled.
    416 RANGE_NOT_SATISFIABLE "Range Not Satisfiable";
    /// `417`. The expectation of the `Expect` header cannot be met.
    417 EXPECTATION_FAILED "Expectation Failed";
    /// `418`. The server refuses the attempt to brew coffee with a teapot.
    418 IM_A_TEAPOT "I'm a teapot";
    /// `422`. The request was well-formed but contains semantic errors.
    422 UNPROCESSABLE_CONTENT "Unprocessable Content";
    /// `429`. The user has sent too many requests in a given amount of time.
    429 TOO_MANY_REQUESTS "Too Many Requests";
    /// `431`. The request header fields are too large.
    431 REQUEST_HEADER_FIELDS_TOO_LARGE "Request Header Fields Too Large";
    /// `500`. The server has encountered a situation it does not know how to handle.
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
    /// `501`. The request method is not supported by the server.
    501 NOT_IMPLEMENTED "Not Implemented";
    /// `502`. The server, working as a gateway, got an invalid response.
    502 BAD_GATEWAY "Bad Gateway";
    /// `503`. The server is not ready to handle the request.
    503 SERVICE_UNAVAILABLE "Service Unavailable";
    /// `504`. The server, working as a gateway, cannot get a response in time.
    504 GATEWAY_TIMEOUT "Gateway Timeout";
    /// `505`. The HTTP version used in the request is not supported by the server.
    505 HTTP_VERSION_NOT_SUPPORTED "HTTP Version Not Supported";
}

impl TryFrom<u16> for StatusCode {
    type Error = InvalidStatusCode;

    #[inline]
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_u16(value).ok_or(InvalidStatusCode)
    }
}

impl std::str::FromStr for StatusCode {
    type Err = InvalidStatusCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>()
            .ok()
            .and_then(Self::from_u16)
            .ok_or(InvalidStatusCode)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("StatusCode").field(&self.as_str()).finish()
    }
}

// ===== Error =====

/// Status code is not in the status table.
#[derive(Debug)]
pub struct InvalidStatusCode;

impl std::error::Error for InvalidStatusCode { }

impl std::fmt::Display for InvalidStatusCode {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("invalid status code")
    }
}
