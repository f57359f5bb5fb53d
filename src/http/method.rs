/// HTTP Method.
///
/// This API follows the [RFC9110] and the PATCH method from [RFC5789].
///
/// Arbitrary method is not supported.
///
/// [RFC5789]: https://www.rfc-editor.org/rfc/rfc5789
/// [RFC9110]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-methods>
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Method(u8);

struct Props {
    value: &'static str,
    safe: bool,
    idem: bool,
}

props! {
    static PROPS: [9];

    /// The [GET] method requests transfer of a current representation of the target resource.
    ///
    /// [GET]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-get>
    pub const GET = (0, "GET", safe, idempotent);
    /// The [HEAD] method is identical to GET except that the server MUST NOT send content in the
    /// response.
    ///
    /// [HEAD]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-head>
    pub const HEAD = (1, "HEAD", safe, idempotent);
    /// The [POST] method requests that the target resource process the enclosed representation.
    ///
    /// [POST]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-post>
    pub const POST = (2, "POST", , );
    /// The [PUT] method requests that the state of the target resource be created or replaced
    /// with the enclosed representation.
    ///
    /// [PUT]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-put>
    pub const PUT = (3, "PUT", , idempotent);
    /// The [DELETE] method requests that the origin server remove the target resource.
    ///
    /// [DELETE]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-delete>
    pub const DELETE = (4, "DELETE", , idempotent);
    /// The [CONNECT] method requests that the recipient establish a tunnel to the destination
    /// origin server.
    ///
    /// [CONNECT]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-connect>
    pub const CONNECT = (5, "CONNECT", , );
    /// The [OPTIONS] method requests the communication options available for the target resource.
    ///
    /// [OPTIONS]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-options>
    pub const OPTIONS = (6, "OPTIONS", safe, idempotent);
    /// The [TRACE] method requests a remote, application-level loop-back of the request message.
    ///
    /// [TRACE]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-trace>
    pub const TRACE = (7, "TRACE", safe, idempotent);
    /// The [PATCH] method requests that a set of changes described in the request entity be
    /// applied to the resource.
    ///
    /// [PATCH]: <https://www.rfc-editor.org/rfc/rfc5789#section-2>
    pub const PATCH = (8, "PATCH", , );
}

impl Method {
    /// Create [`Method`] from bytes, method names are case-sensitive.
    ///
    /// ```rust
    /// use wicket::http::Method;
    ///
    /// assert_eq!(Method::from_bytes(b"PATCH"), Some(Method::PATCH));
    /// assert_eq!(Method::from_bytes(b"get"), None);
    /// ```
    pub fn from_bytes(src: &[u8]) -> Option<Method> {
        PROPS
            .iter()
            .position(|props| props.value.as_bytes() == src)
            .and_then(|idx| u8::try_from(idx).ok())
            .map(Self)
    }

    /// Returns `true` if method is considered ["safe"].
    ///
    /// Of the request methods defined by RFC9110, the GET, HEAD, OPTIONS, and TRACE methods are
    /// defined to be safe.
    ///
    /// ["safe"]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-safe-methods>
    #[inline]
    pub const fn is_safe(&self) -> bool {
        PROPS[self.0 as usize].safe
    }

    /// Returns `true` if method is considered ["idempotent"].
    ///
    /// PUT, DELETE, and the safe methods are idempotent.
    ///
    /// ["idempotent"]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-idempotent-methods>
    #[inline]
    pub const fn is_idempotent(&self) -> bool {
        PROPS[self.0 as usize].idem
    }

    /// Returns string representation of the method.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        PROPS[self.0 as usize].value
    }
}

impl std::str::FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes()).ok_or(UnknownMethod)
    }
}

impl std::fmt::Debug for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.as_str(), f)
    }
}

impl std::fmt::Display for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Error =====

/// Method name is not one of the supported methods.
pub struct UnknownMethod;

impl std::error::Error for UnknownMethod { }

impl std::fmt::Debug for UnknownMethod {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown method")
    }
}

impl std::fmt::Display for UnknownMethod {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown method")
    }
}

// ===== Macros =====

macro_rules! props {
    (
        static $props:ident: [$len:literal];
        $(
           $(#[$doc:meta])*
           pub const $name:ident = ($idx:literal, $val:literal, $($safe:ident)?, $($idem:ident)?);
        )*
    ) => {
        impl Method {
            $(
               $(#[$doc])*
               pub const $name: Self = Self($idx);
            )*
        }

        static $props: [Props; $len] = [
            $(
                Props { value: $val, safe: prop!($($safe)?), idem: prop!($($idem)?) },
            )*
        ];
    };
}

macro_rules! prop {
    (safe) => { true };
    (idempotent) => { true };
    () => { false };
}

use {props, prop};
