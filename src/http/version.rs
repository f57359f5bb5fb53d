/// HTTP Version.
///
/// [httpwg](https://httpwg.org/specs/rfc9112.html#http.version)
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Version(Inner);

#[derive(PartialEq, PartialOrd, Copy, Clone, Eq, Ord, Hash)]
enum Inner {
    Http09,
    Http10,
    Http11,
    H2,
    H3,
}

impl Version {
    /// `HTTP/0.9`
    pub const HTTP_09: Version = Version(Inner::Http09);

    /// `HTTP/1.0`
    pub const HTTP_10: Version = Version(Inner::Http10);

    /// `HTTP/1.1`
    pub const HTTP_11: Version = Version(Inner::Http11);

    /// `HTTP/2.0`
    pub const HTTP_2: Version = Version(Inner::H2);

    /// `HTTP/3.0`
    pub const HTTP_3: Version = Version(Inner::H3);

    /// Parse the protocol token of a request line, e.g: `HTTP/1.1`.
    ///
    /// Both `HTTP/2` and `HTTP/2.0` are accepted, the same goes for `HTTP/3`.
    pub const fn from_bytes(src: &[u8]) -> Option<Version> {
        match src {
            b"HTTP/0.9" => Some(Self::HTTP_09),
            b"HTTP/1.0" => Some(Self::HTTP_10),
            b"HTTP/1.1" => Some(Self::HTTP_11),
            b"HTTP/2" | b"HTTP/2.0" => Some(Self::HTTP_2),
            b"HTTP/3" | b"HTTP/3.0" => Some(Self::HTTP_3),
            _ => None,
        }
    }

    /// Returns string representation of HTTP version, e.g: `HTTP/1.1`
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self.0 {
            Inner::Http09 => "HTTP/0.9",
            Inner::Http10 => "HTTP/1.0",
            Inner::Http11 => "HTTP/1.1",
            Inner::H2 => "HTTP/2.0",
            Inner::H3 => "HTTP/3.0",
        }
    }
}

impl Default for Version {
    #[inline]
    fn default() -> Version {
        Version::HTTP_11
    }
}

impl std::str::FromStr for Version {
    type Err = UnknownVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes()).ok_or(UnknownVersion)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

// ===== Error =====

/// Protocol token is not a known HTTP version.
#[derive(Debug)]
pub struct UnknownVersion;

impl std::error::Error for UnknownVersion { }

impl std::fmt::Display for UnknownVersion {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown http version")
    }
}
