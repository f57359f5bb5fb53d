use std::str::FromStr;

use super::standard::{CONTENT_LENGTH, CONTENT_TYPE, TRANSFER_ENCODING};
use crate::multimap::{IgnoreAsciiCase, Iter, Keys, MultiMap};

/// HTTP Headers Multimap.
///
/// Header names are case-insensitive. The casing of the first inserted name is kept when the
/// headers are iterated.
///
/// ```rust
/// use wicket::headers::HeaderMap;
///
/// let mut map = HeaderMap::new();
/// map.add("Content-Type", "text/html");
///
/// assert!(map.contains("content-type"));
/// assert_eq!(map.get_first("CONTENT-TYPE"), Some("text/html"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    map: MultiMap<String, IgnoreAsciiCase>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    #[inline]
    pub fn new() -> Self {
        Self { map: MultiMap::new() }
    }

    /// Create new empty [`HeaderMap`] with room for at least `capacity` distinct names.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { map: MultiMap::with_capacity(capacity) }
    }

    /// Returns the number of distinct header names.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if the map contains a value for given header name.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains(name)
    }

    /// Returns the first header value corresponding to the given header name.
    #[inline]
    pub fn get_first(&self, name: &str) -> Option<&str> {
        self.map.get_first(name).map(String::as_str)
    }

    /// Returns all header values corresponding to the given header name, in insertion order.
    #[inline]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.map.get_all(name)
    }

    /// Returns the first header value that parses as `T`, or `default` if none does.
    ///
    /// See [`MultiMap::get_all_as`].
    #[inline]
    pub fn get_all_as<T: FromStr>(&self, name: &str, default: T) -> T {
        self.map.get_all_as(name, default)
    }

    /// Append a header name and value into the map.
    ///
    /// If header name is present, the value is appended as extra value.
    #[inline]
    pub fn add<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.map.add(name, value);
    }

    /// Returns an iterator over header names with all of their values.
    #[inline]
    pub fn iter(&self) -> Iter<'_, String> {
        self.map.iter()
    }

    /// Returns an iterator over header names, as first inserted.
    #[inline]
    pub fn keys(&self) -> Keys<'_, String> {
        self.map.keys()
    }

    /// Clear headers map, removing all the value.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns shared reference to the underlying [`MultiMap`].
    #[inline]
    pub fn as_multimap(&self) -> &MultiMap<String, IgnoreAsciiCase> {
        &self.map
    }
}

// ===== Typed headers =====

impl HeaderMap {
    /// Returns the declared body length from the first `Content-Length` value.
    ///
    /// Returns `None` if the header is missing, or its first value is not a base-10 non-negative
    /// integer. Later values are not consulted.
    pub fn content_length(&self) -> Option<u64> {
        self.get_first(CONTENT_LENGTH).and_then(parse_content_length)
    }

    /// Returns `true` if the final transfer coding is `chunked`.
    pub fn is_chunked(&self) -> bool {
        let Some(last) = self.get_all(TRANSFER_ENCODING).last() else {
            return false;
        };
        // chunked must be the final coding when present
        match last.rsplit(',').next() {
            Some(coding) => coding.trim().eq_ignore_ascii_case("chunked"),
            None => false,
        }
    }

    /// Returns the first `Content-Type` value.
    #[inline]
    pub fn content_type(&self) -> Option<&str> {
        self.get_first(CONTENT_TYPE)
    }
}

/// Content-Length = 1*DIGIT
///
/// Surrounding whitespace is ignored, a sign is not accepted.
fn parse_content_length(value: &str) -> Option<u64> {
    let digits = value.trim_matches([' ', '\t']);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // all ASCII digits, only overflow can fail
    digits.parse().ok()
}

// ===== Traits =====

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.map.fmt(f)
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a str, &'a [String]);

    type IntoIter = Iter<'a, String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for HeaderMap {
    #[inline]
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderMap {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { map: iter.into_iter().collect() }
    }
}

impl From<MultiMap<String, IgnoreAsciiCase>> for HeaderMap {
    #[inline]
    fn from(map: MultiMap<String, IgnoreAsciiCase>) -> Self {
        Self { map }
    }
}

#[cfg(test)]
mod test {
    use super::parse_content_length;

    #[test]
    fn content_length_digits() {
        assert_eq!(parse_content_length("0"), Some(0));
        assert_eq!(parse_content_length("1024"), Some(1024));
        assert_eq!(parse_content_length(" 12\t"), Some(12));
        assert_eq!(parse_content_length("007"), Some(7));

        assert_eq!(parse_content_length(""), None);
        assert_eq!(parse_content_length("+5"), None);
        assert_eq!(parse_content_length("-5"), None);
        assert_eq!(parse_content_length("5 5"), None);
        assert_eq!(parse_content_length("0x10"), None);
        assert_eq!(parse_content_length("length"), None);
        assert_eq!(parse_content_length("99999999999999999999999"), None);
    }
}
