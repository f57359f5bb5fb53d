//! Query String Parser.
//!
//! ```rust
//! use wicket::query::parse_query_parameters;
//!
//! let query = parse_query_parameters("https://example.com/search?q=rust+http&page=2&page=3");
//!
//! assert_eq!(query.get_first("q").unwrap(), "rust http");
//! assert_eq!(query.get_all("page"), ["2", "3"]);
//! ```
mod decode;

pub use decode::{decode_component, percent_decode};

use crate::multimap::{Exact, MultiMap};

/// Decoded query parameters, keys are case-sensitive.
pub type QueryMap = MultiMap<String, Exact>;

/// Parse query parameters from a full URL text.
///
/// Only the text after the first `?` is significant. No `?`, or nothing after it, returns an
/// empty map.
///
/// See [`parse_query`] for the segment rules.
pub fn parse_query_parameters(url: &str) -> QueryMap {
    match url.split_once('?') {
        Some((_, query)) => parse_query(query),
        None => QueryMap::new(),
    }
}

/// Parse a bare query component, the text after `?`.
///
/// - segments are separated by `&`, empty segments produce no entry, wherever they are, so
///   `a=1&&b=2` holds no `("", "")` entry
/// - a segment without `=` is a key with an empty value, e.g: `flag` into `("flag", "")`
/// - `=` at the start is an empty key, e.g: `=value` into `("", "value")`
/// - otherwise the segment is split on the first `=`
/// - both key and value are decoded with [`decode_component`]
/// - repeated keys accumulate values in encounter order
/// - a fragment, `#` and everything after it, is not part of the query, so `key=a#b` is
///   `("key", "a")`; percent encode a literal `#` as `%23`
pub fn parse_query(query: &str) -> QueryMap {
    let query = match query.split_once('#') {
        Some((query, _fragment)) => query,
        None => query,
    };

    let mut map = QueryMap::new();

    for segment in query.split('&') {
        if segment.is_empty() {
            continue;
        }

        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));

        map.add(decode_component(key), decode_component(value));
    }

    map
}
