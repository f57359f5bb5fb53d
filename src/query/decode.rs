use std::borrow::Cow;

/// Decode percent escapes, e.g: `a%20b` into `a b`.
///
/// A `%` that is not followed by two hex digits is kept as is. Decoded bytes that are not valid
/// UTF-8 are replaced with `U+FFFD`.
///
/// Borrows the input when there is nothing to decode.
#[inline]
pub fn percent_decode(input: &str) -> Cow<'_, str> {
    decode(input, false)
}

/// Decode a `application/x-www-form-urlencoded` component.
///
/// Literal `+` is decoded as space, then percent escapes are decoded as in [`percent_decode`], so
/// `%2B` still decodes to `+`.
#[inline]
pub fn decode_component(input: &str) -> Cow<'_, str> {
    decode(input, true)
}

fn decode(input: &str, plus_as_space: bool) -> Cow<'_, str> {
    let needs_decode = input
        .bytes()
        .any(|b| b == b'%' || (plus_as_space && b == b'+'));
    if !needs_decode {
        return Cow::Borrowed(input);
    }

    let mut output = Vec::with_capacity(input.len());
    let mut bytes = input.as_bytes();

    while let [byte, rest @ ..] = bytes {
        match byte {
            b'+' if plus_as_space => {
                output.push(b' ');
                bytes = rest;
            }
            b'%' => match hex_pair(rest) {
                Some(decoded) => {
                    output.push(decoded);
                    bytes = &rest[2..];
                }
                None => {
                    output.push(b'%');
                    bytes = rest;
                }
            },
            _ => {
                output.push(*byte);
                bytes = rest;
            }
        }
    }

    match String::from_utf8(output) {
        Ok(ok) => Cow::Owned(ok),
        Err(err) => Cow::Owned(String::from_utf8_lossy(err.as_bytes()).into_owned()),
    }
}

fn hex_pair(bytes: &[u8]) -> Option<u8> {
    let [hi, lo, ..] = bytes else {
        return None;
    };
    Some(hex_value(*hi)? << 4 | hex_value(*lo)?)
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_percent_decode() {
        assert!(matches!(percent_decode("plain"), Cow::Borrowed("plain")));
        assert_eq!(percent_decode("a%20b"), "a b");
        assert_eq!(percent_decode("%41%62%63"), "Abc");
        assert_eq!(percent_decode("%e2%9c%93"), "\u{2713}");
        assert_eq!(percent_decode("a+b"), "a+b");
    }

    #[test]
    fn test_decode_component() {
        assert!(matches!(decode_component("plain"), Cow::Borrowed("plain")));
        assert_eq!(decode_component("a+b"), "a b");
        assert_eq!(decode_component("a%2Bb"), "a+b");
        assert_eq!(decode_component("%2B+%2b"), "+ +");
    }

    #[test]
    fn test_invalid_escape() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%2"), "%2");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%%41"), "%A");
        assert_eq!(percent_decode("%ff"), "\u{FFFD}");
    }
}
