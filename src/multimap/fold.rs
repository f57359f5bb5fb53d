use std::borrow::Cow;

/// Key normalization used by [`MultiMap`][super::MultiMap] for lookup and insertion.
///
/// Two keys refer to the same entry if their folded forms are equal.
pub trait Fold {
    /// Returns the folded form of `key`.
    fn fold(key: &str) -> Cow<'_, str>;
}

/// Case-sensitive keys, compared byte by byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Exact;

impl Fold for Exact {
    #[inline]
    fn fold(key: &str) -> Cow<'_, str> {
        Cow::Borrowed(key)
    }
}

/// ASCII case-insensitive keys.
///
/// Keys are folded to ASCII lowercase. Non-ASCII characters are compared as is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IgnoreAsciiCase;

impl Fold for IgnoreAsciiCase {
    #[inline]
    fn fold(key: &str) -> Cow<'_, str> {
        if key.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(key.to_ascii_lowercase())
        } else {
            Cow::Borrowed(key)
        }
    }
}
