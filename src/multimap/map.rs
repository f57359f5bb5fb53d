use fnv::FnvHashMap;
use std::{marker::PhantomData, str::FromStr};

use super::{
    fold::{Exact, Fold},
    iter::{Iter, Keys},
};

/// Ordered multi-value map.
///
/// Each distinct key owns one entry holding a non-empty, ordered list of values. The entry keeps
/// the casing of the first inserted key, while lookup goes through the folded form given by `F`.
///
/// ```rust
/// use wicket::multimap::{MultiMap, IgnoreAsciiCase};
///
/// let mut map = MultiMap::<String, IgnoreAsciiCase>::new();
/// map.add("Accept", "text/html");
/// map.add("ACCEPT", "application/json");
///
/// assert!(map.contains("accept"));
/// assert_eq!(map.get_first("accept").unwrap(), "text/html");
/// assert_eq!(map.get_all("Accept"), ["text/html", "application/json"]);
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["Accept"]);
/// ```
pub struct MultiMap<V = String, F = Exact> {
    fields: Vec<Field<V>>,
    /// folded key to index in `fields`
    index: FnvHashMap<Box<str>, usize>,
    _fold: PhantomData<F>,
}

/// One distinct key with all of its values.
#[derive(Clone, PartialEq)]
pub(crate) struct Field<V> {
    key: Box<str>,
    /// never empty
    values: Vec<V>,
}

impl<V> Field<V> {
    #[inline]
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub(crate) fn values(&self) -> &[V] {
        &self.values
    }
}

impl<V, F> MultiMap<V, F> {
    /// Create new empty [`MultiMap`].
    #[inline]
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            index: FnvHashMap::default(),
            _fold: PhantomData,
        }
    }

    /// Create new empty [`MultiMap`] with room for at least `capacity` distinct keys.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
            index: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
            _fold: PhantomData,
        }
    }

    /// Returns the number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the map contains no key.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over every key with all of its values, in key insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.fields)
    }

    /// Returns an iterator over keys, as first inserted, in insertion order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(&self.fields)
    }

    /// Removes every entry, keeping the allocated memory.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.index.clear();
    }
}

// ===== Lookup =====

impl<V, F: Fold> MultiMap<V, F> {
    /// Returns `true` if the map contains a value for `key`.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(F::fold(key).as_ref())
    }

    /// Returns the first value inserted for `key`.
    #[inline]
    pub fn get_first(&self, key: &str) -> Option<&V> {
        self.field(key).and_then(|field| field.values.first())
    }

    /// Returns every value of `key` in insertion order.
    ///
    /// Unknown key returns an empty slice.
    #[inline]
    pub fn get_all(&self, key: &str) -> &[V] {
        match self.field(key) {
            Some(field) => &field.values,
            None => &[],
        }
    }

    /// Returns the first value of `key` that parses as `T`, or `default` if none does.
    ///
    /// Values that fail to parse are skipped, so a malformed duplicate does not hide a well-formed
    /// one.
    ///
    /// ```rust
    /// use wicket::multimap::MultiMap;
    ///
    /// let mut map = MultiMap::<String>::new();
    /// map.add("page", "two");
    /// map.add("page", "2");
    ///
    /// assert_eq!(map.get_all_as("page", 1u32), 2);
    /// assert_eq!(map.get_all_as("limit", 10u32), 10);
    /// ```
    pub fn get_all_as<T>(&self, key: &str, default: T) -> T
    where
        V: AsRef<str>,
        T: FromStr,
    {
        self.get_all(key)
            .iter()
            .find_map(|value| value.as_ref().parse().ok())
            .unwrap_or(default)
    }

    fn field(&self, key: &str) -> Option<&Field<V>> {
        let index = *self.index.get(F::fold(key).as_ref())?;
        self.fields.get(index)
    }
}

// ===== Mutation =====

impl<V, F: Fold> MultiMap<V, F> {
    /// Appends `value` to the values of `key`, creating the entry if absent.
    ///
    /// The casing of `key` is only kept when the entry is created.
    pub fn add<K, T>(&mut self, key: K, value: T)
    where
        K: Into<String>,
        T: Into<V>,
    {
        let key = key.into();
        let folded = F::fold(&key);
        let position = self.index.get(folded.as_ref()).copied();

        match position {
            Some(index) => self.fields[index].values.push(value.into()),
            None => {
                let folded = folded.into_owned().into_boxed_str();
                self.index.insert(folded, self.fields.len());
                self.fields.push(Field {
                    key: key.into_boxed_str(),
                    values: vec![value.into()],
                });
            }
        }
    }
}

// ===== Traits =====

impl<V, F> Default for MultiMap<V, F> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, F> Clone for MultiMap<V, F> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            index: self.index.clone(),
            _fold: PhantomData,
        }
    }
}

/// Two maps are equal when they hold the same keys, with the same casing and values, in the same
/// order.
impl<V: PartialEq, F> PartialEq for MultiMap<V, F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl<V: Eq, F> Eq for MultiMap<V, F> { }

impl<V: std::fmt::Debug, F> std::fmt::Debug for MultiMap<V, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V, F> IntoIterator for &'a MultiMap<V, F> {
    type Item = (&'a str, &'a [V]);

    type IntoIter = Iter<'a, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, T, V, F> Extend<(K, T)> for MultiMap<V, F>
where
    K: Into<String>,
    T: Into<V>,
    F: Fold,
{
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, T, V, F> FromIterator<(K, T)> for MultiMap<V, F>
where
    K: Into<String>,
    T: Into<V>,
    F: Fold,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
