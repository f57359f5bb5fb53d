use super::map::Field;

/// Iterator over keys and their values, returned from [`MultiMap::iter`].
///
/// [`MultiMap::iter`]: super::MultiMap::iter
pub struct Iter<'a, V> {
    iter: std::slice::Iter<'a, Field<V>>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(fields: &'a [Field<V>]) -> Self {
        Self { iter: fields.iter() }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a [V]);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|field| (field.key(), field.values()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|field| (field.key(), field.values()))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> { }

impl<V: std::fmt::Debug> std::fmt::Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter.clone().map(|field| (field.key(), field.values())))
            .finish()
    }
}

/// Iterator over keys, returned from [`MultiMap::keys`].
///
/// [`MultiMap::keys`]: super::MultiMap::keys
pub struct Keys<'a, V> {
    iter: std::slice::Iter<'a, Field<V>>,
}

impl<'a, V> Keys<'a, V> {
    pub(crate) fn new(fields: &'a [Field<V>]) -> Self {
        Self { iter: fields.iter() }
    }
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Field::key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> { }

impl<V> std::fmt::Debug for Keys<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter.clone().map(Field::key)).finish()
    }
}
