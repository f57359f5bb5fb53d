use fnv::FnvHashMap;
use std::{any::Any, fmt};

type AnyBox = Box<dyn Any + Send + Sync>;

/// Per-request contextual data keyed by name.
///
/// Values of any `'static` type can be stored, typed access returns [`None`] when the stored
/// value has another type.
///
/// ```rust
/// use wicket::http::Context;
///
/// let mut context = Context::new();
/// context.insert("user_id", 42u64);
///
/// assert_eq!(context.get::<u64>("user_id"), Some(&42));
/// assert_eq!(context.get::<String>("user_id"), None);
/// ```
#[derive(Default)]
pub struct Context {
    map: Option<FnvHashMap<String, AnyBox>>,
}

impl Context {
    /// Create new empty [`Context`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { map: None }
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.map.as_ref().map(FnvHashMap::len).unwrap_or_default()
    }

    /// Returns `true` if the context contains no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a value of any type is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.map.as_ref().is_some_and(|map| map.contains_key(name))
    }

    /// Returns a reference to the value stored under `name`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.map
            .as_ref()
            .and_then(|map| map.get(name))
            .and_then(|value| value.downcast_ref())
    }

    /// Returns a mutable reference to the value stored under `name`.
    pub fn get_mut<T: Any>(&mut self, name: &str) -> Option<&mut T> {
        self.map
            .as_mut()
            .and_then(|map| map.get_mut(name))
            .and_then(|value| value.downcast_mut())
    }

    /// Store a value under `name`.
    ///
    /// Returns the previous value if it has the same type, a previous value of another type is
    /// dropped.
    pub fn insert<K, T>(&mut self, name: K, value: T) -> Option<T>
    where
        K: Into<String>,
        T: Any + Send + Sync,
    {
        self.map
            .get_or_insert_default()
            .insert(name.into(), Box::new(value))
            .and_then(|prev| prev.downcast().ok())
            .map(|prev| *prev)
    }

    /// Removes and returns the value stored under `name`.
    ///
    /// A value of another type is left in place.
    pub fn remove<T: Any>(&mut self, name: &str) -> Option<T> {
        let map = self.map.as_mut()?;
        if !map.get(name)?.is::<T>() {
            return None;
        }
        map.remove(name)
            .and_then(|value| value.downcast().ok())
            .map(|value| *value)
    }

    /// Removes every value. Keeps the allocated memory for reuse.
    pub fn clear(&mut self) {
        if let Some(map) = self.map.as_mut() {
            map.clear();
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut set = f.debug_set();
        if let Some(map) = &self.map {
            set.entries(map.keys());
        }
        set.finish()
    }
}
