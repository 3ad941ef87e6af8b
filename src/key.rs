use std::fmt;
use std::marker::PhantomData;

use crate::value::PrefValue;

/// A named slot read as `Option<T>`.
///
/// An `OptionalKey` carries no fallback: reading through it yields the stored
/// value when one is present and convertible to `T`, and `None` otherwise.
/// Writing `None` through it clears the slot.
///
/// # Examples
///
/// ```
/// use typed_prefs::{MemoryStore, OptionalKey, TypedAccess};
///
/// let store = MemoryStore::new();
/// let username = OptionalKey::<String>::new("username");
///
/// assert_eq!(store.get(&username), None);
/// store.set(&username, Some("ada".to_string()));
/// assert_eq!(store.get(&username).as_deref(), Some("ada"));
/// ```
pub struct OptionalKey<T> {
    name: String,
    // fn() -> T keeps the marker Send + Sync without requiring T to be.
    _value: PhantomData<fn() -> T>,
}

impl<T> OptionalKey<T> {
    /// Creates a key token for the slot named `name`.
    ///
    /// The name is immutable afterwards and used verbatim against the store.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _value: PhantomData,
        }
    }

    /// The string key this token addresses.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Clone for OptionalKey<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _value: PhantomData,
        }
    }
}

impl<T> fmt::Debug for OptionalKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalKey").field("name", &self.name).finish()
    }
}

/// A named slot read as a concrete `T`.
///
/// A `DefaultKey` carries a fallback value: reading through it substitutes
/// the default wherever the equivalent [`OptionalKey`] read would be `None`
/// (slot absent, or the stored value not convertible to `T`). Reads through
/// it never fail and never need unwrapping.
///
/// # Examples
///
/// ```
/// use typed_prefs::{DefaultKey, MemoryStore, TypedAccess};
///
/// let store = MemoryStore::new();
/// let volume = DefaultKey::new("volume", 0.5f64);
///
/// assert_eq!(store.get(&volume), 0.5);
/// store.set(&volume, 0.9);
/// assert_eq!(store.get(&volume), 0.9);
/// ```
#[derive(Debug, Clone)]
pub struct DefaultKey<T> {
    name: String,
    default: T,
}

impl<T> DefaultKey<T> {
    /// Creates a key token for the slot named `name`, falling back to
    /// `default` when the slot is absent or holds an unconvertible value.
    pub fn new(name: impl Into<String>, default: T) -> Self {
        Self {
            name: name.into(),
            default,
        }
    }

    /// The string key this token addresses.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fallback value substituted for absent or unconvertible slots.
    pub fn default_value(&self) -> &T {
        &self.default
    }
}

/// Dispatch surface shared by the two key flavors.
///
/// `Output` is what a read through the key produces (`Option<T>` for
/// [`OptionalKey`], `T` for [`DefaultKey`]); `Input` is what a write accepts.
/// The accessor in [`TypedAccess`](crate::TypedAccess) is written once
/// against this trait, so per-flavor behavior resolves at compile time.
pub trait PrefKey {
    type Value: PrefValue;
    type Output;
    type Input;

    /// The string key used verbatim against the store.
    fn name(&self) -> &str;

    /// Shapes a lookup result into this key's read type.
    fn resolve(&self, found: Option<Self::Value>) -> Self::Output;

    /// Maps a write input to the value to store; `None` means clear the slot.
    fn prepare(input: Self::Input) -> Option<Self::Value>;
}

impl<T: PrefValue> PrefKey for OptionalKey<T> {
    type Value = T;
    type Output = Option<T>;
    type Input = Option<T>;

    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, found: Option<T>) -> Option<T> {
        found
    }

    fn prepare(input: Option<T>) -> Option<T> {
        input
    }
}

impl<T: PrefValue + Clone> PrefKey for DefaultKey<T> {
    type Value = T;
    type Output = T;
    type Input = T;

    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, found: Option<T>) -> T {
        found.unwrap_or_else(|| self.default.clone())
    }

    fn prepare(input: T) -> Option<T> {
        Some(input)
    }
}
