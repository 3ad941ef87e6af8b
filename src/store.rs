use url::Url;

use crate::key::PrefKey;
use crate::raw::{self, RawValue};
use crate::value::PrefValue;

/// Contract a preference store satisfies to sit under the typed layer.
///
/// Four primitive slot operations, plus the store's native lenient scalar
/// readers. The provided readers implement the leniency of a text-origin
/// property store, where scalar values frequently arrive string-encoded; a
/// backend whose native coercion differs can override them.
pub trait PrefStore {
    /// The raw value stored under `name`, or `None` when the slot is empty.
    ///
    /// Absence is always `None`, never a stored null-like value.
    fn raw(&self, name: &str) -> Option<RawValue>;

    /// Records `value` under `name`, replacing any previous value.
    fn set_raw(&self, name: &str, value: RawValue);

    /// Clears the slot named `name`. Clearing an empty slot is a no-op.
    fn remove_raw(&self, name: &str);

    /// Every name currently holding a value.
    fn keys(&self) -> Vec<String>;

    /// Native boolean read.
    ///
    /// `None` when the slot is empty or holds nothing boolean-ish. Numbers
    /// read as a nonzero test; strings read per the boolean-ish spellings
    /// ("true"/"false", "yes"/"no", integer strings). A string that is none
    /// of those is uninterpretable and reads as `None`, not false.
    fn bool_value(&self, name: &str) -> Option<bool> {
        match self.raw(name)? {
            RawValue::Boolean(b) => Some(b),
            RawValue::Integer(i) => Some(i != 0),
            RawValue::Real(r) => Some(r != 0.0),
            RawValue::String(s) => raw::parse_boolish(&s),
            _ => None,
        }
    }

    /// Native integer read.
    ///
    /// `None` when the slot is empty or holds a non-scalar value. A present
    /// but non-numeric string reads as `0`, never as `None`; the scalar
    /// reader cannot report absence for a value that exists.
    fn integer_value(&self, name: &str) -> Option<i64> {
        match self.raw(name)? {
            RawValue::Integer(i) => Some(i),
            RawValue::Boolean(b) => Some(i64::from(b)),
            RawValue::Real(r) => Some(r as i64),
            RawValue::String(s) => Some(raw::parse_integer(&s)),
            _ => None,
        }
    }

    /// Native single-precision read; narrows [`double_value`](Self::double_value).
    fn float_value(&self, name: &str) -> Option<f32> {
        self.double_value(name).map(|d| d as f32)
    }

    /// Native double-precision read, same shape as [`integer_value`](Self::integer_value).
    fn double_value(&self, name: &str) -> Option<f64> {
        match self.raw(name)? {
            RawValue::Real(r) => Some(r),
            RawValue::Integer(i) => Some(i as f64),
            RawValue::Boolean(b) => Some(f64::from(u8::from(b))),
            RawValue::String(s) => Some(raw::parse_real(&s)),
            _ => None,
        }
    }

    /// Native URL read.
    ///
    /// A stored string that parses as a URL resolves directly; an absolute
    /// file path resolves as a `file://` URL. Everything else reads as `None`.
    fn url_value(&self, name: &str) -> Option<Url> {
        match self.raw(name)? {
            RawValue::String(s) => Url::parse(&s).ok().or_else(|| Url::from_file_path(&s).ok()),
            _ => None,
        }
    }
}

/// The typed read/write surface, available on every [`PrefStore`].
///
/// Reads and writes dispatch on the key token: an
/// [`OptionalKey`](crate::OptionalKey) reads as `Option<T>` and accepts
/// `Option<T>` on write (`None` clears the slot); a
/// [`DefaultKey`](crate::DefaultKey) reads as a concrete `T` and accepts `T`.
/// Every operation is total: absence and type mismatch collapse to
/// `None`/default, so call sites never handle errors. The flip side is that
/// reading a key under the wrong `T` is indistinguishable from the value
/// being absent.
///
/// # Examples
///
/// ```
/// use typed_prefs::{DefaultKey, MemoryStore, OptionalKey, TypedAccess};
///
/// let store = MemoryStore::new();
///
/// let greeting = DefaultKey::new("greeting", "hello".to_string());
/// let last_user = OptionalKey::<String>::new("last-user");
///
/// assert_eq!(store.get(&greeting), "hello");
/// assert_eq!(store.get(&last_user), None);
///
/// store.set(&greeting, "howdy".to_string());
/// store.set(&last_user, Some("ada".to_string()));
///
/// assert_eq!(store.get(&greeting), "howdy");
/// assert_eq!(store.get(&last_user).as_deref(), Some("ada"));
///
/// store.remove(&greeting);
/// assert_eq!(store.get(&greeting), "hello");
/// ```
pub trait TypedAccess: PrefStore {
    /// Reads the slot a key addresses.
    ///
    /// The value type's [`PrefValue::lookup`] decides whether the read is
    /// strict or goes through the store's lenient scalar coercion.
    fn get<K: PrefKey>(&self, key: &K) -> K::Output {
        key.resolve(K::Value::lookup(self, key.name()))
    }

    /// Writes the slot a key addresses, storing the value verbatim.
    ///
    /// Writing `None` through an [`OptionalKey`](crate::OptionalKey) is
    /// equivalent to [`remove`](Self::remove).
    fn set<K: PrefKey>(&self, key: &K, value: K::Input) {
        match K::prepare(value) {
            Some(value) => self.set_raw(key.name(), value.to_raw()),
            None => self.remove_raw(key.name()),
        }
    }

    /// Clears the slot a key addresses. No-op when already empty.
    fn remove<K: PrefKey>(&self, key: &K) {
        self.remove_raw(key.name());
    }
}

impl<S: PrefStore + ?Sized> TypedAccess for S {}
