use std::collections::HashMap;

use chrono::{DateTime, Utc};
use url::Url;

use crate::raw::RawValue;
use crate::store::PrefStore;

/// Conversion between a typed value and the store's untyped representation.
///
/// Every type readable or writable through a key token implements this
/// trait. Writes always go through [`to_raw`](PrefValue::to_raw); reads go
/// through [`lookup`](PrefValue::lookup), whose default is the strict path:
/// fetch the raw value and demand an exact representation match. The scalar
/// types the store reads natively (`bool`, `i64`, `f32`, `f64`, [`Url`])
/// override `lookup` to route through the store's lenient readers instead,
/// inheriting their string-coercion quirks.
///
/// Built-in implementations: the five natively-read scalars above, plus
/// `String`, `Vec<u8>` (binary blob), `DateTime<Utc>`, homogeneous lists
/// (`Vec<bool>`, `Vec<i64>`, `Vec<f64>`, `Vec<String>`), and string-keyed
/// maps (`HashMap<String, T>` for any `T: PrefValue`).
///
/// # Custom types
///
/// Implement `PrefValue` directly for types the store has no native
/// representation for, choosing any raw encoding you can strictly decode:
///
/// ```
/// use typed_prefs::{MemoryStore, OptionalKey, PrefValue, RawValue, TypedAccess};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Resolution {
///     width: i64,
///     height: i64,
/// }
///
/// impl PrefValue for Resolution {
///     fn to_raw(&self) -> RawValue {
///         RawValue::Array(vec![
///             RawValue::Integer(self.width),
///             RawValue::Integer(self.height),
///         ])
///     }
///
///     fn from_raw(raw: &RawValue) -> Option<Self> {
///         match raw {
///             RawValue::Array(items) => match items.as_slice() {
///                 [RawValue::Integer(w), RawValue::Integer(h)] => Some(Resolution {
///                     width: *w,
///                     height: *h,
///                 }),
///                 _ => None,
///             },
///             _ => None,
///         }
///     }
/// }
///
/// let store = MemoryStore::new();
/// let key = OptionalKey::<Resolution>::new("display.resolution");
/// store.set(&key, Some(Resolution { width: 1920, height: 1080 }));
/// assert_eq!(store.get(&key).map(|r| r.width), Some(1920));
/// ```
pub trait PrefValue: Sized {
    /// Lowers the value into the representation the store records.
    fn to_raw(&self) -> RawValue;

    /// Strict recovery from a raw value: exact representation match or `None`.
    fn from_raw(raw: &RawValue) -> Option<Self>;

    /// Reads this type out of the slot named `name`.
    ///
    /// Defaults to the strict path. Natively-coerced scalars override this
    /// to use the store's lenient readers.
    fn lookup<S: PrefStore + ?Sized>(store: &S, name: &str) -> Option<Self> {
        store.raw(name).as_ref().and_then(Self::from_raw)
    }
}

impl PrefValue for bool {
    fn to_raw(&self) -> RawValue {
        RawValue::Boolean(*self)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    fn lookup<S: PrefStore + ?Sized>(store: &S, name: &str) -> Option<Self> {
        store.bool_value(name)
    }
}

impl PrefValue for i64 {
    fn to_raw(&self) -> RawValue {
        RawValue::Integer(*self)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    fn lookup<S: PrefStore + ?Sized>(store: &S, name: &str) -> Option<Self> {
        store.integer_value(name)
    }
}

impl PrefValue for f32 {
    fn to_raw(&self) -> RawValue {
        RawValue::Real(f64::from(*self))
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Real(r) => Some(*r as f32),
            _ => None,
        }
    }

    fn lookup<S: PrefStore + ?Sized>(store: &S, name: &str) -> Option<Self> {
        store.float_value(name)
    }
}

impl PrefValue for f64 {
    fn to_raw(&self) -> RawValue {
        RawValue::Real(*self)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Real(r) => Some(*r),
            _ => None,
        }
    }

    fn lookup<S: PrefStore + ?Sized>(store: &S, name: &str) -> Option<Self> {
        store.double_value(name)
    }
}

impl PrefValue for String {
    fn to_raw(&self) -> RawValue {
        RawValue::String(self.clone())
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Binary blobs. This is why homogeneous lists below are spelled out per
/// element type: a blanket `Vec<T>` impl would collide with this one.
impl PrefValue for Vec<u8> {
    fn to_raw(&self) -> RawValue {
        RawValue::Data(self.clone())
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Data(bytes) => Some(bytes.clone()),
            _ => None,
        }
    }
}

impl PrefValue for DateTime<Utc> {
    fn to_raw(&self) -> RawValue {
        RawValue::Date(*self)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl PrefValue for Url {
    fn to_raw(&self) -> RawValue {
        RawValue::String(self.as_str().to_string())
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::String(s) => Url::parse(s).ok(),
            _ => None,
        }
    }

    fn lookup<S: PrefStore + ?Sized>(store: &S, name: &str) -> Option<Self> {
        store.url_value(name)
    }
}

fn list_to_raw<T: PrefValue>(items: &[T]) -> RawValue {
    RawValue::Array(items.iter().map(T::to_raw).collect())
}

fn list_from_raw<T: PrefValue>(raw: &RawValue) -> Option<Vec<T>> {
    match raw {
        RawValue::Array(items) => items.iter().map(T::from_raw).collect(),
        _ => None,
    }
}

impl PrefValue for Vec<bool> {
    fn to_raw(&self) -> RawValue {
        list_to_raw(self)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        list_from_raw(raw)
    }
}

impl PrefValue for Vec<i64> {
    fn to_raw(&self) -> RawValue {
        list_to_raw(self)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        list_from_raw(raw)
    }
}

impl PrefValue for Vec<f64> {
    fn to_raw(&self) -> RawValue {
        list_to_raw(self)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        list_from_raw(raw)
    }
}

impl PrefValue for Vec<String> {
    fn to_raw(&self) -> RawValue {
        list_to_raw(self)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        list_from_raw(raw)
    }
}

impl<T: PrefValue> PrefValue for HashMap<String, T> {
    fn to_raw(&self) -> RawValue {
        RawValue::Dictionary(self.iter().map(|(k, v)| (k.clone(), v.to_raw())).collect())
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Dictionary(entries) => entries
                .iter()
                .map(|(k, v)| T::from_raw(v).map(|v| (k.clone(), v)))
                .collect(),
            _ => None,
        }
    }
}
