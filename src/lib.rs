//! # typed-prefs
//!
//! Strongly-typed key tokens over string-keyed preference stores.
//!
//! A preference store hands back untyped values by string key, which forces
//! every call site to cast and to decide what a missing or mismatched value
//! means. `typed-prefs` moves both decisions into the key itself: declare a
//! key token once, with its value type and (optionally) its default, and
//! every read or write through that token is typed and total, with a single
//! fallback policy.
//!
//! ## Key Features
//!
//! - **Two key flavors**: [`OptionalKey<T>`] reads as `Option<T>`,
//!   [`DefaultKey<T>`] carries a fallback and always reads as a concrete `T`
//! - **Total calls**: absence and type mismatch collapse to `None` or the
//!   key's default, so call sites never handle errors
//! - **Store-native coercion**: `bool`, `i64`, `f32`, `f64`, and [`Url`]
//!   reads go through the store's lenient scalar readers, so values written
//!   as text by other tools still resolve; every other type matches strictly
//! - **Pluggable backends**: any store implementing [`PrefStore`] gets the
//!   typed surface for free via [`TypedAccess`]; [`MemoryStore`] ships as a
//!   thread-safe in-process backend
//! - **Open value set**: implement [`PrefValue`] to read and write your own
//!   types through the same keys
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use typed_prefs::{DefaultKey, MemoryStore, OptionalKey, TypedAccess};
//!
//! let store = MemoryStore::new();
//!
//! let volume = DefaultKey::new("volume", 0.5f64);
//! let username = OptionalKey::<String>::new("username");
//!
//! // Nothing written yet: the default key falls back, the optional is None.
//! assert_eq!(store.get(&volume), 0.5);
//! assert_eq!(store.get(&username), None);
//!
//! store.set(&volume, 0.9);
//! store.set(&username, Some("ada".to_string()));
//!
//! assert_eq!(store.get(&volume), 0.9);
//! assert_eq!(store.get(&username).as_deref(), Some("ada"));
//!
//! // Writing None through an optional key clears the slot.
//! store.set(&username, None);
//! assert_eq!(store.get(&username), None);
//! ```
//!
//! ### Declaring Keys in One Place
//!
//! ```rust
//! use typed_prefs::{DefaultKey, MemoryStore, OptionalKey, TypedAccess};
//!
//! struct Keys;
//!
//! impl Keys {
//!     fn theme() -> DefaultKey<String> {
//!         DefaultKey::new("ui.theme", "light".to_string())
//!     }
//!
//!     fn recent_files() -> OptionalKey<Vec<String>> {
//!         OptionalKey::new("recent-files")
//!     }
//! }
//!
//! let store = MemoryStore::new();
//!
//! assert_eq!(store.get(&Keys::theme()), "light");
//!
//! store.set(&Keys::recent_files(), Some(vec!["notes.txt".to_string()]));
//! assert_eq!(store.get(&Keys::recent_files()).map(|f| f.len()), Some(1));
//! ```
//!
//! ### Lenient Scalar Reads
//!
//! Scalar types inherit the store's text-origin coercion, so a slot written
//! by hand or by another tool as a string still reads:
//!
//! ```rust
//! use typed_prefs::{DefaultKey, MemoryStore, PrefStore, RawValue, TypedAccess};
//!
//! let store = MemoryStore::new();
//! let retries = DefaultKey::new("retries", 3i64);
//!
//! store.set_raw("retries", RawValue::String("24680".into()));
//! assert_eq!(store.get(&retries), 24680);
//!
//! // A present but non-numeric string reads as the store's zero, not as
//! // missing, so the key's default does not apply.
//! store.set_raw("retries", RawValue::String("around ten".into()));
//! assert_eq!(store.get(&retries), 0);
//! ```
//!
//! ### Watch Out for Aliased Keys
//!
//! Two tokens with the same name address the same slot. A read under an
//! unrelated type is indistinguishable from the slot being absent; there is
//! no error to catch:
//!
//! ```rust
//! use typed_prefs::{MemoryStore, OptionalKey, TypedAccess};
//!
//! let store = MemoryStore::new();
//!
//! store.set(&OptionalKey::<String>::new("id"), Some("a1b2".to_string()));
//! assert_eq!(store.get(&OptionalKey::<Vec<u8>>::new("id")), None);
//! ```

mod key;
mod memory;
mod raw;
mod store;
mod value;

pub use key::{DefaultKey, OptionalKey, PrefKey};
pub use memory::MemoryStore;
pub use raw::RawValue;
pub use store::{PrefStore, TypedAccess};
pub use value::PrefValue;

// Re-exported for key declarations and custom codecs.
pub use chrono::{DateTime, Utc};
pub use url::Url;
