use typed_prefs::{MemoryStore, OptionalKey, PrefStore, PrefValue, RawValue, TypedAccess};

/// Demonstrates reading and writing a custom type through a key token by
/// implementing its codec directly.
#[derive(Debug, Clone, PartialEq)]
struct WindowFrame {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

impl PrefValue for WindowFrame {
    fn to_raw(&self) -> RawValue {
        RawValue::Array(vec![
            RawValue::Integer(self.x),
            RawValue::Integer(self.y),
            RawValue::Integer(self.width),
            RawValue::Integer(self.height),
        ])
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Array(items) => match items.as_slice() {
                [RawValue::Integer(x), RawValue::Integer(y), RawValue::Integer(w), RawValue::Integer(h)] => {
                    Some(WindowFrame {
                        x: *x,
                        y: *y,
                        width: *w,
                        height: *h,
                    })
                }
                _ => None,
            },
            _ => None,
        }
    }
}

fn frame_key() -> OptionalKey<WindowFrame> {
    OptionalKey::new("main-window.frame")
}

fn main() {
    let store = MemoryStore::new();

    println!("before any write: {:?}", store.get(&frame_key()));

    store.set(
        &frame_key(),
        Some(WindowFrame {
            x: 40,
            y: 40,
            width: 800,
            height: 600,
        }),
    );

    let frame = store.get(&frame_key()).expect("frame was just written");
    println!("restored frame:   {frame:?}");
    println!("stored raw value: {:?}", store.raw("main-window.frame"));

    // Something else scribbled over the slot; the decode shrugs it off.
    store.set_raw("main-window.frame", RawValue::String("foo".into()));
    println!("after scribble:   {:?}", store.get(&frame_key()));
}
