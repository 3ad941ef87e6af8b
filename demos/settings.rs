use typed_prefs::{DefaultKey, MemoryStore, OptionalKey, PrefStore, RawValue, TypedAccess};

/// Demonstrates declaring an application's settings as key tokens and
/// sharing one store between components.
fn main() {
    let store = MemoryStore::new();

    // Components hold clones; all of them see the same slots.
    let ui = UiSettings::new(store.clone());
    let net = NetworkSettings::new(store.clone());

    println!("-- fresh store --");
    println!("theme:       {}", store.get(&UiSettings::theme()));
    println!("volume:      {}", store.get(&UiSettings::volume()));
    println!("proxy:       {:?}", store.get(&NetworkSettings::proxy()));

    // Change a few settings through their tokens.
    ui.set_theme("dark");
    ui.set_volume(0.9);
    net.set_proxy("http://127.0.0.1:8080");
    net.record_attempts(7);

    println!("\n-- after changes --");
    println!("theme:       {}", store.get(&UiSettings::theme()));
    println!("volume:      {}", store.get(&UiSettings::volume()));
    println!("proxy:       {:?}", net.proxy_url().map(|u| u.to_string()));
    println!("attempts:    {}", store.get(&NetworkSettings::attempts()));

    // Values written as text by some other tool still read as scalars.
    store.set_raw("net.attempts", RawValue::from("24680"));
    println!("\n-- text-written attempts --");
    println!("attempts:    {}", store.get(&NetworkSettings::attempts()));

    // Clearing a setting brings the default back.
    store.remove(&UiSettings::theme());
    println!("\n-- after reset --");
    println!("theme:       {}", store.get(&UiSettings::theme()));

    let mut names = store.keys();
    names.sort();
    println!("\noccupied slots: {names:?}");
}

struct UiSettings {
    store: MemoryStore,
}

impl UiSettings {
    fn theme() -> DefaultKey<String> {
        DefaultKey::new("ui.theme", "light".to_string())
    }

    fn volume() -> DefaultKey<f64> {
        DefaultKey::new("ui.volume", 0.5)
    }

    fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn set_theme(&self, theme: &str) {
        self.store.set(&Self::theme(), theme.to_string());
    }

    fn set_volume(&self, volume: f64) {
        self.store.set(&Self::volume(), volume);
    }
}

struct NetworkSettings {
    store: MemoryStore,
}

impl NetworkSettings {
    fn proxy() -> OptionalKey<typed_prefs::Url> {
        OptionalKey::new("net.proxy")
    }

    fn attempts() -> DefaultKey<i64> {
        DefaultKey::new("net.attempts", 0)
    }

    fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn set_proxy(&self, url: &str) {
        self.store
            .set(&Self::proxy(), typed_prefs::Url::parse(url).ok());
    }

    fn proxy_url(&self) -> Option<typed_prefs::Url> {
        self.store.get(&Self::proxy())
    }

    fn record_attempts(&self, n: i64) {
        self.store.set(&Self::attempts(), n);
    }
}
