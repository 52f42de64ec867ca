use gitlogs_shared::{CredentialStore, KeyValueStore, StorageChange};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Storage, StorageEvent};

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// `window.localStorage`; blocked storage reads as empty and drops writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("localStorage write of {key} failed: {err:?}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.remove_item(key) {
                log::warn!("localStorage removal of {key} failed: {err:?}");
            }
        }
    }
}

pub fn credentials() -> CredentialStore<LocalStore> {
    CredentialStore::new(LocalStore)
}

/// Calls `on_change` with the re-read auth token whenever another tab
/// touches it. Dropping the listener unsubscribes.
pub fn subscribe_auth_token(on_change: impl Fn(Option<String>) + 'static) -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "storage", move |event| {
        let Some(event) = event.dyn_ref::<StorageEvent>() else {
            return;
        };
        let change = StorageChange {
            key: event.key(),
        };
        if change.touches_auth_token() {
            on_change(credentials().read_auth_token());
        }
    }))
}
