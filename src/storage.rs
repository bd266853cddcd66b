//! Browser localStorage behind the model's storage trait.

use board::content::ContentStore;
use board::registry::BoardRegistry;
use board::storage::Storage;

/// The board registry as used by the UI.
pub type Registry = BoardRegistry<LocalStorage>;

/// A board's content store as used by the UI.
pub type Content = ContentStore<LocalStorage>;

/// `window.localStorage` adapter. Failures (no window, storage disabled,
/// quota exceeded) degrade to absent reads and dropped writes with a logged
/// warning; the model treats storage as infallible and the last writer
/// wins across tabs.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn backend() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(_) => {
            log::warn!("localStorage is unavailable; state will not persist");
            None
        }
    }
}

impl Storage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        backend()?.get_item(key).unwrap_or_default()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = backend() {
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = backend() {
            if storage.remove_item(key).is_err() {
                log::warn!("failed to remove {key}");
            }
        }
    }
}
