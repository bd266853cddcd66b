//! Welcome banner flag, tracked under the `welcomeShown` key.
//!
//! The banner shows on every visit until the user dismisses it once.

const STORAGE_KEY: &str = "welcomeShown";

/// Whether the welcome banner should be shown.
pub fn should_show() -> bool {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().unwrap_or(None))
        .and_then(|s| s.get_item(STORAGE_KEY).unwrap_or(None));
    stored.as_deref() != Some("true")
}

/// Record the dismissal so the banner stays hidden on future visits.
pub fn dismiss() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().unwrap_or(None)) {
        if storage.set_item(STORAGE_KEY, "true").is_err() {
            log::warn!("failed to persist welcome dismissal");
        }
    }
}
