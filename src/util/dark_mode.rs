//! Dark mode preference.
//!
//! Stored under the `darkMode` key as `"true"`/`"false"`; when nothing is
//! stored the system color scheme decides. Enabling adds the `dark` class
//! to `<html>` so the stylesheet can switch palettes.

const STORAGE_KEY: &str = "darkMode";

/// Read the preference, falling back to `prefers-color-scheme`.
pub fn read_preference() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
            return value == "true";
        }
    }

    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

/// Apply or remove the `dark` class on `<html>`.
pub fn apply(enabled: bool) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = el.class_list();
        let result = if enabled {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
        if result.is_err() {
            log::warn!("failed to update dark class");
        }
    }
}

/// Flip the preference, apply it, and persist the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }).is_err() {
                log::warn!("failed to persist dark mode preference");
            }
        }
    }
    next
}
