//! Wall clock for id generation, card timestamps, and date display.

use wasm_bindgen::JsValue;

/// Current time in epoch milliseconds.
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Format epoch milliseconds as a locale date string for display.
pub fn format_date(ms: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(ms as f64));
    String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED))
}
