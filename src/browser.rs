//! Browser Helpers
//!
//! Thin wrappers over `web-sys` for navigation, time, randomness and storage.

use chrono::NaiveDate;
use trip_forms::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;

use crate::error::ApiError;

pub fn window() -> Result<web_sys::Window, ApiError> {
    web_sys::window().ok_or(ApiError::NoWindow)
}

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Milliseconds since the epoch
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Uniform sample in `[0, 1)`
pub fn random() -> f64 {
    js_sys::Math::random()
}

fn language() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_string())
}

/// Current local time, formatted for the user's locale
pub fn local_time_string() -> String {
    js_sys::Date::new_0().to_locale_time_string(&language()).into()
}

/// Local date for an ISO timestamp, or the raw text if it does not parse
pub fn local_date_string(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    date.to_locale_date_string(&language(), &JsValue::UNDEFINED).into()
}

/// Number with locale grouping, e.g. `12,500`
pub fn format_amount(value: f64) -> String {
    js_sys::Number::from(value).to_locale_string(&language()).into()
}

/// Today's local date
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

pub fn today_iso() -> String {
    today().map(trip_forms::dates::format_iso_date).unwrap_or_default()
}

pub fn navigate(url: &str) -> Result<(), ApiError> {
    window()?.location().set_href(url)?;
    Ok(())
}

pub fn reload() -> Result<(), ApiError> {
    window()?.location().reload()?;
    Ok(())
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// `window.localStorage` as a key-value store
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(js_storage_error)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

fn js_storage_error(value: JsValue) -> StorageError {
    StorageError::Backend(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(js_storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(js_storage_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(js_storage_error)
    }
}
