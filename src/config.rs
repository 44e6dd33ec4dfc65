//! Frontend Configuration
//!
//! Read once at startup from an optional
//! `<script type="application/json" id="travel-ai-config">` element.
//! Missing keys keep their defaults.

use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "travel-ai-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every backend path, empty for same origin
    pub api_base: String,
    pub tracker_tick_ms: u64,
    /// Chance per tick of a simulated (demo) live update
    pub live_update_chance: f64,
    pub weather_alert_interval_ms: u64,
    pub suggestion_debounce_ms: u64,
    pub loading_restore_ms: u64,
    pub alert_dismiss_ms: u64,
    pub autosave_prefix: String,
    pub log_level: String,
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            tracker_tick_ms: 10_000,
            live_update_chance: 0.2,
            weather_alert_interval_ms: 3_600_000,
            suggestion_debounce_ms: 300,
            loading_restore_ms: 30_000,
            alert_dismiss_ms: 5_000,
            autosave_prefix: trip_forms::autosave::DEFAULT_PREFIX.to_string(),
            log_level: "info".to_string(),
            log_capacity: console_logger::DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Parse the JSON config blob, falling back to defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load from the page, if a config element exists
    pub fn from_document(doc: &web_sys::Document) -> Self {
        let Some(el) = doc.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let raw = el.text_content().unwrap_or_default();
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                // Logger is not up yet; go straight to the console
                web_sys::console::warn_1(&format!("[Config] Ignoring invalid config: {}", e).into());
                Self::default()
            }
        }
    }

    /// Absolute or same-origin URL for a backend path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn tracker_tick(&self) -> Duration {
        Duration::from_millis(self.tracker_tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"api_base": "https://api.example.test/", "tracker_tick_ms": 500}"#).unwrap();
        assert_eq!(config.tracker_tick(), Duration::from_millis(500));
        assert_eq!(config.suggestion_debounce_ms, 300);
        assert_eq!(config.autosave_prefix, "autosave_");
        assert_eq!(config.api_url("/api/weather-alerts"), "https://api.example.test/api/weather-alerts");
    }

    #[test]
    fn test_same_origin_by_default() {
        let config = AppConfig::default();
        assert_eq!(config.api_url("/generate_itinerary"), "/generate_itinerary");
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = AppConfig { log_level: "chatty".to_string(), ..AppConfig::default() };
        assert_eq!(config.level_filter(), LevelFilter::Info);
        let config = AppConfig { log_level: "debug".to_string(), ..AppConfig::default() };
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }
}
