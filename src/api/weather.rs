//! Weather Lookups

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::get_json;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{WeatherAlert, WeatherSnapshot};

/// Characters `encodeURIComponent` leaves alone
const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const WEATHER_ALERTS_PATH: &str = "/api/weather-alerts";

pub fn weather_path(destination: &str) -> String {
    format!("/api/weather/{}", utf8_percent_encode(destination, COMPONENT_SET))
}

pub async fn fetch_weather(config: &AppConfig, destination: &str) -> Result<WeatherSnapshot, ApiError> {
    get_json(&config.api_url(&weather_path(destination))).await
}

pub async fn fetch_weather_alerts(config: &AppConfig) -> Result<Vec<WeatherAlert>, ApiError> {
    get_json(&config.api_url(WEATHER_ALERTS_PATH)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_is_component_encoded() {
        assert_eq!(weather_path("Goa, India"), "/api/weather/Goa%2C%20India");
        assert_eq!(weather_path("Leh/Ladakh"), "/api/weather/Leh%2FLadakh");
    }
}
