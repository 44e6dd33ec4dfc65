//! Frontend Models
//!
//! Data structures matching backend JSON responses.

use serde::{Deserialize, Serialize};

/// A scheduled stop within an itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub id: u32,
    pub location: String,
    #[serde(default)]
    pub activity: String,
    pub day: u32,
    pub time: String,
    #[serde(default)]
    pub estimated_cost: f64,
    #[serde(default)]
    pub is_completed: bool,
    pub completed_at: Option<String>,
    pub notes: Option<String>,
}

/// `GET /api/itinerary/{id}/checkpoints`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckpointsResponse {
    #[serde(default)]
    pub checkpoints: Vec<Checkpoint>,
    pub next_checkpoint: Option<Checkpoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub main: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherNotice {
    #[serde(default)]
    pub description: String,
}

/// `GET /api/weather/{destination}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub weather: Vec<WeatherCondition>,
    pub main: WeatherMain,
    #[serde(default)]
    pub wind: Option<Wind>,
    /// Metres
    pub visibility: Option<f64>,
    #[serde(default)]
    pub alerts: Vec<WeatherNotice>,
}

impl WeatherSnapshot {
    pub fn condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind.as_ref().map(|w| w.speed).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertWeather {
    pub description: String,
    #[serde(default)]
    pub temp: f64,
}

/// One entry of `GET /api/weather-alerts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub destination: String,
    pub travel_date: Option<String>,
    pub severity: String,
    pub weather: AlertWeather,
}

impl WeatherAlert {
    pub fn is_high_severity(&self) -> bool {
        self.severity == "high"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoints_response_tolerates_missing_fields() {
        let json = r#"{
            "checkpoints": [
                {"id": 1, "location": "Baga Beach", "day": 1, "time": "09:00",
                 "completed_at": null, "notes": null}
            ],
            "next_checkpoint": null
        }"#;
        let parsed: CheckpointsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.checkpoints.len(), 1);
        assert_eq!(parsed.checkpoints[0].estimated_cost, 0.0);
        assert!(!parsed.checkpoints[0].is_completed);
        assert!(parsed.next_checkpoint.is_none());
    }

    #[test]
    fn test_weather_snapshot_defaults() {
        let json = r#"{
            "weather": [{"main": "Rain", "description": "light rain"}],
            "main": {"temp": 27.4, "feels_like": 30.1, "humidity": 81}
        }"#;
        let snap: WeatherSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.wind_speed(), 0.0);
        assert_eq!(snap.visibility, None);
        assert!(snap.alerts.is_empty());
        assert_eq!(snap.condition().map(|c| c.main.as_str()), Some("Rain"));
    }

    #[test]
    fn test_alert_severity() {
        let json = r#"[{"destination": "Goa", "travel_date": "2025-06-01", "severity": "high",
                        "weather": {"description": "Heavy rain expected", "temp": 24}}]"#;
        let alerts: Vec<WeatherAlert> = serde_json::from_str(json).unwrap();
        assert!(alerts[0].is_high_severity());
        assert_eq!(alerts[0].weather.temp, 24.0);
    }
}
