//! Weather Display Rules
//!
//! Fixed lookup tables that turn a weather snapshot into colors, icons and labels.

/// Temperature color band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Danger,
    Warning,
    Success,
    Info,
}

impl TemperatureBand {
    /// Strict thresholds: >35, >25, >15, else
    pub fn from_celsius(temp: f64) -> Self {
        if temp > 35.0 {
            TemperatureBand::Danger
        } else if temp > 25.0 {
            TemperatureBand::Warning
        } else if temp > 15.0 {
            TemperatureBand::Success
        } else {
            TemperatureBand::Info
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            TemperatureBand::Danger => "text-danger",
            TemperatureBand::Warning => "text-warning",
            TemperatureBand::Success => "text-success",
            TemperatureBand::Info => "text-info",
        }
    }
}

const CONDITION_ICONS: &[(&str, &str)] = &[
    ("clear", "sun"),
    ("clouds", "cloud"),
    ("rain", "cloud-rain"),
    ("snow", "snowflake"),
    ("thunderstorm", "bolt"),
    ("drizzle", "cloud-drizzle"),
    ("mist", "smog"),
    ("fog", "smog"),
];

const DEFAULT_CONDITION_ICON: &str = "cloud";

/// Icon for a condition code such as `Clear` or `Rain` (case-insensitive)
pub fn condition_icon(condition: &str) -> &'static str {
    let condition = condition.to_lowercase();
    CONDITION_ICONS
        .iter()
        .find(|(code, _)| *code == condition)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_CONDITION_ICON)
}

/// Round half up, the way the page displays whole degrees
pub fn round_degrees(temp: f64) -> i64 {
    (temp + 0.5).floor() as i64
}

/// Visibility in metres as kilometres with one decimal
pub fn format_visibility_km(metres: f64) -> String {
    format!("{:.1} km", metres / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_by_example() {
        assert_eq!(TemperatureBand::from_celsius(36.0), TemperatureBand::Danger);
        assert_eq!(TemperatureBand::from_celsius(26.0), TemperatureBand::Warning);
        assert_eq!(TemperatureBand::from_celsius(16.0), TemperatureBand::Success);
        assert_eq!(TemperatureBand::from_celsius(5.0), TemperatureBand::Info);
    }

    #[test]
    fn test_band_boundaries_fall_to_the_lower_band() {
        assert_eq!(TemperatureBand::from_celsius(35.0), TemperatureBand::Warning);
        assert_eq!(TemperatureBand::from_celsius(25.0), TemperatureBand::Success);
        assert_eq!(TemperatureBand::from_celsius(15.0), TemperatureBand::Info);
        assert_eq!(TemperatureBand::from_celsius(35.01).css_class(), "text-danger");
    }

    #[test]
    fn test_condition_icons_with_fallback() {
        assert_eq!(condition_icon("Clear"), "sun");
        assert_eq!(condition_icon("FOG"), "smog");
        assert_eq!(condition_icon("Haze"), "cloud");
        assert_eq!(condition_icon(""), "cloud");
    }

    #[test]
    fn test_rounding_and_visibility() {
        assert_eq!(round_degrees(28.5), 29);
        assert_eq!(round_degrees(-2.5), -2);
        assert_eq!(round_degrees(28.49), 28);
        assert_eq!(format_visibility_km(10000.0), "10.0 km");
        assert_eq!(format_visibility_km(2600.0), "2.6 km");
    }
}
